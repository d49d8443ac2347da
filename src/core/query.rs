//! Search keys for the letter trie

use super::profile::{ALPHABET_LEN, LetterProfile, ProfileError};

/// A multiset of available letters, optionally with a center letter
///
/// When a center letter is set, only words that use it at least once match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    profile: LetterProfile,
    center: Option<u8>,
}

impl Query {
    /// Query with no center letter constraint
    #[must_use]
    pub const fn new(profile: LetterProfile) -> Self {
        Self {
            profile,
            center: None,
        }
    }

    /// Query whose matches must contain `center`
    #[must_use]
    pub const fn with_center(profile: LetterProfile, center: u8) -> Self {
        Self {
            profile,
            center: Some(center),
        }
    }

    /// Build a query from the letters of a word
    ///
    /// # Errors
    /// Returns `ProfileError` if `letters` is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use letter_combinations::core::Query;
    ///
    /// let query = Query::from_letters("then").unwrap();
    /// assert_eq!(query.profile().len(), 4);
    /// assert_eq!(query.center(), None);
    /// ```
    pub fn from_letters(letters: &str) -> Result<Self, ProfileError> {
        LetterProfile::new(letters).map(Self::new)
    }

    /// Reuse this query for new letters and center, keeping its buffers
    pub fn refill(&mut self, histogram: &[u8; ALPHABET_LEN], center: Option<u8>) {
        self.profile.refill_from_histogram(histogram);
        self.center = center;
    }

    #[inline]
    #[must_use]
    pub const fn profile(&self) -> &LetterProfile {
        &self.profile
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> Option<u8> {
        self.center
    }
}

impl From<LetterProfile> for Query {
    fn from(profile: LetterProfile) -> Self {
        Self::new(profile)
    }
}
