//! Word-wheel candidates
//!
//! A wheel is eight outer letters around one center letter. Every answer must use
//! the center letter, and no letter may be used more often than it appears.

use crate::core::{ALPHABET_LEN, LetterProfile, ProfileError, Query};
use std::fmt;
use thiserror::Error;

/// Letters around the edge of a wheel
pub const OUTER_LETTERS: usize = 8;

/// Total letters on a wheel, center included
pub const WHEEL_SIZE: usize = OUTER_LETTERS + 1;

/// Error type for wheels parsed from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WheelError {
    #[error("A wheel needs exactly 9 letters, got {0}")]
    InvalidLength(usize),
    #[error(transparent)]
    InvalidLetters(#[from] ProfileError),
}

/// Eight outer letters and one center letter
///
/// Outer letters are kept sorted so that equal multisets compare equal. Ordering is
/// by outer letters, then center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Wheel {
    outer: [u8; OUTER_LETTERS],
    center: u8,
}

impl Wheel {
    /// Create a wheel from ASCII lowercase letters
    #[must_use]
    pub fn new(mut outer: [u8; OUTER_LETTERS], center: u8) -> Self {
        outer.sort_unstable();
        Self { outer, center }
    }

    /// Create a wheel from alphabet indices (`0` is `a`)
    #[must_use]
    pub fn from_indices(outer: [u8; OUTER_LETTERS], center: u8) -> Self {
        Self::new(outer.map(|index| b'a' + index), b'a' + center)
    }

    /// Parse nine letters, the first of which is the center
    ///
    /// # Errors
    /// Returns `WheelError` if there are not exactly nine letters or any of them is
    /// not an ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use letter_combinations::candidates::Wheel;
    ///
    /// assert!(Wheel::parse("eaaahllo e").is_err());
    ///
    /// let wheel = Wheel::parse("EAAAHLLOE").unwrap();
    /// assert_eq!(wheel.center(), b'e');
    /// assert_eq!(wheel.outer(), b"aaaehllo");
    /// ```
    pub fn parse(letters: &str) -> Result<Self, WheelError> {
        // Validates characters and lowercases
        let profile = LetterProfile::new(letters)?;
        let bytes = profile.word().as_bytes();

        let Some((&center, rest)) = bytes.split_first() else {
            return Err(WheelError::InvalidLength(0));
        };
        let outer: [u8; OUTER_LETTERS] = rest
            .try_into()
            .map_err(|_| WheelError::InvalidLength(bytes.len()))?;

        Ok(Self::new(outer, center))
    }

    /// Every wheel with the given outer letters, one per possible center letter
    ///
    /// `outer` holds alphabet indices; centers range over the first `alphabet` letters.
    pub fn with_each_center(
        outer: [u8; OUTER_LETTERS],
        alphabet: u8,
    ) -> impl Iterator<Item = Self> {
        (0..alphabet).map(move |center| Self::from_indices(outer, center))
    }

    #[inline]
    #[must_use]
    pub const fn outer(&self) -> &[u8; OUTER_LETTERS] {
        &self.outer
    }

    #[inline]
    #[must_use]
    pub const fn center(&self) -> u8 {
        self.center
    }

    /// Count of each letter on the wheel, center included
    #[must_use]
    pub fn histogram(&self) -> [u8; ALPHABET_LEN] {
        let mut histogram = [0u8; ALPHABET_LEN];
        for &letter in self.outer.iter().chain(std::iter::once(&self.center)) {
            histogram[usize::from(letter - b'a')] += 1;
        }
        histogram
    }

    /// Search key: all nine letters, with the center marked as required
    #[must_use]
    pub fn query(&self) -> Query {
        Query::with_center(LetterProfile::from_histogram(&self.histogram()), self.center)
    }

    /// Write this wheel's search key into an existing query
    ///
    /// Used in the exhaustive search, where one query is reused for every center.
    pub fn fill_query(&self, query: &mut Query) {
        query.refill(&self.histogram(), Some(self.center));
    }

    /// All nine letters, sorted
    #[must_use]
    pub fn letters(&self) -> String {
        LetterProfile::from_histogram(&self.histogram())
            .word()
            .to_string()
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outer = String::from_utf8_lossy(&self.outer);
        write!(f, "{outer}+{}", char::from(self.center))
    }
}
