//! Letter profile representation
//!
//! A `LetterProfile` stores a word together with its canonical signature: one
//! `(letter, count)` pair per distinct letter, sorted by letter.

use std::fmt;
use thiserror::Error;

/// Number of letters in the Latin lowercase alphabet
pub const ALPHABET_LEN: usize = 26;

/// A distinct letter and how many times it occurs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterCount {
    /// ASCII lowercase letter (`b'a'..=b'z'`)
    pub letter: u8,
    /// Multiplicity, always at least 1
    pub count: u8,
}

/// Error type for words that cannot be profiled
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid character '{0}'")]
    InvalidCharacter(char),
    #[error("Letter '{letter}' repeats {count} times, at most 255 are supported")]
    TooManyRepeats { letter: char, count: usize },
}

/// Canonical sorted letter-count signature of a word
///
/// Invariant: `counts` is strictly increasing by letter and the counts sum to `len`.
/// Profiles order by word first, so sorting them is alphabetical.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LetterProfile {
    word: String,
    counts: Vec<LetterCount>,
    len: usize,
}

impl LetterProfile {
    /// Build the profile of a word
    ///
    /// The word is lowercased before profiling.
    ///
    /// # Errors
    /// Returns `ProfileError` if the word:
    /// - Is empty
    /// - Contains non-ASCII or non-alphabetic characters
    /// - Repeats a letter more than 255 times
    ///
    /// # Examples
    /// ```
    /// use letter_combinations::core::LetterProfile;
    ///
    /// let profile = LetterProfile::new("hello").unwrap();
    /// assert_eq!(profile.distinct_letters(), b"ehlo");
    /// assert_eq!(profile.count_of(b'l'), 2);
    ///
    /// assert!(LetterProfile::new("").is_err());
    /// assert!(LetterProfile::new("he11o").is_err());
    /// ```
    pub fn new(word: impl Into<String>) -> Result<Self, ProfileError> {
        let word: String = word.into().to_lowercase();

        if word.is_empty() {
            return Err(ProfileError::Empty);
        }

        if !word.is_ascii() {
            return Err(ProfileError::NonAscii);
        }

        if let Some(bad) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(ProfileError::InvalidCharacter(bad));
        }

        let mut histogram = [0usize; ALPHABET_LEN];
        for &byte in word.as_bytes() {
            histogram[usize::from(byte - b'a')] += 1;
        }

        let mut counts = Vec::new();
        for (index, &count) in histogram.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let letter = b'a' + index as u8;
            let count = u8::try_from(count).map_err(|_| ProfileError::TooManyRepeats {
                letter: char::from(letter),
                count,
            })?;
            counts.push(LetterCount { letter, count });
        }

        let len = word.len();
        Ok(Self { word, counts, len })
    }

    /// Build a profile from a per-letter histogram
    ///
    /// `histogram[i]` is the count of letter `b'a' + i`. The profile's word is the
    /// letters spelled out in sorted order.
    #[must_use]
    pub fn from_histogram(histogram: &[u8; ALPHABET_LEN]) -> Self {
        let mut profile = Self {
            word: String::new(),
            counts: Vec::new(),
            len: 0,
        };
        profile.refill_from_histogram(histogram);
        profile
    }

    /// Overwrite this profile with the letters of `histogram`
    ///
    /// Same result as `from_histogram`, but keeps the existing buffers, so a profile
    /// reused for same-sized histograms stops allocating after the first fill.
    pub fn refill_from_histogram(&mut self, histogram: &[u8; ALPHABET_LEN]) {
        self.word.clear();
        self.counts.clear();

        for (index, &count) in histogram.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let letter = b'a' + index as u8;
            self.counts.push(LetterCount { letter, count });
            self.word
                .extend(std::iter::repeat_n(char::from(letter), usize::from(count)));
        }

        self.len = self.word.len();
    }

    /// Get the original word
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Get the sorted `(letter, count)` pairs
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[LetterCount] {
        &self.counts
    }

    /// Total number of letters (sum of all counts)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false for profiles built from words; histogram profiles may be empty
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The sorted distinct letters, i.e. the trie path of this profile
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<u8> {
        self.counts.iter().map(|lc| lc.letter).collect()
    }

    /// Count of a single letter, 0 if absent
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        self.counts
            .binary_search_by_key(&letter, |lc| lc.letter)
            .map_or(0, |i| self.counts[i].count)
    }

    /// True when no letter appears more than once
    #[must_use]
    pub fn has_distinct_letters(&self) -> bool {
        self.counts.iter().all(|lc| lc.count == 1)
    }
}

impl fmt::Display for LetterProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}
