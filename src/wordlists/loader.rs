//! Word list loading utilities
//!
//! Provides line-oriented dictionary reading with per-word callbacks, plus helpers
//! that collect straight into profiles.

use crate::core::LetterProfile;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Filters applied while reading a dictionary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Shortest word kept
    pub min_length: usize,
    /// Longest word kept
    pub max_length: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: usize::MAX,
        }
    }
}

impl LoadOptions {
    /// Keep only words of `min..=max` letters
    #[must_use]
    pub const fn with_lengths(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    fn accepts(&self, word: &str) -> bool {
        (self.min_length..=self.max_length).contains(&word.len())
    }
}

/// Profile every acceptable line of `reader` and hand it to `callback`
///
/// Blank lines, words outside the length bounds, lines that are not UTF-8 and words
/// that cannot be profiled (digits, punctuation, non-ASCII) are skipped. Returns the number of words passed
/// to `callback`.
///
/// # Errors
///
/// Returns an I/O error if reading from `reader` fails.
pub fn for_each_word<R, F>(reader: R, options: LoadOptions, mut callback: F) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(LetterProfile),
{
    let mut accepted = 0;
    let mut skipped = 0;

    for (number, line) in reader.split(b'\n').enumerate() {
        let bytes = line?;
        let Ok(line) = std::str::from_utf8(&bytes) else {
            debug!(line = number + 1, "Skipping dictionary line that is not UTF-8");
            skipped += 1;
            continue;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || !options.accepts(trimmed) {
            continue;
        }

        match LetterProfile::new(trimmed) {
            Ok(profile) => {
                callback(profile);
                accepted += 1;
            }
            Err(e) => {
                debug!(word = trimmed, error = %e, "Skipping dictionary line");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        info!(accepted, skipped, "Skipped malformed dictionary lines");
    }
    Ok(accepted)
}

/// Load words from a file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use letter_combinations::wordlists::loader::{LoadOptions, load_from_file};
///
/// let words = load_from_file("words.txt", LoadOptions::with_lengths(3, 9)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    options: LoadOptions,
) -> io::Result<Vec<LetterProfile>> {
    let reader = BufReader::new(File::open(path)?);
    let mut profiles = Vec::new();
    for_each_word(reader, options, |profile| profiles.push(profile))?;
    Ok(profiles)
}

/// Convert an embedded string slice to profiles
///
/// # Examples
/// ```
/// use letter_combinations::wordlists::loader::{LoadOptions, profiles_from_slice};
/// use letter_combinations::wordlists::SAMPLE;
///
/// let words = profiles_from_slice(SAMPLE, LoadOptions::default());
/// assert_eq!(words.len(), SAMPLE.len());
/// ```
#[must_use]
pub fn profiles_from_slice(slice: &[&str], options: LoadOptions) -> Vec<LetterProfile> {
    slice
        .iter()
        .filter(|s| options.accepts(s))
        .filter_map(|&s| match LetterProfile::new(s) {
            Ok(profile) => Some(profile),
            Err(e) => {
                debug!(word = s, error = %e, "Skipping dictionary entry");
                None
            }
        })
        .collect()
}
