//! Search configuration

use crate::core::ALPHABET_LEN;
use std::thread;
use thiserror::Error;

/// Error type for search runs that cannot start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("At least one worker is required")]
    NoWorkers,
    #[error("Alphabet size must be between 1 and {ALPHABET_LEN}, got {0}", ALPHABET_LEN = ALPHABET_LEN)]
    InvalidAlphabetSize(usize),
}

/// Tunables for a parallel search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of worker threads
    pub workers: usize,
    /// Capacity of the candidate queue between the producer and the workers
    pub queue_depth: usize,
    /// Letters considered when generating candidates (`a` onwards)
    pub alphabet_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let workers = thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get);
        Self {
            workers,
            queue_depth: workers,
            alphabet_size: ALPHABET_LEN,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    #[must_use]
    pub const fn with_queue_depth(mut self, queue_depth: usize) -> Self {
        self.queue_depth = queue_depth;
        self
    }

    #[must_use]
    pub const fn with_alphabet_size(mut self, alphabet_size: usize) -> Self {
        self.alphabet_size = alphabet_size;
        self
    }

    /// Check the configuration before any thread is spawned
    ///
    /// # Errors
    /// Returns `SearchError` for zero workers or an alphabet size outside `1..=26`.
    pub const fn validate(&self) -> Result<(), SearchError> {
        if self.workers == 0 {
            return Err(SearchError::NoWorkers);
        }
        if self.alphabet_size == 0 || self.alphabet_size > ALPHABET_LEN {
            return Err(SearchError::InvalidAlphabetSize(self.alphabet_size));
        }
        Ok(())
    }

    /// Alphabet size as a letter index bound
    ///
    /// Only meaningful after `validate` succeeded.
    #[must_use]
    pub fn alphabet(&self) -> u8 {
        u8::try_from(self.alphabet_size).unwrap_or(ALPHABET_LEN as u8)
    }
}
