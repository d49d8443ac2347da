//! Combinations with repetition
//!
//! Enumerates every non-decreasing `K`-tuple over `0..n` in lexicographic order,
//! `C(n + K - 1, K)` tuples in total, without materializing them.

/// Lazy iterator over non-decreasing index tuples
///
/// Cloning yields an independent iterator at the same position; `restart` rewinds.
///
/// # Examples
/// ```
/// use letter_combinations::candidates::CombinationsWithRepetition;
///
/// let tuples: Vec<[u8; 2]> = CombinationsWithRepetition::new(3).collect();
/// assert_eq!(tuples, vec![[0, 0], [0, 1], [0, 2], [1, 1], [1, 2], [2, 2]]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationsWithRepetition<const K: usize> {
    alphabet: u8,
    next: Option<[u8; K]>,
}

impl<const K: usize> CombinationsWithRepetition<K> {
    /// Enumerate tuples over an alphabet of size `alphabet`
    #[must_use]
    pub const fn new(alphabet: u8) -> Self {
        Self {
            alphabet,
            next: Self::first(alphabet),
        }
    }

    /// Rewind to the first tuple
    pub fn restart(&mut self) {
        self.next = Self::first(self.alphabet);
    }

    /// Total number of tuples a fresh iterator yields
    #[must_use]
    pub fn total(&self) -> u64 {
        combinations_with_repetition_count(u64::from(self.alphabet), K as u64)
    }

    const fn first(alphabet: u8) -> Option<[u8; K]> {
        if alphabet == 0 && K > 0 {
            None
        } else {
            Some([0; K])
        }
    }

    /// Successor of `current`: bump the rightmost position that can still grow,
    /// then reset everything to its right to the same value
    fn successor(&self, mut current: [u8; K]) -> Option<[u8; K]> {
        let last = self.alphabet.checked_sub(1)?;
        let position = current.iter().rposition(|&value| value < last)?;

        let value = current[position] + 1;
        for slot in &mut current[position..] {
            *slot = value;
        }
        Some(current)
    }
}

impl<const K: usize> Iterator for CombinationsWithRepetition<K> {
    type Item = [u8; K];

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.successor(current);
        Some(current)
    }
}

/// Number of non-decreasing `k`-tuples over `n` symbols, `C(n + k - 1, k)`
///
/// # Examples
/// ```
/// use letter_combinations::candidates::combinations_with_repetition_count;
///
/// assert_eq!(combinations_with_repetition_count(3, 2), 6);
/// assert_eq!(combinations_with_repetition_count(26, 8), 13_884_156);
/// ```
#[must_use]
pub fn combinations_with_repetition_count(n: u64, k: u64) -> u64 {
    if n == 0 {
        return u64::from(k == 0);
    }

    // Multiplicative binomial; each partial product is itself a binomial coefficient
    let top = n + k - 1;
    let k = k.min(top - k);
    (0..k).fold(1, |acc, i| acc * (top - i) / (i + 1))
}
