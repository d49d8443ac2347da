//! Best word-wheel search
//!
//! Tries every multiset of eight outer letters with every center letter and keeps
//! the wheel that spells the most indexed words.

use crate::candidates::{
    CombinationsWithRepetition, OUTER_LETTERS, Wheel, combinations_with_repetition_count,
};
use crate::core::{ALPHABET_LEN, LetterProfile, Query};
use crate::index::{LetterTrie, count_matches, count_matches_brute_force};
use crate::search::{ProgressSink, SearchConfig, SearchError, find_best};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a wheel search
#[derive(Debug)]
pub struct WheelResult {
    pub wheel: Option<Wheel>,
    pub count: usize,
    /// Count for the winner recomputed by scanning the whole dictionary
    pub verified_count: usize,
    pub wheels_searched: u64,
    pub duration: Duration,
}

/// Number of outer letter combinations a search over `config` enumerates
///
/// Each one expands into `alphabet_size` wheels.
#[must_use]
pub fn outer_combinations(config: &SearchConfig) -> u64 {
    combinations_with_repetition_count(config.alphabet_size as u64, OUTER_LETTERS as u64)
}

/// Exhaustively search all wheels over the configured alphabet
///
/// Progress is reported per outer combination, see `outer_combinations`.
///
/// # Errors
///
/// Returns `SearchError` if `config` is invalid.
pub fn find_best_wheel(
    trie: &LetterTrie,
    config: &SearchConfig,
    progress: &dyn ProgressSink,
) -> Result<WheelResult, SearchError> {
    config.validate()?;

    let start = Instant::now();
    let alphabet = config.alphabet();
    let outers = outer_combinations(config);
    let wheels_searched = outers * u64::from(alphabet);

    info!(
        outer_combinations = outers,
        wheels = wheels_searched,
        workers = config.workers,
        "Searching for the best letter wheel"
    );

    let best = find_best(
        CombinationsWithRepetition::<OUTER_LETTERS>::new(alphabet),
        config,
        progress,
        |outer, best| {
            // One set of buffers per outer combination, refilled for each center
            let mut query = Query::new(LetterProfile::from_histogram(&[0; ALPHABET_LEN]));
            for wheel in Wheel::with_each_center(outer, alphabet) {
                wheel.fill_query(&mut query);
                best.offer(wheel, count_matches(trie, &query));
            }
        },
    )?;

    let count = best.count();
    let wheel = best.candidate().copied();
    let verified_count = wheel.map_or(0, |w| count_matches_brute_force(trie, &w.query()));

    if verified_count == count {
        info!(wheel = ?wheel, count, "Wheel search finished");
    } else {
        warn!(count, verified_count, "Verification count disagrees with trie search");
    }

    Ok(WheelResult {
        wheel,
        count,
        verified_count,
        wheels_searched,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{Silent, Tally};
    use crate::wordlists::SAMPLE;

    #[test]
    fn single_letter_alphabet() {
        let trie = LetterTrie::build(["a", "aa", "aaaaaaaaaa", "b"]).unwrap();
        let config = SearchConfig::new().with_workers(2).with_alphabet_size(1);

        let result = find_best_wheel(&trie, &config, &Silent).unwrap();

        // The only wheel is nine a's; the ten letter word does not fit
        assert_eq!(result.wheel, Some(Wheel::new(*b"aaaaaaaa", b'a')));
        assert_eq!(result.count, 2);
        assert_eq!(result.verified_count, 2);
        assert_eq!(result.wheels_searched, 1);
    }

    #[test]
    fn verified_count_agrees_on_sample() {
        let trie = LetterTrie::build(SAMPLE.iter().copied()).unwrap();
        let config = SearchConfig::new().with_workers(4).with_alphabet_size(5);

        let result = find_best_wheel(&trie, &config, &Silent).unwrap();

        assert!(result.wheel.is_some());
        assert_eq!(result.count, result.verified_count);
        assert_eq!(
            result.wheels_searched,
            combinations_with_repetition_count(5, 8) * 5
        );
    }

    #[test]
    fn winner_uses_its_center() {
        let trie = LetterTrie::build(["bad", "dab", "cab", "abc", "ad"]).unwrap();
        let config = SearchConfig::new().with_workers(3).with_alphabet_size(4);

        let result = find_best_wheel(&trie, &config, &Silent).unwrap();
        let wheel = result.wheel.unwrap();

        // 'a' is the only letter shared by every word, so only an 'a' center
        // can spell all five
        assert_eq!(result.count, 5);
        assert_eq!(wheel.center(), b'a');
        assert_eq!(result.verified_count, 5);
    }

    #[test]
    fn agrees_with_fresh_query_per_wheel() {
        let trie = LetterTrie::build(SAMPLE.iter().copied()).unwrap();
        let config = SearchConfig::new().with_workers(2).with_alphabet_size(4);

        let mut expected = crate::search::Best::new();
        for outer in CombinationsWithRepetition::<OUTER_LETTERS>::new(4) {
            for wheel in Wheel::with_each_center(outer, 4) {
                expected.offer(wheel, count_matches(&trie, &wheel.query()));
            }
        }

        let result = find_best_wheel(&trie, &config, &Silent).unwrap();
        assert_eq!(result.wheel, expected.candidate().copied());
        assert_eq!(result.count, expected.count());
    }

    #[test]
    fn reduced_alphabet_limits_centers() {
        // No generated wheel contains 'z', so nothing can be spelled
        let trie = LetterTrie::build(["z", "zz"]).unwrap();
        let config = SearchConfig::new().with_workers(2).with_alphabet_size(3);

        let result = find_best_wheel(&trie, &config, &Silent).unwrap();
        let wheel = result.wheel.unwrap();

        assert_eq!(result.count, 0);
        assert!(wheel.center() <= b'c');
        assert!(wheel.outer().iter().all(|&l| l <= b'c'));
    }

    #[test]
    fn progress_counts_outer_combinations() {
        let trie = LetterTrie::build(["then"]).unwrap();
        let config = SearchConfig::new().with_workers(2).with_alphabet_size(3);
        let tally = Tally::default();

        find_best_wheel(&trie, &config, &tally).unwrap();
        assert_eq!(tally.units(), outer_combinations(&config));
    }

    #[test]
    fn invalid_alphabet_rejected() {
        let trie = LetterTrie::build(["then"]).unwrap();
        let config = SearchConfig::new().with_alphabet_size(40);
        assert!(matches!(
            find_best_wheel(&trie, &config, &Silent),
            Err(SearchError::InvalidAlphabetSize(40))
        ));
    }
}
