//! Most imperfect anagrams
//!
//! Finds the indexed word whose letters spell the most indexed words, itself
//! included ("then" spells he, hen, net, ten, the and then).

use crate::core::{LetterProfile, Query};
use crate::index::{LetterTrie, collect_matches, count_matches};
use crate::search::{ProgressSink, SearchConfig, SearchError, find_best};
use std::time::{Duration, Instant};
use tracing::info;

/// Result of an imperfect anagram search
#[derive(Debug)]
pub struct AnagramResult<'t> {
    /// Winning word, `None` for an empty dictionary
    pub word: Option<&'t str>,
    pub count: usize,
    /// Words spelled by the winner, sorted
    pub matches: Vec<&'t str>,
    pub words_searched: usize,
    pub duration: Duration,
}

/// Search every indexed word for the one with the most imperfect anagrams
///
/// # Errors
///
/// Returns `SearchError` if `config` is invalid.
pub fn find_most_imperfect_anagrams<'t>(
    trie: &'t LetterTrie,
    config: &SearchConfig,
    progress: &dyn ProgressSink,
) -> Result<AnagramResult<'t>, SearchError> {
    let start = Instant::now();
    info!(
        words = trie.len(),
        workers = config.workers,
        "Searching for the word with the most imperfect anagrams"
    );

    let best = find_best(trie.profiles(), config, progress, |profile, best| {
        let query = Query::new(profile.clone());
        best.offer(profile, count_matches(trie, &query));
    })?;

    let count = best.count();
    let winner = best.candidate().copied();
    let word = winner.map(LetterProfile::word);
    let matches = winner.map_or_else(Vec::new, |profile| spelled_by(trie, profile));

    info!(word = word.unwrap_or("-"), count, "Imperfect anagram search finished");

    Ok(AnagramResult {
        word,
        count,
        matches,
        words_searched: trie.len(),
        duration: start.elapsed(),
    })
}

fn spelled_by<'t>(trie: &'t LetterTrie, profile: &LetterProfile) -> Vec<&'t str> {
    let mut words: Vec<&str> = collect_matches(trie, &Query::new(profile.clone()))
        .into_iter()
        .map(LetterProfile::word)
        .collect();
    words.sort_unstable();
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Silent;
    use crate::wordlists::SAMPLE;

    #[test]
    fn then_wins_small_dictionary() {
        let trie = LetterTrie::build(["hen", "net", "ten", "the", "then", "he"]).unwrap();
        let config = SearchConfig::new().with_workers(2);

        let result = find_most_imperfect_anagrams(&trie, &config, &Silent).unwrap();

        assert_eq!(result.word, Some("then"));
        assert_eq!(result.count, 6);
        assert_eq!(result.matches, vec!["he", "hen", "net", "ten", "the", "then"]);
        assert_eq!(result.words_searched, 6);
    }

    #[test]
    fn winner_count_matches_its_list() {
        let trie = LetterTrie::build(SAMPLE.iter().copied()).unwrap();
        let config = SearchConfig::new().with_workers(4);

        let result = find_most_imperfect_anagrams(&trie, &config, &Silent).unwrap();

        assert!(result.word.is_some());
        assert_eq!(result.matches.len(), result.count);
        for profile in trie.profiles() {
            let count = count_matches(&trie, &Query::new(profile.clone()));
            assert!(count <= result.count, "'{profile}' beats the winner");
        }
    }

    #[test]
    fn ties_choose_alphabetically_first_word() {
        // Every word only spells itself
        let trie = LetterTrie::build(["zap", "cod", "mix"]).unwrap();
        let config = SearchConfig::new().with_workers(3);

        let result = find_most_imperfect_anagrams(&trie, &config, &Silent).unwrap();
        assert_eq!(result.word, Some("cod"));
        assert_eq!(result.count, 1);
    }

    #[test]
    fn winner_matches_listed_from_its_profile() {
        let trie = LetterTrie::build(["Then", "then", "hen"]).unwrap();
        let config = SearchConfig::new().with_workers(2);

        let result = find_most_imperfect_anagrams(&trie, &config, &Silent).unwrap();

        assert_eq!(result.word, Some("then"));
        assert_eq!(result.count, 3);
        assert_eq!(result.matches, vec!["hen", "then", "then"]);
    }

    #[test]
    fn empty_dictionary_has_no_winner() {
        let trie = LetterTrie::build(Vec::<&str>::new()).unwrap();
        let config = SearchConfig::new().with_workers(2);

        let result = find_most_imperfect_anagrams(&trie, &config, &Silent).unwrap();
        assert_eq!(result.word, None);
        assert_eq!(result.count, 0);
        assert!(result.matches.is_empty());
    }

    #[test]
    fn invalid_config_propagates() {
        let trie = LetterTrie::build(["then"]).unwrap();
        let config = SearchConfig::new().with_workers(0);
        assert!(matches!(
            find_most_imperfect_anagrams(&trie, &config, &Silent),
            Err(SearchError::NoWorkers)
        ));
    }
}
