//! Subset search over the letter trie
//!
//! A trie path is one sorted sequence of distinct letters, but a query like
//! `{e,h,n,t}` also matches words built from `{e,h,n}`, `{e,n,t}`, `{h}` and every
//! other sorted subsequence of its letters. The walk therefore tries every query
//! letter at or after the current position at each node, instead of following a
//! single prefix. Branches without a matching child are skipped, so the cost is
//! bounded by the trie's real branching rather than by the power set.

use super::trie::{LetterTrie, TrieNode};
use crate::core::{LetterCount, LetterProfile, Query, matches_query};
use rayon::prelude::*;

/// Visit every indexed profile that matches `query`
///
/// Each matching profile is visited exactly once. Recursion depth is bounded by the
/// number of distinct letters in the query (at most 26).
pub fn for_each_match<'t, F>(trie: &'t LetterTrie, query: &Query, mut visit: F)
where
    F: FnMut(&'t LetterProfile),
{
    let letters = query.profile().counts();
    walk(trie, trie.root(), letters, 0, query, &mut visit);
}

fn walk<'t, F>(
    trie: &'t LetterTrie,
    node: &'t TrieNode,
    letters: &[LetterCount],
    start: usize,
    query: &Query,
    visit: &mut F,
) where
    F: FnMut(&'t LetterProfile),
{
    for &index in node.word_indices() {
        let candidate = trie.profile(index);
        if matches_query(candidate, query) {
            visit(candidate);
        }
    }

    for (offset, lc) in letters[start..].iter().enumerate() {
        if let Some(child) = node.child(lc.letter) {
            walk(trie, child, letters, start + offset + 1, query, visit);
        }
    }
}

/// Count the indexed words that can be spelled from `query`
///
/// # Examples
/// ```
/// use letter_combinations::core::Query;
/// use letter_combinations::index::{LetterTrie, count_matches};
///
/// let trie = LetterTrie::build(["hen", "net", "ten", "the", "then", "he"]).unwrap();
/// let query = Query::from_letters("then").unwrap();
/// assert_eq!(count_matches(&trie, &query), 6);
/// ```
#[must_use]
pub fn count_matches(trie: &LetterTrie, query: &Query) -> usize {
    let mut count = 0;
    for_each_match(trie, query, |_| count += 1);
    count
}

/// Collect the indexed words that can be spelled from `query`
///
/// Order follows the trie walk, not the dictionary.
#[must_use]
pub fn collect_matches<'t>(trie: &'t LetterTrie, query: &Query) -> Vec<&'t LetterProfile> {
    let mut found = Vec::new();
    for_each_match(trie, query, |profile| found.push(profile));
    found
}

/// Count matches by testing every indexed profile directly
///
/// Ignores the trie structure entirely; used to cross-check search results.
#[must_use]
pub fn count_matches_brute_force(trie: &LetterTrie, query: &Query) -> usize {
    trie.profiles()
        .par_iter()
        .filter(|profile| matches_query(profile, query))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET_LEN;
    use crate::wordlists::SAMPLE;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn scenario_trie() -> LetterTrie {
        LetterTrie::build(["hen", "net", "ten", "the", "then", "he"]).unwrap()
    }

    fn sorted_words(profiles: &[&LetterProfile]) -> Vec<String> {
        let mut words: Vec<String> = profiles.iter().map(|p| p.word().to_string()).collect();
        words.sort();
        words
    }

    fn random_query(rng: &mut StdRng) -> Query {
        let mut histogram = [0u8; ALPHABET_LEN];
        for _ in 0..rng.random_range(1..=9) {
            // Bias toward letters the sample dictionary actually uses
            let letter = b"aehlnorst"[rng.random_range(0..9)];
            histogram[usize::from(letter - b'a')] += 1;
        }
        let profile = LetterProfile::from_histogram(&histogram);
        let letters = profile.distinct_letters();

        if rng.random_bool(0.5) {
            let center = letters[rng.random_range(0..letters.len())];
            Query::with_center(profile, center)
        } else {
            Query::new(profile)
        }
    }

    #[test]
    fn then_spells_six_words() {
        let trie = scenario_trie();
        let query = Query::from_letters("then").unwrap();

        let found = collect_matches(&trie, &query);
        assert_eq!(
            sorted_words(&found),
            vec!["he", "hen", "net", "ten", "the", "then"]
        );
        assert_eq!(count_matches(&trie, &query), 6);
    }

    #[test]
    fn search_skips_words_needing_more_letters() {
        let trie = LetterTrie::build(["teeth", "tee", "the"]).unwrap();
        let query = Query::from_letters("then").unwrap();

        let found = collect_matches(&trie, &query);
        assert_eq!(sorted_words(&found), vec!["the"]);
    }

    #[test]
    fn search_reaches_non_prefix_subsets() {
        // "net" lives under e -> n -> t, which is not a prefix of e -> h -> n -> t
        let trie = LetterTrie::build(["net", "nth", "t"]).unwrap();
        let query = Query::from_letters("then").unwrap();
        assert_eq!(count_matches(&trie, &query), 3);
    }

    #[test]
    fn empty_query_tests_only_root() {
        let trie = scenario_trie();
        let query = Query::new(LetterProfile::from_histogram(&[0; ALPHABET_LEN]));
        assert_eq!(count_matches(&trie, &query), 0);
    }

    #[test]
    fn center_letter_filters_search() {
        let trie = scenario_trie();
        let profile = LetterProfile::new("then").unwrap();

        let with_t = Query::with_center(profile.clone(), b't');
        let found = collect_matches(&trie, &with_t);
        assert_eq!(sorted_words(&found), vec!["net", "ten", "the", "then"]);

        let with_h = Query::with_center(profile, b'h');
        assert_eq!(count_matches(&trie, &with_h), 4);
    }

    #[test]
    fn duplicate_dictionary_words_counted_separately() {
        let trie = LetterTrie::build(["ten", "ten"]).unwrap();
        let query = Query::from_letters("net").unwrap();
        assert_eq!(count_matches(&trie, &query), 2);
    }

    #[test]
    fn search_matches_brute_force_on_sample() {
        let trie = LetterTrie::build(SAMPLE.iter().copied()).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let query = random_query(&mut rng);
            assert_eq!(
                count_matches(&trie, &query),
                count_matches_brute_force(&trie, &query),
                "trie search disagrees with brute force for {query:?}"
            );
        }
    }

    #[test]
    fn every_sample_word_matches_brute_force() {
        let trie = LetterTrie::build(SAMPLE.iter().copied()).unwrap();

        for profile in trie.profiles() {
            let query = Query::new(profile.clone());
            let count = count_matches(&trie, &query);
            assert_eq!(count, count_matches_brute_force(&trie, &query));
            // A word always spells itself
            assert!(count >= 1, "'{profile}' did not match itself");
        }
    }

    #[test]
    fn rebuilt_index_gives_same_counts() {
        let first = LetterTrie::build(SAMPLE.iter().copied()).unwrap();
        let second = LetterTrie::build(SAMPLE.iter().copied()).unwrap();

        for letters in ["then", "slater", "loathed", "aeehllo"] {
            let query = Query::from_letters(letters).unwrap();
            assert_eq!(count_matches(&first, &query), count_matches(&second, &query));
        }
    }
}
