//! Perfect anagram groups
//!
//! Groups indexed words by their full letter multiset (not just the distinct-letter
//! path), so "tea", "eat" and "ate" share a group but "teat" does not.

use super::trie::LetterTrie;
use crate::core::LetterCount;
use rustc_hash::FxHashMap;

/// Words that are exact anagrams of one another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup<'t> {
    /// The shared letters, sorted
    pub letters: String,
    /// Words in dictionary order
    pub words: Vec<&'t str>,
}

/// Find the letter multiset spelled by the most indexed words
///
/// Ties go to the alphabetically smallest letters. Returns `None` for an empty index.
///
/// # Examples
/// ```
/// use letter_combinations::index::{LetterTrie, largest_anagram_group};
///
/// let trie = LetterTrie::build(["eat", "tea", "ate", "teat", "net"]).unwrap();
/// let group = largest_anagram_group(&trie).unwrap();
/// assert_eq!(group.letters, "aet");
/// assert_eq!(group.words, vec!["eat", "tea", "ate"]);
/// ```
#[must_use]
pub fn largest_anagram_group(trie: &LetterTrie) -> Option<AnagramGroup<'_>> {
    let mut groups: FxHashMap<&[LetterCount], Vec<usize>> = FxHashMap::default();
    for (index, profile) in trie.profiles().iter().enumerate() {
        groups.entry(profile.counts()).or_default().push(index);
    }

    groups
        .into_values()
        .map(|members| {
            let words: Vec<&str> = members.iter().map(|&i| trie.profile(i).word()).collect();
            let mut letters: Vec<u8> = words[0].bytes().collect();
            letters.sort_unstable();
            AnagramGroup {
                letters: String::from_utf8_lossy(&letters).into_owned(),
                words,
            }
        })
        .max_by(|a, b| {
            a.words
                .len()
                .cmp(&b.words.len())
                .then_with(|| b.letters.cmp(&a.letters))
        })
}
