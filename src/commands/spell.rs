//! Words spelled within a word

use crate::core::{ProfileError, Query};
use crate::index::{LetterTrie, collect_matches};

/// Indexed words that can be made from the letters of one word
#[derive(Debug)]
pub struct SpellResult<'t> {
    pub word: String,
    /// Longest first, then alphabetical
    pub words: Vec<&'t str>,
}

/// List the imperfect anagrams of `word`
///
/// `word` itself does not need to be in the dictionary.
///
/// # Errors
///
/// Returns `ProfileError` if `word` is empty or contains non-letters.
pub fn words_within<'t>(trie: &'t LetterTrie, word: &str) -> Result<SpellResult<'t>, ProfileError> {
    let query = Query::from_letters(word)?;

    let mut words: Vec<&str> = collect_matches(trie, &query)
        .into_iter()
        .map(|profile| profile.word())
        .collect();
    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    Ok(SpellResult {
        word: query.profile().word().to_string(),
        words,
    })
}
