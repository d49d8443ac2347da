//! Dictionary index
//!
//! The letter trie and the recursive subset search that runs over it.

mod groups;
mod search;
mod trie;

pub use groups::{AnagramGroup, largest_anagram_group};
pub use search::{collect_matches, count_matches, count_matches_brute_force, for_each_match};
pub use trie::{LetterTrie, TrieNode};
