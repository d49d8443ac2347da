//! Letter Combinations
//!
//! Word-puzzle searches over a dictionary indexed by letter content: the word with
//! the most imperfect anagrams, and the nine-letter word wheel that spells the most
//! words.
//!
//! # Quick Start
//!
//! ```rust
//! use letter_combinations::core::Query;
//! use letter_combinations::index::{LetterTrie, count_matches};
//!
//! let trie = LetterTrie::build(["he", "hen", "net", "ten", "the", "then"]).unwrap();
//! let query = Query::from_letters("then").unwrap();
//!
//! assert_eq!(count_matches(&trie, &query), 6);
//! ```

// Letter profiles and matching
pub mod core;

// Letter trie and search
pub mod index;

// Candidate generation
pub mod candidates;

// Parallel search orchestration
pub mod search;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
