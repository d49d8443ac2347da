//! Core domain types for letter combinations
//!
//! This module contains the letter profile, the query key and the subset matcher.
//! All types here are pure and independent of the trie and the search machinery.

mod matcher;
mod profile;
mod query;

pub use matcher::{is_subset_profile, matches_query};
pub use profile::{ALPHABET_LEN, LetterCount, LetterProfile, ProfileError};
pub use query::Query;
