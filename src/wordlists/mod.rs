//! Word lists for the letter trie
//!
//! Provides an embedded sample dictionary compiled into the binary, and loaders for
//! dictionaries on disk.

mod embedded;
pub mod loader;

pub use embedded::{SAMPLE, SAMPLE_COUNT};
