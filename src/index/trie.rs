//! Letter trie keyed by sorted distinct letters
//!
//! Words are partitioned by their distinct-letter path: "lee", "eel" and "leel" all
//! land on the node reached by `e -> l`.

use crate::core::{LetterProfile, ProfileError};
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{debug, info};

/// A node of the letter trie
#[derive(Debug, Default)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    words: Vec<usize>,
}

impl TrieNode {
    /// Child reached by `letter`, if any word continues along it
    #[inline]
    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Indices (into `LetterTrie::profiles`) of the words stored at this node
    #[inline]
    #[must_use]
    pub fn word_indices(&self) -> &[usize] {
        &self.words
    }

    /// Number of outgoing edges
    #[inline]
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_or_insert(&mut self, letter: u8, created: &mut usize) -> &mut TrieNode {
        self.children.entry(letter).or_insert_with(|| {
            *created += 1;
            TrieNode::default()
        })
    }
}

/// Immutable index of a word list
///
/// Built once, then only read. Shared by reference between search workers.
#[derive(Debug, Default)]
pub struct LetterTrie {
    root: TrieNode,
    profiles: Vec<LetterProfile>,
    node_count: usize,
}

impl LetterTrie {
    /// Build the index from raw words
    ///
    /// # Errors
    /// Returns the first `ProfileError` hit; callers that want to skip bad lines
    /// should filter through `wordlists::loader` first.
    ///
    /// # Examples
    /// ```
    /// use letter_combinations::index::LetterTrie;
    ///
    /// let trie = LetterTrie::build(["lee", "eel", "then"]).unwrap();
    /// assert_eq!(trie.len(), 3);
    /// assert_eq!(trie.words_at(b"el").len(), 2);
    /// ```
    pub fn build<I, S>(words: I) -> Result<Self, ProfileError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let profiles = words
            .into_iter()
            .map(LetterProfile::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_profiles(profiles))
    }

    /// Build the index from already profiled words
    #[must_use]
    pub fn from_profiles(profiles: Vec<LetterProfile>) -> Self {
        let start = Instant::now();
        let mut root = TrieNode::default();
        let mut node_count = 0;

        for (index, profile) in profiles.iter().enumerate() {
            let mut head = &mut root;
            for lc in profile.counts() {
                head = head.child_or_insert(lc.letter, &mut node_count);
            }
            head.words.push(index);
        }

        info!(
            words = profiles.len(),
            nodes = node_count,
            elapsed_ms = start.elapsed().as_millis(),
            "Built letter trie"
        );

        Self {
            root,
            profiles,
            node_count,
        }
    }

    #[inline]
    #[must_use]
    pub const fn root(&self) -> &TrieNode {
        &self.root
    }

    /// All indexed profiles in insertion order
    #[inline]
    #[must_use]
    pub fn profiles(&self) -> &[LetterProfile] {
        &self.profiles
    }

    /// Look up a profile by the index stored in a node
    #[inline]
    #[must_use]
    pub fn profile(&self, index: usize) -> &LetterProfile {
        &self.profiles[index]
    }

    /// Number of indexed words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Number of nodes below the root
    #[inline]
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Node reached by following `path` from the root
    #[must_use]
    pub fn node_at(&self, path: &[u8]) -> Option<&TrieNode> {
        path.iter()
            .try_fold(&self.root, |node, &letter| node.child(letter))
    }

    /// Words stored exactly at `path`
    ///
    /// Returns an empty list if the path does not exist.
    #[must_use]
    pub fn words_at(&self, path: &[u8]) -> Vec<&str> {
        let words: Vec<&str> = self.node_at(path).map_or_else(Vec::new, |node| {
            node.words
                .iter()
                .map(|&i| self.profiles[i].word())
                .collect()
        });
        debug!(path = %String::from_utf8_lossy(path), found = words.len(), "Trie lookup");
        words
    }
}
