//! Answers for a given wheel
//!
//! Lists every indexed word a player could make from a wheel: each word must use
//! the center letter and may not use any letter more often than the wheel has it.

use crate::candidates::{WHEEL_SIZE, Wheel};
use crate::index::{LetterTrie, for_each_match};

/// Extra rules for a wheel puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerRules {
    /// Shortest word counted as an answer
    pub min_length: usize,
    /// Reject words that repeat any letter, as in "letter in the middle" puzzles
    pub distinct_letters: bool,
}

impl Default for AnswerRules {
    fn default() -> Self {
        Self {
            min_length: 1,
            distinct_letters: false,
        }
    }
}

/// All answers for one wheel
#[derive(Debug)]
pub struct WheelAnswers<'t> {
    pub wheel: Wheel,
    /// Longest first, then alphabetical
    pub words: Vec<&'t str>,
}

impl<'t> WheelAnswers<'t> {
    /// Answers with exactly `length` letters
    #[must_use]
    pub fn of_length(&self, length: usize) -> Vec<&'t str> {
        self.words
            .iter()
            .copied()
            .filter(|word| word.len() == length)
            .collect()
    }

    /// Answers that use every letter on the wheel
    #[must_use]
    pub fn full_wheel_words(&self) -> Vec<&'t str> {
        self.of_length(WHEEL_SIZE)
    }
}

/// Find every indexed word that solves `wheel`
///
/// # Examples
/// ```
/// use letter_combinations::candidates::Wheel;
/// use letter_combinations::commands::{AnswerRules, wheel_answers};
/// use letter_combinations::index::LetterTrie;
///
/// let trie = LetterTrie::build(["hello", "halo", "heal", "hole"]).unwrap();
/// let wheel = Wheel::parse("eaaahlloe").unwrap();
///
/// let answers = wheel_answers(&trie, &wheel, AnswerRules::default());
/// assert_eq!(answers.words, vec!["hello", "heal", "hole"]);
/// ```
#[must_use]
pub fn wheel_answers<'t>(trie: &'t LetterTrie, wheel: &Wheel, rules: AnswerRules) -> WheelAnswers<'t> {
    let mut words = Vec::new();
    for_each_match(trie, &wheel.query(), |profile| {
        if profile.len() >= rules.min_length
            && (!rules.distinct_letters || profile.has_distinct_letters())
        {
            words.push(profile.word());
        }
    });

    words.sort_unstable_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    WheelAnswers {
        wheel: *wheel,
        words,
    }
}
