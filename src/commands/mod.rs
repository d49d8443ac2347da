//! Command implementations

pub mod anagrams;
pub mod answers;
pub mod spell;
pub mod wheel;

pub use anagrams::{AnagramResult, find_most_imperfect_anagrams};
pub use answers::{AnswerRules, WheelAnswers, wheel_answers};
pub use spell::{SpellResult, words_within};
pub use wheel::{WheelResult, find_best_wheel, outer_combinations};
