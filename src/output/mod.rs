//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagram_group, print_anagram_result, print_spell_result, print_wheel_answers,
    print_wheel_result,
};
pub use formatters::render_wheel;
