//! Formatting utilities for terminal output

use crate::candidates::Wheel;

/// Draw a wheel as a 3x3 box with the center letter in the middle
///
/// The eight outer letters run left to right, top to bottom, skipping the middle.
#[must_use]
pub fn render_wheel(wheel: &Wheel) -> Vec<String> {
    let o = wheel.outer().map(|b| char::from(b).to_ascii_uppercase());
    let c = char::from(wheel.center()).to_ascii_uppercase();

    vec![
        "┏━━━━━━━━━━━┓".to_string(),
        format!("┃ {}   {}   {} ┃", o[0], o[1], o[2]),
        "┃   ┏━━━┓   ┃".to_string(),
        format!("┃ {} ┃ {c} ┃ {} ┃", o[3], o[4]),
        "┃   ┗━━━┛   ┃".to_string(),
        format!("┃ {}   {}   {} ┃", o[5], o[6], o[7]),
        "┗━━━━━━━━━━━┛".to_string(),
    ]
}

/// Join words into a comma separated list
#[must_use]
pub fn word_list(words: &[&str]) -> String {
    words.join(", ")
}

/// Human name for a word length in headings ("Nine letter words")
#[must_use]
pub fn length_name(length: usize) -> String {
    const NAMES: [&str; 10] = [
        "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
    ];
    NAMES
        .get(length)
        .map_or_else(|| length.to_string(), |name| (*name).to_string())
}

/// Format a large count with thousands separators
#[must_use]
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
