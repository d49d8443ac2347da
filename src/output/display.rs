//! Display functions for command results

use super::formatters::{length_name, render_wheel, thousands, word_list};
use crate::commands::{AnagramResult, SpellResult, WheelAnswers, WheelResult};
use crate::index::AnagramGroup;
use colored::Colorize;
use std::time::Duration;

fn heading(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

fn timing(duration: Duration) -> String {
    format!("{:.2}s", duration.as_secs_f64())
}

/// Print the word with the most imperfect anagrams
pub fn print_anagram_result(result: &AnagramResult<'_>, list: bool) {
    heading("MOST IMPERFECT ANAGRAMS");

    let Some(word) = result.word else {
        println!("\n{}", "No words to search".red().bold());
        return;
    };

    println!(
        "\n   Winner:         {}",
        word.to_uppercase().bright_yellow().bold()
    );
    println!(
        "   Words spelled:  {}",
        result.count.to_string().green().bold()
    );
    println!("   Words searched: {}", result.words_searched);
    println!("   Time taken:     {}", timing(result.duration));

    if list {
        println!("\n{}", word_list(&result.matches));
    }
}

/// Print the best wheel found by an exhaustive search
pub fn print_wheel_result(result: &WheelResult) {
    heading("BEST LETTER WHEEL");

    let Some(wheel) = result.wheel else {
        println!("\n{}", "No wheels searched".red().bold());
        return;
    };

    println!();
    for line in render_wheel(&wheel) {
        println!("   {}", line.bright_yellow());
    }

    println!(
        "\n   Words spelled:  {}",
        result.count.to_string().green().bold()
    );
    if result.verified_count == result.count {
        println!("   Verified:       {}", "yes".green());
    } else {
        println!(
            "   Verified:       {}",
            format!("no, full scan found {}", result.verified_count).red()
        );
    }
    println!("   Wheels tried:   {}", thousands(result.wheels_searched));
    println!("   Time taken:     {}", timing(result.duration));
}

/// Print every answer to a wheel, grouped by length
pub fn print_wheel_answers(answers: &WheelAnswers<'_>) {
    println!();
    for line in render_wheel(&answers.wheel) {
        println!("{}", line.bright_yellow());
    }
    println!("Found {} words", answers.words.len().to_string().green().bold());

    let mut lengths: Vec<usize> = answers.words.iter().map(|w| w.len()).collect();
    lengths.dedup();

    for length in lengths {
        let words = answers.of_length(length);
        let title = format!("{} letter words:", length_name(length));
        println!("\n{} {}", title.bright_cyan().bold(), word_list(&words));
    }
}

/// Print the words spelled within a word
pub fn print_spell_result(result: &SpellResult<'_>) {
    println!(
        "\n{} spells {} words",
        result.word.to_uppercase().bright_yellow().bold(),
        result.words.len().to_string().green().bold()
    );
    if !result.words.is_empty() {
        println!("{}", word_list(&result.words));
    }
}

/// Print the largest set of exact anagrams
pub fn print_anagram_group(group: Option<&AnagramGroup<'_>>) {
    heading("LARGEST ANAGRAM GROUP");

    let Some(group) = group else {
        println!("\n{}", "No words to group".red().bold());
        return;
    };

    println!(
        "\n   Letters: {}",
        group.letters.to_uppercase().bright_yellow().bold()
    );
    println!("   Words:   {}", group.words.len().to_string().green().bold());
    println!("\n{}", word_list(&group.words));
}
