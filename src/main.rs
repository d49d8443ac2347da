//! Letter Combinations - CLI
//!
//! Word-puzzle searches: imperfect anagrams, word wheels and the words hidden
//! inside a word.

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use letter_combinations::{
    candidates::Wheel,
    commands::{
        AnswerRules, find_best_wheel, find_most_imperfect_anagrams, outer_combinations,
        wheel_answers, words_within,
    },
    index::{LetterTrie, largest_anagram_group},
    output::{
        print_anagram_group, print_anagram_result, print_spell_result, print_wheel_answers,
        print_wheel_result,
    },
    search::{SearchConfig, Silent, progress_bar},
    wordlists::{
        SAMPLE,
        loader::{LoadOptions, load_from_file, profiles_from_slice},
    },
};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "letter_combinations",
    about = "Find the words hiding in sets of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'sample' (default, embedded) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "sample")]
    dictionary: String,

    /// Ignore dictionary words shorter than this
    #[arg(long, global = true, default_value_t = 1)]
    shortest: usize,

    /// Ignore dictionary words longer than this
    #[arg(long, global = true)]
    longest: Option<usize>,

    /// Worker threads for searches (default: available cores)
    #[arg(short = 'j', long, global = true)]
    workers: Option<usize>,

    /// Candidates buffered between the generator and the workers (default: workers)
    #[arg(long, global = true)]
    queue_depth: Option<usize>,

    /// Increase log detail (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence logs and progress bars
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the word whose letters spell the most dictionary words
    Anagrams {
        /// Print every word the winner spells
        #[arg(short, long)]
        list: bool,
    },

    /// Find the 9-letter wheel that spells the most words using its center letter
    Wheel {
        /// Only use the first N letters of the alphabet
        #[arg(short, long, default_value_t = 26)]
        alphabet: usize,
    },

    /// List the answers to a wheel
    Answers {
        /// Nine letters, the first one is the center
        letters: String,

        /// Shortest answer to list
        #[arg(short, long, default_value_t = 1)]
        min_length: usize,

        /// Reject answers that repeat a letter
        #[arg(long)]
        distinct: bool,
    },

    /// List the words that can be spelled from the letters of a word
    Spell {
        /// Word (or any letters) to search within
        word: String,
    },

    /// Find the largest group of exact anagrams
    Groups,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    let trie = load_trie(&cli)?;
    let config = search_config(&cli);

    match cli.command {
        Commands::Anagrams { list } => run_anagrams_command(&trie, &config, cli.quiet, list),
        Commands::Wheel { alphabet } => {
            run_wheel_command(&trie, &config.with_alphabet_size(alphabet), cli.quiet)
        }
        Commands::Answers {
            letters,
            min_length,
            distinct,
        } => run_answers_command(&trie, &letters, min_length, distinct),
        Commands::Spell { word } => run_spell_command(&trie, &word),
        Commands::Groups => {
            print_anagram_group(largest_anagram_group(&trie).as_ref());
            Ok(())
        }
    }
}

/// Build the letter trie from the `-d` dictionary
fn load_trie(cli: &Cli) -> Result<LetterTrie> {
    let options = LoadOptions::with_lengths(cli.shortest, cli.longest.unwrap_or(usize::MAX));

    let profiles = match cli.dictionary.as_str() {
        "sample" => profiles_from_slice(SAMPLE, options),
        path => load_from_file(path, options)
            .with_context(|| format!("Failed to read dictionary '{path}'"))?,
    };

    info!(words = profiles.len(), dictionary = %cli.dictionary, "Dictionary loaded");
    Ok(LetterTrie::from_profiles(profiles))
}

fn search_config(cli: &Cli) -> SearchConfig {
    let mut config = SearchConfig::new();
    if let Some(workers) = cli.workers {
        config = config.with_workers(workers).with_queue_depth(workers);
    }
    if let Some(depth) = cli.queue_depth {
        config = config.with_queue_depth(depth);
    }
    config
}

fn run_anagrams_command(
    trie: &LetterTrie,
    config: &SearchConfig,
    quiet: bool,
    list: bool,
) -> Result<()> {
    let search = if quiet {
        find_most_imperfect_anagrams(trie, config, &Silent)
    } else {
        let pb = progress_bar(trie.len() as u64, "words");
        find_most_imperfect_anagrams(trie, config, &pb)
    };
    let result = search.context("Imperfect anagram search failed")?;

    print_anagram_result(&result, list);
    Ok(())
}

fn run_wheel_command(trie: &LetterTrie, config: &SearchConfig, quiet: bool) -> Result<()> {
    config.validate().context("Invalid wheel search settings")?;

    let search = if quiet {
        find_best_wheel(trie, config, &Silent)
    } else {
        let pb = progress_bar(outer_combinations(config), "combinations");
        find_best_wheel(trie, config, &pb)
    };
    let result = search.context("Wheel search failed")?;

    print_wheel_result(&result);
    Ok(())
}

fn run_answers_command(
    trie: &LetterTrie,
    letters: &str,
    min_length: usize,
    distinct: bool,
) -> Result<()> {
    let wheel = Wheel::parse(letters).with_context(|| format!("Invalid wheel '{letters}'"))?;
    let rules = AnswerRules {
        min_length,
        distinct_letters: distinct,
    };

    print_wheel_answers(&wheel_answers(trie, &wheel, rules));
    Ok(())
}

fn run_spell_command(trie: &LetterTrie, word: &str) -> Result<()> {
    let result = words_within(trie, word).with_context(|| format!("Invalid word '{word}'"))?;
    print_spell_result(&result);
    Ok(())
}
