//! Scrabble Rounds - CLI
//!
//! Timed word-scoring game with per-letter Scrabble values and a
//! dictionary-backed validity check.

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrabble_rounds::{
    commands::{check_word, run_play, score_word},
    core::ScoreTable,
    dictionary::{Dictionary, loader::load_from_file},
    game::GameConfig,
    output::{print_check_result, print_score_breakdown},
};

#[derive(Parser)]
#[command(
    name = "scrabble_rounds",
    about = "Timed word-scoring game: enter a word of the required length before the countdown ends",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the timed word game (default)
    Play {
        /// Maximum number of rounds
        #[arg(short, long, default_value = "10")]
        rounds: u32,

        /// Per-round time limit in seconds
        #[arg(short = 't', long, default_value = "15")]
        time_limit: u64,

        /// Seed for the required-letter-count draw
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Score a word from the fixed letter values
    Score {
        /// Word to score
        word: String,
    },

    /// Check whether a word is in the dictionary
    Check {
        /// Word to look up
        word: String,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom word list from file
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        rounds: 10,
        time_limit: 15,
        seed: None,
    });

    match command {
        Commands::Play {
            rounds,
            time_limit,
            seed,
        } => {
            let config = GameConfig {
                rounds,
                time_limit_secs: time_limit,
                seed,
                ..GameConfig::default()
            };

            run_play(&dictionary, config).map_err(|e| anyhow::anyhow!(e))?;
            Ok(())
        }
        Commands::Score { word } => {
            let table = ScoreTable::new();
            let result = score_word(&word, &table).map_err(|e| anyhow::anyhow!(e))?;

            print_score_breakdown(&result);
            Ok(())
        }
        Commands::Check { word } => {
            let result = check_word(&word, &dictionary);

            print_check_result(&result);
            Ok(())
        }
    }
}
