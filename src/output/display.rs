//! Display functions for game and command results

use super::formatters::points_bar;
use crate::commands::{CheckResult, ScoreResult};
use crate::game::round::{RoundError, RoundResult};
use crate::game::session::SessionTotals;
use colored::Colorize;

/// Print the opening banner for an interactive session
pub fn print_game_banner() {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Scrabble Rounds - Timed Word Game              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Each round asks for a word with a required number of letters.");
    println!("Letters score their Scrabble values; answer before the countdown ends.\n");
}

/// Print one round's score and time
pub fn print_round_result(result: &RoundResult) {
    let score = format!("{} points", result.score);
    let score = if result.valid {
        score.green().bold()
    } else {
        score.red().bold()
    };

    println!("\nYou got: {score}, used: {:.2}s", result.elapsed);
}

/// Print why a round scored zero
pub fn print_round_error(error: &RoundError) {
    println!("{}", error.to_string().red());
}

/// Print the invalid-menu-choice notice
pub fn print_invalid_choice() {
    println!("{}", "Incorrect input! Please re-enter!".yellow());
}

/// Print the divider between rounds
pub fn print_round_divider() {
    println!("{}", "=".repeat(40).bright_black());
}

/// Print the end-of-session summary
pub fn print_session_summary(totals: &SessionTotals) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SESSION SUMMARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Rounds played:  {}", totals.rounds_played);
    println!(
        "   Total score:    {}",
        totals.total_score.to_string().bright_yellow().bold()
    );
    println!("   Total time:     {:.2}s", totals.total_time);
}

/// Print a word's per-letter score breakdown
pub fn print_score_breakdown(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring: {}",
        result.word.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!();

    for letter in &result.letters {
        println!(
            "   {}  [{}] {}",
            letter.letter,
            points_bar(letter.value, 20).green(),
            letter.value
        );
    }

    println!(
        "\n   Total: {} points",
        result.total.to_string().bright_yellow().bold()
    );
}

/// Print the outcome of a dictionary lookup
pub fn print_check_result(result: &CheckResult) {
    if result.found {
        println!(
            "{} '{}' is a valid dictionary word",
            "✓".green().bold(),
            result.normalized
        );
    } else {
        println!(
            "{} '{}' is not in the dictionary",
            "✗".red().bold(),
            result.normalized
        );
    }
}
