//! Word scoring command
//!
//! Scores a word outside of any round and reports the per-letter breakdown.

use crate::core::{ScoreTable, count_letters};

/// Result of scoring a word
pub struct ScoreResult {
    pub word: String,
    pub letters: Vec<LetterScore>,
    pub total: u32,
}

/// One letter's contribution to the total
pub struct LetterScore {
    pub letter: char,
    pub value: u32,
}

/// Score a word from the fixed letter values
///
/// Non-alphabetic characters are skipped in the breakdown and contribute
/// nothing to the total.
///
/// # Errors
///
/// Returns an error if the input contains no letters at all.
pub fn score_word(word: &str, table: &ScoreTable) -> Result<ScoreResult, String> {
    count_letters(word).map_err(|e| e.to_string())?;

    let letters: Vec<LetterScore> = word
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|letter| LetterScore {
            letter: letter.to_ascii_lowercase(),
            value: table.value(letter),
        })
        .collect();

    let total = letters.iter().map(|letter| letter.value).sum();

    Ok(ScoreResult {
        word: word.to_string(),
        letters,
        total,
    })
}
