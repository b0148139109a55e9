//! Round judgement
//!
//! The pure validation and scoring pipeline for one word attempt. Timing
//! and console I/O live in the session; this module never blocks.

use crate::core::{ScoreTable, count_letters};
use crate::dictionary::Dictionary;
use std::fmt;

/// Why a round attempt scored zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    NoLetters,
    LengthMismatch { required: usize, actual: usize },
    NotInDictionary(String),
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLetters => write!(f, "You did not enter any letters!"),
            Self::LengthMismatch { required, actual } => {
                write!(
                    f,
                    "You did not enter a word with {required} letters (got {actual}), you get 0 points!"
                )
            }
            Self::NotInDictionary(word) => {
                write!(f, "'{word}' is not a valid word from the dictionary")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// Outcome of one round after judgement and timing
///
/// Folded into the session totals and then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundResult {
    pub score: u32,
    pub elapsed: f64,
    pub valid: bool,
}

/// Validate a word attempt and compute its score
///
/// Pipeline: count the letters, compare against the required count, check
/// dictionary membership, then sum the letter values. A length mismatch
/// loses regardless of whether the word is in the dictionary.
///
/// # Errors
/// Returns a `RoundError` describing the first check that failed; the
/// caller scores the round 0 and marks it invalid.
///
/// # Examples
/// ```
/// use scrabble_rounds::core::ScoreTable;
/// use scrabble_rounds::dictionary::loader::from_words;
/// use scrabble_rounds::game::judge_word;
///
/// let table = ScoreTable::new();
/// let dictionary = from_words(["cat"]);
///
/// assert_eq!(judge_word("cat", 3, &table, &dictionary).unwrap(), 5);
/// assert!(judge_word("cat", 4, &table, &dictionary).is_err());
/// ```
pub fn judge_word(
    word: &str,
    required: usize,
    table: &ScoreTable,
    dictionary: &Dictionary,
) -> Result<u32, RoundError> {
    let actual = count_letters(word).map_err(|_| RoundError::NoLetters)?;

    if actual != required {
        return Err(RoundError::LengthMismatch { required, actual });
    }

    if !dictionary.contains(word) {
        return Err(RoundError::NotInDictionary(word.to_string()));
    }

    Ok(table.word_score(word))
}
