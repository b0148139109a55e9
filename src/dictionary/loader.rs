//! Dictionary loading utilities
//!
//! Builds `Dictionary` instances from files or from in-memory word lists.

use super::Dictionary;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// Lines are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scrabble_rounds::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(from_words(content.lines()))
}

/// Build a dictionary from an iterator of words
///
/// Each entry is trimmed and lowercased; empty entries are skipped.
///
/// # Examples
/// ```
/// use scrabble_rounds::dictionary::loader::from_words;
///
/// let dictionary = from_words(["cat", "Apple", ""]);
/// assert_eq!(dictionary.len(), 2);
/// assert!(dictionary.contains("apple"));
/// ```
pub fn from_words<I, S>(words: I) -> Dictionary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let words: FxHashSet<String> = words
        .into_iter()
        .filter_map(|word| {
            let trimmed = word.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect();

    Dictionary { words }
}
