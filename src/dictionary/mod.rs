//! Dictionary membership
//!
//! An immutable set of lowercase words with case-insensitive lookup. The
//! default word list is compiled into the binary; custom lists can be
//! loaded from a file.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use rustc_hash::FxHashSet;

/// An immutable set of lowercase words
///
/// Membership lookup is case-insensitive: the probe is lowercased before
/// the set is consulted. The set itself is never mutated after loading.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build the dictionary from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        loader::from_words(WORDS)
    }

    /// Case-insensitive membership test
    ///
    /// No partial matches, no stemming.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rounds::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded();
    /// assert!(dictionary.contains("Apple"));
    /// assert!(!dictionary.contains("zzzzz"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_lowercase().as_str())
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
