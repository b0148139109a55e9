//! Letter score table
//!
//! Fixed per-letter point values following the standard Scrabble distribution.

/// Point values for the 26 letters, indexed by letter offset (a=0..z=25)
///
/// Built once at startup and read-only afterwards. Lookups are
/// case-insensitive and non-alphabetic characters score 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreTable {
    values: [u32; 26],
}

impl ScoreTable {
    /// Build the table: every letter defaults to 1, with the standard
    /// Scrabble overrides applied on top.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rounds::core::ScoreTable;
    ///
    /// let table = ScoreTable::new();
    /// assert_eq!(table.value('q'), 10);
    /// assert_eq!(table.value('e'), 1);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut values = [1_u32; 26];

        for letter in [b'd', b'g'] {
            values[usize::from(letter - b'a')] = 2;
        }
        for letter in [b'b', b'c', b'm', b'p'] {
            values[usize::from(letter - b'a')] = 3;
        }
        for letter in [b'f', b'h', b'v', b'w', b'y'] {
            values[usize::from(letter - b'a')] = 4;
        }
        values[usize::from(b'k' - b'a')] = 5;
        for letter in [b'j', b'x'] {
            values[usize::from(letter - b'a')] = 8;
        }
        for letter in [b'q', b'z'] {
            values[usize::from(letter - b'a')] = 10;
        }

        Self { values }
    }

    /// Get the point value of a single character
    ///
    /// Uppercase and lowercase letters map to the same value. Any
    /// non-alphabetic character (digit, punctuation, whitespace) scores 0.
    #[inline]
    #[must_use]
    pub const fn value(&self, letter: char) -> u32 {
        if letter.is_ascii_alphabetic() {
            self.values[(letter.to_ascii_lowercase() as u8 - b'a') as usize]
        } else {
            0
        }
    }

    /// Sum the point values of every character in a word
    ///
    /// Non-alphabetic characters contribute 0, so punctuation and digits
    /// are effectively skipped.
    ///
    /// # Examples
    /// ```
    /// use scrabble_rounds::core::ScoreTable;
    ///
    /// let table = ScoreTable::new();
    /// assert_eq!(table.word_score("cabbage"), 14);
    /// ```
    #[must_use]
    pub fn word_score(&self, word: &str) -> u32 {
        word.chars().map(|c| self.value(c)).sum()
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_reference_distribution() {
        let table = ScoreTable::new();

        // a..z in order
        let expected = [
            1, 3, 3, 2, 1, 4, 2, 4, 1, 8, 5, 1, 3, 1, 1, 3, 10, 1, 1, 1, 1, 4, 4, 8, 4, 10,
        ];

        for (i, &want) in expected.iter().enumerate() {
            let letter = char::from(b'a' + i as u8);
            assert_eq!(table.value(letter), want, "wrong value for '{letter}'");
        }
    }

    #[test]
    fn value_is_case_insensitive_for_all_letters() {
        let table = ScoreTable::new();

        for offset in 0..26_u8 {
            let lower = char::from(b'a' + offset);
            let upper = char::from(b'A' + offset);
            assert_eq!(table.value(lower), table.value(upper));
        }
    }

    #[test]
    fn value_is_in_known_tiers_for_letters() {
        let table = ScoreTable::new();
        let tiers = [1, 2, 3, 4, 5, 8, 10];

        for offset in 0..26_u8 {
            let letter = char::from(b'a' + offset);
            assert!(tiers.contains(&table.value(letter)));
        }
    }

    #[test]
    fn non_alphabetic_scores_zero() {
        let table = ScoreTable::new();

        assert_eq!(table.value('3'), 0);
        assert_eq!(table.value(' '), 0);
        assert_eq!(table.value('!'), 0);
        assert_eq!(table.value('_'), 0);
        assert_eq!(table.value('é'), 0);
    }

    #[test]
    fn word_score_cabbage() {
        let table = ScoreTable::new();

        // c=3 a=1 b=3 b=3 a=1 g=2 e=1
        assert_eq!(table.word_score("cabbage"), 14);
    }

    #[test]
    fn word_score_ignores_non_letters() {
        let table = ScoreTable::new();

        assert_eq!(table.word_score("cat"), table.word_score("c-a-t!"));
        assert_eq!(table.word_score(""), 0);
        assert_eq!(table.word_score("123"), 0);
    }

    #[test]
    fn word_score_is_case_insensitive() {
        let table = ScoreTable::new();

        assert_eq!(table.word_score("CABBAGE"), 14);
        assert_eq!(table.word_score("CaBbAgE"), 14);
    }
}
