//! Scrabble Rounds
//!
//! A timed word-scoring game: each round asks for a word with a randomly
//! required number of letters, validates it against a dictionary, and scores
//! it from fixed per-letter Scrabble values.
//!
//! # Quick Start
//!
//! ```rust
//! use scrabble_rounds::core::ScoreTable;
//! use scrabble_rounds::dictionary::loader::from_words;
//! use scrabble_rounds::game::judge_word;
//!
//! let table = ScoreTable::new();
//! assert_eq!(table.word_score("cabbage"), 14);
//!
//! let dictionary = from_words(["cat"]);
//! assert_eq!(judge_word("cat", 3, &table, &dictionary).unwrap(), 5);
//! ```

// Core domain types
pub mod core;

// Dictionary membership
pub mod dictionary;

// Round timer, judgement, and the session loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
