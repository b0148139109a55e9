//! Core domain types for word scoring
//!
//! This module contains the fundamental scoring and validation logic with
//! zero external dependencies. All functions here are pure and deterministic.

mod input;
mod score;

pub use input::{InputError, count_letters};
pub use score::ScoreTable;
