//! Command implementations

pub mod check;
pub mod play;
pub mod score;

pub use check::{CheckResult, check_word};
pub use play::run_play;
pub use score::{LetterScore, ScoreResult, score_word};
