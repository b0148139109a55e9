//! Terminal output formatting
//!
//! Display utilities for game rounds and CLI results.

pub mod display;
pub mod formatters;

pub use display::{print_check_result, print_score_breakdown, print_session_summary};
