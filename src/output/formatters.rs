//! Formatting utilities for terminal output

/// Format a second count as `MM:SS`
#[must_use]
pub fn format_clock(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;

    format!("{mins:02}:{secs:02}")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a letter's point value as a bar against the 10-point maximum
#[must_use]
pub fn points_bar(value: u32, width: usize) -> String {
    let max_points = 10.0;
    create_progress_bar(f64::from(value), max_points, width)
}
