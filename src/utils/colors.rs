/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Color for a month total compared to the limit:
/// over → red, at or under → green, no limit → reset
pub fn color_for_total(total: f64, limit: Option<f64>) -> &'static str {
    match limit {
        Some(l) if total > l => RED,
        Some(_) => GREEN,
        None => RESET,
    }
}

/// Grey out non-positive amounts in listings.
pub fn colorize_amount(value: &str, amount: f64) -> String {
    if amount <= 0.0 {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
