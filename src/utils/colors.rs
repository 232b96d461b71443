/// ANSI color helper utilities for terminal output.
use crate::models::EntryType;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Balance color:
/// \>=0 → green
/// \<0 → red
pub fn color_for_balance(value: i64) -> &'static str {
    if value >= 0 { GREEN } else { RED }
}

/// Diet rows in green, workouts in yellow (orange-ish on most terminals).
pub fn color_for_kind(kind: EntryType) -> &'static str {
    match kind {
        EntryType::Diet => GREEN,
        EntryType::Workout => YELLOW,
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
