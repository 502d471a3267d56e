/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Row totals: red for flagged rows, green when something is owed, grey for 0.
pub fn color_for_row(total: f64, flagged: bool) -> &'static str {
    if flagged {
        RED
    } else if total > 0.0 {
        GREEN
    } else {
        GREY
    }
}
