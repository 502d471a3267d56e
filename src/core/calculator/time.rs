//! 12-hour clock handling: parse "h:mm AM/PM" strings into fractional hours,
//! and format wall-clock times back into the display form.

use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Pattern used to pre-fill the time picker from a row value.
static DISPLAY_TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+):(\d+)\s*(AM|PM)").expect("static regex is valid")
});

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("empty time")]
    Empty,

    #[error("missing ':' between hour and minute in '{0}'")]
    MissingMinutes(String),

    #[error("hour '{0}' is not a number")]
    InvalidHour(String),

    #[error("minute '{0}' is not a number")]
    InvalidMinute(String),

    #[error("{hour}:{minute:02} is outside the 24-hour day")]
    OutOfRange { hour: i64, minute: i64 },
}

/// How hour/minute values are checked after AM/PM normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RangeCheck {
    /// No bounds: "25:99 pm" yields 26.65.
    #[default]
    Loose,
    /// Hour must be 0..=23 and minute 0..=59.
    Strict,
}

/// Parse a display time into a fractional hour (hour + minute / 60).
///
/// `am`/`pm` are recognised case-insensitively anywhere in the string and
/// removed before splitting on `:`. PM adds 12 to hours below 12, AM maps
/// hour 12 to 0. Nothing else is adjusted, so "13:00 pm" stays 13.
pub fn parse_time(text: &str) -> Result<f64, TimeParseError> {
    parse_time_with(text, RangeCheck::Loose)
}

pub fn parse_time_with(text: &str, check: RangeCheck) -> Result<f64, TimeParseError> {
    let t = text.trim().to_lowercase();
    if t.is_empty() {
        return Err(TimeParseError::Empty);
    }

    let is_pm = t.contains("pm");
    let is_am = t.contains("am");
    let stripped = t.replace("am", "").replace("pm", "");

    let (h, m) = stripped
        .trim()
        .split_once(':')
        .ok_or_else(|| TimeParseError::MissingMinutes(text.trim().to_string()))?;

    let mut hour: i64 = h
        .trim()
        .parse()
        .map_err(|_| TimeParseError::InvalidHour(h.trim().to_string()))?;
    let minute: i64 = m
        .trim()
        .parse()
        .map_err(|_| TimeParseError::InvalidMinute(m.trim().to_string()))?;

    if is_pm && hour < 12 {
        hour += 12;
    }
    if is_am && hour == 12 {
        hour = 0;
    }

    if check == RangeCheck::Strict && !((0..24).contains(&hour) && (0..60).contains(&minute)) {
        return Err(TimeParseError::OutOfRange { hour, minute });
    }

    Ok(hour as f64 + minute as f64 / 60.0)
}

/// Format a wall-clock time as "h:mm AM/PM" (unpadded hour, 1..=12).
pub fn format_time(time: NaiveTime) -> String {
    let (is_pm, hour) = time.hour12();
    let ampm = if is_pm { "PM" } else { "AM" };
    format!("{}:{:02} {}", hour, time.minute(), ampm)
}

/// Recover a wall-clock time from a display value such as "6:30 pm".
/// Returns None when the value does not look like a 12-hour time.
pub fn parse_display_time(value: &str) -> Option<NaiveTime> {
    let caps = DISPLAY_TIME.captures(value)?;

    let mut hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;
    let ampm = caps[3].to_uppercase();

    if ampm == "PM" && hour < 12 {
        hour += 12;
    }
    if ampm == "AM" && hour == 12 {
        hour = 0;
    }

    NaiveTime::from_hms_opt(hour, minute, 0)
}
