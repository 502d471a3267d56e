use super::time::{RangeCheck, parse_time_with};
use crate::models::session_row::SessionRow;

/// Parse a decimal amount. The whole trimmed string must be a finite number.
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Hourly rate: a finite, non-negative decimal.
pub fn parse_rate(text: &str) -> Option<f64> {
    parse_amount(text).filter(|r| *r >= 0.0)
}

/// Incidental gas/tip amount, 0 when blank or unparseable. May be negative.
pub fn parse_gas_tip(text: &str) -> f64 {
    parse_amount(text).unwrap_or(0.0)
}

/// Hours worked on a row, or None when either time is unusable or the stop
/// is not strictly after the start.
pub fn row_hours(row: &SessionRow, check: RangeCheck) -> Option<f64> {
    let start = parse_time_with(&row.start, check).ok()?;
    let stop = parse_time_with(&row.stop, check).ok()?;

    if stop <= start {
        return None;
    }
    Some(stop - start)
}

pub fn row_total(row: &SessionRow) -> f64 {
    row_total_with(row, RangeCheck::Loose)
}

/// Amount due for one row: (stop - start) * rate, 0 for anything unusable.
pub fn row_total_with(row: &SessionRow, check: RangeCheck) -> f64 {
    let Some(rate) = parse_rate(&row.rate) else {
        return 0.0;
    };
    match row_hours(row, check) {
        Some(hours) => (hours * rate).max(0.0),
        None => 0.0,
    }
}

/// True when both times parse but the stop does not come after the start.
/// This is the only condition rendered as a row error.
pub fn row_is_out_of_order(row: &SessionRow, check: RangeCheck) -> bool {
    match (
        parse_time_with(&row.start, check),
        parse_time_with(&row.stop, check),
    ) {
        (Ok(start), Ok(stop)) => stop <= start,
        _ => false,
    }
}

pub fn grand_total(rows: &[SessionRow], gas_tip: &str) -> f64 {
    grand_total_with(rows, gas_tip, RangeCheck::Loose)
}

/// Sum of all row totals plus the gas/tip amount.
pub fn grand_total_with(rows: &[SessionRow], gas_tip: &str, check: RangeCheck) -> f64 {
    rows.iter()
        .map(|row| row_total_with(row, check))
        .sum::<f64>()
        + parse_gas_tip(gas_tip)
}
