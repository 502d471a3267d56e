use sitterpay::core::calculator::time::{
    RangeCheck, TimeParseError, format_time, parse_display_time, parse_time, parse_time_with,
};
use sitterpay::core::calculator::totals::{
    grand_total, parse_gas_tip, parse_rate, row_is_out_of_order, row_total,
};
use sitterpay::models::session_row::SessionRow;
use chrono::NaiveTime;

fn row(start: &str, stop: &str, rate: &str) -> SessionRow {
    SessionRow {
        id: "1".to_string(),
        caregiver_id: None,
        start: start.to_string(),
        stop: stop.to_string(),
        rate: rate.to_string(),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_parse_time_twelve_hour_clock() {
    assert_eq!(parse_time("12:00 am"), Ok(0.0));
    assert_eq!(parse_time("12:00 pm"), Ok(12.0));
    assert_eq!(parse_time("1:30 pm"), Ok(13.5));
    assert_eq!(parse_time("6:00 PM"), Ok(18.0));
    assert_eq!(parse_time("9:15 AM"), Ok(9.25));
    assert_eq!(parse_time("  10:30pm "), Ok(22.5));
}

#[test]
fn test_parse_time_without_suffix_is_taken_as_is() {
    assert_eq!(parse_time("18:45"), Ok(18.75));
    assert_eq!(parse_time("0:00"), Ok(0.0));
}

#[test]
fn test_parse_time_rejects_non_numeric_input() {
    assert_eq!(parse_time(""), Err(TimeParseError::Empty));
    assert_eq!(parse_time("   "), Err(TimeParseError::Empty));
    assert!(matches!(
        parse_time("abc"),
        Err(TimeParseError::MissingMinutes(_))
    ));
    assert!(matches!(
        parse_time("6 pm"),
        Err(TimeParseError::MissingMinutes(_))
    ));
    assert!(matches!(
        parse_time("xx:30 pm"),
        Err(TimeParseError::InvalidHour(_))
    ));
    assert!(matches!(
        parse_time("6:yy pm"),
        Err(TimeParseError::InvalidMinute(_))
    ));
    assert!(matches!(
        parse_time("6:"),
        Err(TimeParseError::InvalidMinute(_))
    ));
}

#[test]
fn test_parse_time_pm_only_adjusts_hours_below_twelve() {
    // 13 with pm is passed through unchanged
    assert_eq!(parse_time("13:00 pm"), Ok(13.0));
}

#[test]
fn test_parse_time_loose_range_accepts_out_of_range_values() {
    let v = parse_time("25:99 pm").expect("loose mode parses");
    assert!(approx(v, 25.0 + 99.0 / 60.0));
}

#[test]
fn test_parse_time_strict_range_rejects_out_of_range_values() {
    assert_eq!(
        parse_time_with("25:99 pm", RangeCheck::Strict),
        Err(TimeParseError::OutOfRange {
            hour: 25,
            minute: 99
        })
    );
    assert_eq!(
        parse_time_with("11:59 pm", RangeCheck::Strict),
        Ok(23.0 + 59.0 / 60.0)
    );
    assert_eq!(parse_time_with("12:00 am", RangeCheck::Strict), Ok(0.0));
}

#[test]
fn test_format_time_uses_unpadded_twelve_hour_clock() {
    let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    assert_eq!(format_time(t(0, 15)), "12:15 AM");
    assert_eq!(format_time(t(12, 0)), "12:00 PM");
    assert_eq!(format_time(t(18, 5)), "6:05 PM");
    assert_eq!(format_time(t(9, 30)), "9:30 AM");
}

#[test]
fn test_parse_display_time_reads_picker_values() {
    assert_eq!(
        parse_display_time("6:30 pm"),
        NaiveTime::from_hms_opt(18, 30, 0)
    );
    assert_eq!(
        parse_display_time("12:05AM"),
        NaiveTime::from_hms_opt(0, 5, 0)
    );
    assert_eq!(parse_display_time("18:30"), None);
    assert_eq!(parse_display_time(""), None);
}

#[test]
fn test_row_total_multiplies_hours_by_rate() {
    assert_eq!(row_total(&row("6:00 pm", "10:30 pm", "15")), 67.5);
    assert_eq!(row_total(&row("9:00 am", "12:00 pm", "20.50")), 61.5);
}

#[test]
fn test_row_total_is_zero_for_invalid_rate() {
    assert_eq!(row_total(&row("6:00 pm", "10:30 pm", "abc")), 0.0);
    assert_eq!(row_total(&row("6:00 pm", "10:30 pm", "")), 0.0);
    assert_eq!(row_total(&row("6:00 pm", "10:30 pm", "-15")), 0.0);
}

#[test]
fn test_row_total_is_zero_when_stop_not_after_start() {
    assert_eq!(row_total(&row("10:30 pm", "6:00 pm", "15")), 0.0);
    assert_eq!(row_total(&row("6:00 pm", "6:00 pm", "15")), 0.0);
    // overnight sessions are not supported
    assert_eq!(row_total(&row("11:00 pm", "1:00 am", "15")), 0.0);
}

#[test]
fn test_row_total_is_zero_for_unparseable_times() {
    assert_eq!(row_total(&row("", "10:30 pm", "15")), 0.0);
    assert_eq!(row_total(&row("6:00 pm", "later", "15")), 0.0);
}

#[test]
fn test_only_stop_before_start_is_flagged() {
    assert!(row_is_out_of_order(
        &row("10:00 pm", "6:00 pm", "15"),
        RangeCheck::Loose
    ));
    assert!(row_is_out_of_order(
        &row("6:00 pm", "6:00 pm", "abc"),
        RangeCheck::Loose
    ));
    assert!(!row_is_out_of_order(
        &row("6:00 pm", "", "15"),
        RangeCheck::Loose
    ));
    assert!(!row_is_out_of_order(
        &row("6:00 pm", "10:00 pm", "15"),
        RangeCheck::Loose
    ));
}

#[test]
fn test_grand_total_adds_gas_tip_once() {
    let rows = vec![
        row("6:00 pm", "10:30 pm", "15"),
        row("10:00 pm", "9:00 pm", "15"),
    ];
    assert_eq!(grand_total(&rows, "10"), 77.5);
    assert_eq!(grand_total(&rows, ""), 67.5);
    assert_eq!(grand_total(&rows, "tip"), 67.5);
}

#[test]
fn test_negative_gas_tip_reduces_the_total() {
    let rows = vec![row("6:00 pm", "8:00 pm", "10")];
    assert_eq!(grand_total(&rows, "-5"), 15.0);
}

#[test]
fn test_amount_parsers() {
    assert_eq!(parse_rate(" 17.25 "), Some(17.25));
    assert_eq!(parse_rate("0"), Some(0.0));
    assert_eq!(parse_rate("-1"), None);
    assert_eq!(parse_rate("15abc"), None);
    assert_eq!(parse_rate("inf"), None);
    assert_eq!(parse_gas_tip("2.5"), 2.5);
    assert_eq!(parse_gas_tip(""), 0.0);
}

#[test]
fn test_parse_time_rejects_extra_colon_parts() {
    assert_eq!(
        parse_time("1:2:3 pm"),
        Err(TimeParseError::InvalidMinute("2:3".to_string()))
    );
}
