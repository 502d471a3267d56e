use chrono::NaiveTime;
use sitterpay::core::calculator::time::RangeCheck;
use sitterpay::core::session::PaySession;
use sitterpay::errors::AppError;
use sitterpay::models::caregiver::CaregiverRecord;
use sitterpay::models::session_row::TimeField;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn caregiver(rate: &str) -> CaregiverRecord {
    CaregiverRecord {
        id: "1700000000000".to_string(),
        first_name: "Mary".to_string(),
        last_name: "Poppins".to_string(),
        mobile: "555-0100".to_string(),
        rate: rate.to_string(),
    }
}

#[test]
fn test_new_session_has_one_empty_row() {
    let session = PaySession::default();
    assert_eq!(session.rows().len(), 1);

    let row = &session.rows()[0];
    assert_eq!(row.id, "1");
    assert!(row.start.is_empty() && row.stop.is_empty() && row.rate.is_empty());
    assert_eq!(session.total(), 0.0);
}

#[test]
fn test_rows_are_appended_with_sequential_ids() {
    let mut session = PaySession::default();
    assert_eq!(session.add_row(), "2");
    assert_eq!(session.add_row(), "3");

    let ids: Vec<&str> = session.rows().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[test]
fn test_selected_caregiver_rate_is_copied_not_linked() {
    let mut session = PaySession::default();
    let mut sitter = caregiver("15");

    session.select_caregiver("1", &sitter).unwrap();
    sitter.rate = "99".to_string();

    let row = session.row("1").unwrap();
    assert_eq!(row.rate, "15");
    assert_eq!(row.caregiver_id.as_deref(), Some("1700000000000"));

    // the row can diverge from the caregiver afterwards
    session.set_rate("1", "18").unwrap();
    assert_eq!(session.row("1").unwrap().rate, "18");
}

#[test]
fn test_session_totals_and_summary() {
    let mut session = PaySession::default();
    session.set_rate("1", "15").unwrap();
    session.set_time("1", TimeField::Start, "6:00 pm").unwrap();
    session.set_time("1", TimeField::Stop, "10:30 pm").unwrap();

    let second = session.add_row();
    session.set_rate(&second, "15").unwrap();
    session.set_time(&second, TimeField::Start, "11:00 pm").unwrap();
    session.set_time(&second, TimeField::Stop, "10:00 pm").unwrap();

    session.set_gas_tip("10");

    assert_eq!(session.row_total("1").unwrap(), 67.5);
    assert_eq!(session.row_total(&second).unwrap(), 0.0);
    assert_eq!(session.total(), 77.5);

    let summary = session.summary();
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].hours, Some(4.5));
    assert!(!summary.rows[0].out_of_order);
    assert_eq!(summary.rows[1].hours, None);
    assert!(summary.rows[1].out_of_order);
    assert_eq!(summary.gas_tip, 10.0);
    assert_eq!(summary.total, 77.5);
}

#[test]
fn test_strict_session_ignores_out_of_range_rows() {
    let mut loose = PaySession::new(RangeCheck::Loose);
    let mut strict = PaySession::new(RangeCheck::Strict);
    for s in [&mut loose, &mut strict] {
        s.set_rate("1", "10").unwrap();
        s.set_time("1", TimeField::Start, "11:00 pm").unwrap();
        s.set_time("1", TimeField::Stop, "25:00").unwrap();
    }

    assert_eq!(loose.total(), 20.0);
    assert_eq!(strict.total(), 0.0);
}

#[test]
fn test_unknown_row_is_an_error() {
    let mut session = PaySession::default();
    assert!(matches!(
        session.set_rate("7", "15"),
        Err(AppError::UnknownRow(id)) if id == "7"
    ));
    assert!(session.open_picker("7", TimeField::Start, t(9, 0)).is_err());
}

#[test]
fn test_picker_starts_from_now_for_empty_field() {
    let session = PaySession::default();
    let pending = session.open_picker("1", TimeField::Start, t(14, 7)).unwrap();

    assert_eq!(pending.row_id(), "1");
    assert_eq!(pending.field(), TimeField::Start);
    assert_eq!(pending.value(), t(14, 7));
}

#[test]
fn test_picker_prefills_from_current_value_and_commits_formatted() {
    let mut session = PaySession::default();
    session.set_time("1", TimeField::Stop, "10:30 pm").unwrap();

    let mut pending = session.open_picker("1", TimeField::Stop, t(8, 0)).unwrap();
    assert_eq!(pending.value(), t(22, 30));

    pending.change(t(23, 5));
    session.commit_time(pending).unwrap();

    assert_eq!(session.row("1").unwrap().stop, "11:05 PM");
    assert_eq!(session.row("1").unwrap().start, "");
}

#[test]
fn test_cancelled_picker_leaves_row_untouched() {
    let mut session = PaySession::default();
    session.set_time("1", TimeField::Start, "6:00 PM").unwrap();

    let mut pending = session.open_picker("1", TimeField::Start, t(8, 0)).unwrap();
    pending.change(t(7, 0));
    pending.cancel();

    assert_eq!(session.row("1").unwrap().start, "6:00 PM");
}
