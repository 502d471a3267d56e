//! A single pay calculation: session rows plus the gas/tip amount.
//! Lives only for one interaction and is never persisted.

use crate::core::calculator::time::{RangeCheck, format_time, parse_display_time};
use crate::core::calculator::totals::{
    grand_total_with, parse_gas_tip, row_hours, row_is_out_of_order, row_total_with,
};
use crate::errors::{AppError, AppResult};
use crate::models::caregiver::CaregiverRecord;
use crate::models::session_row::{SessionRow, TimeField};
use chrono::NaiveTime;

/// Per-row result used for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    pub id: String,
    pub hours: Option<f64>,
    pub total: f64,
    pub out_of_order: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub rows: Vec<RowSummary>,
    pub gas_tip: f64,
    pub total: f64,
}

/// A time selection in progress for one row field.
/// Committing writes it into the row; cancelling simply drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTime {
    row_id: String,
    field: TimeField,
    value: NaiveTime,
}

impl PendingTime {
    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    pub fn field(&self) -> TimeField {
        self.field
    }

    pub fn value(&self) -> NaiveTime {
        self.value
    }

    /// The picker moved; keep the new value without committing it.
    pub fn change(&mut self, value: NaiveTime) {
        self.value = value;
    }

    pub fn cancel(self) {}
}

#[derive(Debug, Clone)]
pub struct PaySession {
    rows: Vec<SessionRow>,
    gas_tip: String,
    range: RangeCheck,
}

impl Default for PaySession {
    fn default() -> Self {
        Self::new(RangeCheck::Loose)
    }
}

impl PaySession {
    /// New session with the single default row.
    pub fn new(range: RangeCheck) -> Self {
        Self {
            rows: vec![SessionRow::new("1")],
            gas_tip: String::new(),
            range,
        }
    }

    pub fn rows(&self) -> &[SessionRow] {
        &self.rows
    }

    pub fn row(&self, id: &str) -> Option<&SessionRow> {
        self.rows.iter().find(|r| r.id == id)
    }

    pub fn gas_tip(&self) -> &str {
        &self.gas_tip
    }

    pub fn set_gas_tip(&mut self, value: &str) {
        self.gas_tip = value.to_string();
    }

    /// Append an empty row and return its id.
    pub fn add_row(&mut self) -> String {
        let id = (self.rows.len() + 1).to_string();
        self.rows.push(SessionRow::new(id.clone()));
        id
    }

    pub fn set_rate(&mut self, row_id: &str, rate: &str) -> AppResult<()> {
        self.row_mut(row_id)?.rate = rate.to_string();
        Ok(())
    }

    /// Store a time typed or resolved elsewhere, as-is.
    pub fn set_time(&mut self, row_id: &str, field: TimeField, value: &str) -> AppResult<()> {
        self.row_mut(row_id)?.set_time(field, value.to_string());
        Ok(())
    }

    /// Copy the caregiver's rate into the row. No link is kept afterwards.
    pub fn select_caregiver(&mut self, row_id: &str, caregiver: &CaregiverRecord) -> AppResult<()> {
        let row = self.row_mut(row_id)?;
        row.caregiver_id = Some(caregiver.id.clone());
        row.rate = caregiver.rate.clone();
        Ok(())
    }

    /// Start a time selection. The picker starts from the row's current value
    /// when it reads as "h:mm AM/PM", otherwise from `now`.
    pub fn open_picker(&self, row_id: &str, field: TimeField, now: NaiveTime) -> AppResult<PendingTime> {
        let row = self
            .row(row_id)
            .ok_or_else(|| AppError::UnknownRow(row_id.to_string()))?;

        let value = parse_display_time(row.time(field)).unwrap_or(now);
        Ok(PendingTime {
            row_id: row_id.to_string(),
            field,
            value,
        })
    }

    /// Write the pending value into its row as "h:mm AM/PM".
    pub fn commit_time(&mut self, pending: PendingTime) -> AppResult<()> {
        let formatted = format_time(pending.value);
        self.row_mut(&pending.row_id)?
            .set_time(pending.field, formatted);
        Ok(())
    }

    pub fn row_total(&self, row_id: &str) -> AppResult<f64> {
        let row = self
            .row(row_id)
            .ok_or_else(|| AppError::UnknownRow(row_id.to_string()))?;
        Ok(row_total_with(row, self.range))
    }

    pub fn total(&self) -> f64 {
        grand_total_with(&self.rows, &self.gas_tip, self.range)
    }

    pub fn summary(&self) -> SessionSummary {
        let rows = self
            .rows
            .iter()
            .map(|row| RowSummary {
                id: row.id.clone(),
                hours: row_hours(row, self.range),
                total: row_total_with(row, self.range),
                out_of_order: row_is_out_of_order(row, self.range),
            })
            .collect();

        SessionSummary {
            rows,
            gas_tip: parse_gas_tip(&self.gas_tip),
            total: self.total(),
        }
    }

    fn row_mut(&mut self, id: &str) -> AppResult<&mut SessionRow> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AppError::UnknownRow(id.to_string()))
    }
}
