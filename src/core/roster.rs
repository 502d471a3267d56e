//! The caregiver roster: an ordered list of records mirrored into a blob store.
//!
//! Every successful mutation is written through to the store before the call
//! returns. If the write fails the in-memory change is rolled back, so the
//! roster and the persisted blob never disagree.

use crate::errors::{AppError, AppResult};
use crate::models::caregiver::{CaregiverDraft, CaregiverRecord, CaregiverUpdate};
use crate::store::BlobStore;
use chrono::Local;
use std::collections::HashSet;

pub const DEFAULT_ROSTER_KEY: &str = "babysitter-calculator-babysitters";

/// Read the roster blob. Any read or parse failure is logged and treated as
/// "nothing saved yet".
pub fn load_records<S: BlobStore>(store: &S, key: &str) -> Vec<CaregiverRecord> {
    let data = match store.get(key) {
        Ok(Some(data)) => data,
        Ok(None) => return Vec::new(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read roster, starting empty");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<CaregiverRecord>>(&data) {
        Ok(records) => {
            let dups = duplicate_ids(&records);
            if !dups.is_empty() {
                tracing::warn!(key, ids = ?dups, "roster contains repeated ids, edits only reach the first");
            }
            records
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to parse roster, starting empty");
            Vec::new()
        }
    }
}

/// Ids that appear more than once, in first-seen order.
pub fn duplicate_ids(records: &[CaregiverRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dups: Vec<String> = Vec::new();
    for r in records {
        if !seen.insert(r.id.as_str()) && !dups.contains(&r.id) {
            dups.push(r.id.clone());
        }
    }
    dups
}

/// Serialize the full sequence and overwrite the blob.
pub fn save_records<S: BlobStore>(
    store: &mut S,
    key: &str,
    records: &[CaregiverRecord],
) -> AppResult<()> {
    let data = serde_json::to_string(records)?;
    store.set(key, &data)
}

/// A delete that has been requested but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    id: String,
    prompt: String,
}

impl DeleteRequest {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// "Are you sure you want to delete {first} {last}?"
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

pub struct Roster<S: BlobStore> {
    store: S,
    key: String,
    records: Vec<CaregiverRecord>,
}

impl<S: BlobStore> Roster<S> {
    /// Load the roster from `store` under `key` (fail-soft).
    pub fn load(store: S, key: &str) -> Self {
        let records = load_records(&store, key);
        Self {
            store,
            key: key.to_string(),
            records,
        }
    }

    pub fn records(&self) -> &[CaregiverRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&CaregiverRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Persist the current in-memory sequence.
    pub fn save(&mut self) -> AppResult<()> {
        save_records(&mut self.store, &self.key, &self.records)
    }

    /// Add a caregiver. First name, last name and rate are required; mobile
    /// may be blank. The new record goes to the end of the roster.
    pub fn add(&mut self, draft: CaregiverDraft) -> AppResult<CaregiverRecord> {
        let first_name = required(&draft.first_name, "firstName")?;
        let last_name = required(&draft.last_name, "lastName")?;
        let rate = required(&draft.rate, "rate")?;

        let record = CaregiverRecord {
            id: self.next_id(),
            first_name,
            last_name,
            mobile: draft.mobile.trim().to_string(),
            rate,
        };

        self.records.push(record.clone());
        if let Err(e) = self.save() {
            self.records.pop();
            return Err(e);
        }

        tracing::info!(id = %record.id, "caregiver added");
        Ok(record)
    }

    /// Apply non-blank fields of `update` to the record with `id`.
    /// Returns Ok(None) without touching storage when the id is unknown.
    pub fn edit(&mut self, id: &str, update: &CaregiverUpdate) -> AppResult<Option<CaregiverRecord>> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let previous = self.records[idx].clone();
        update.apply_to(&mut self.records[idx]);

        if let Err(e) = self.save() {
            self.records[idx] = previous;
            return Err(e);
        }

        tracing::info!(id, "caregiver updated");
        Ok(Some(self.records[idx].clone()))
    }

    /// First step of a delete: build the confirmation for an existing record.
    pub fn request_delete(&self, id: &str) -> Option<DeleteRequest> {
        self.get(id).map(|r| DeleteRequest {
            id: r.id.clone(),
            prompt: format!(
                "Are you sure you want to delete {} {}?",
                r.first_name, r.last_name
            ),
        })
    }

    /// Second step of a delete, once the user has confirmed.
    pub fn confirm_delete(&mut self, request: DeleteRequest) -> AppResult<Option<CaregiverRecord>> {
        self.remove(&request.id)
    }

    /// Remove the record with `id`. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: &str) -> AppResult<Option<CaregiverRecord>> {
        let Some(idx) = self.records.iter().position(|r| r.id == id) else {
            return Ok(None);
        };

        let removed = self.records.remove(idx);
        if let Err(e) = self.save() {
            self.records.insert(idx, removed);
            return Err(e);
        }

        tracing::info!(id, "caregiver removed");
        Ok(Some(removed))
    }

    /// Millisecond timestamp, bumped until it does not collide.
    fn next_id(&self) -> String {
        let mut candidate = Local::now().timestamp_millis();
        while self.records.iter().any(|r| r.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}

fn required(value: &str, field: &'static str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        Err(AppError::MissingField(field))
    } else {
        Ok(v.to_string())
    }
}
