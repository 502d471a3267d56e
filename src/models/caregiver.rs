use serde::{Deserialize, Serialize};

/// A caregiver as persisted in the roster blob.
///
/// Field names are serialized in camelCase (`firstName`, `lastName`) so the
/// stored JSON stays readable by other clients of the same key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaregiverRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub rate: String,
}

impl CaregiverRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Dial address for the caregiver's mobile, e.g. `tel:555-0100`.
    pub fn tel_uri(&self) -> Option<String> {
        let mobile = self.mobile.trim();
        if mobile.is_empty() {
            None
        } else {
            Some(format!("tel:{}", mobile))
        }
    }
}

/// Input for a new caregiver. Values are trimmed before validation.
#[derive(Debug, Clone, Default)]
pub struct CaregiverDraft {
    pub first_name: String,
    pub last_name: String,
    pub mobile: String,
    pub rate: String,
}

impl CaregiverDraft {
    pub fn new(first_name: &str, last_name: &str, mobile: &str, rate: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            mobile: mobile.to_string(),
            rate: rate.to_string(),
        }
    }
}

/// Edited fields for an existing caregiver.
/// None or blank means "keep the current value".
#[derive(Debug, Clone, Default)]
pub struct CaregiverUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub mobile: Option<String>,
    pub rate: Option<String>,
}

impl CaregiverUpdate {
    pub fn apply_to(&self, record: &mut CaregiverRecord) {
        merge_field(&mut record.first_name, self.first_name.as_deref());
        merge_field(&mut record.last_name, self.last_name.as_deref());
        merge_field(&mut record.mobile, self.mobile.as_deref());
        merge_field(&mut record.rate, self.rate.as_deref());
    }
}

fn merge_field(current: &mut String, new_value: Option<&str>) {
    if let Some(v) = new_value.map(str::trim)
        && !v.is_empty()
    {
        *current = v.to_string();
    }
}
