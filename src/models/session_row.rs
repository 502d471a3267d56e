/// Which time of a row a picker is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Start,
    Stop,
}

/// One start/stop/rate entry of a pay calculation. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionRow {
    pub id: String,
    pub caregiver_id: Option<String>,
    pub start: String, // "h:mm AM/PM" or ""
    pub stop: String,  // "h:mm AM/PM" or ""
    pub rate: String,  // decimal text, may diverge from the caregiver's rate
}

impl SessionRow {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn time(&self, field: TimeField) -> &str {
        match field {
            TimeField::Start => &self.start,
            TimeField::Stop => &self.stop,
        }
    }

    pub fn set_time(&mut self, field: TimeField, value: String) {
        match field {
            TimeField::Start => self.start = value,
            TimeField::Stop => self.stop = value,
        }
    }
}
