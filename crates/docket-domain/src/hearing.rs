//! Hearing module - scheduled court dates owned by a case

use crate::case::CaseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a hearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HearingId(i64);

impl HearingId {
    /// Wrap a raw row id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for HearingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hearing lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HearingStatus {
    /// On the calendar
    Scheduled,
    /// Took place
    Completed,
    /// Moved to a later date
    Postponed,
    /// Will not take place
    Cancelled,
}

impl HearingStatus {
    /// Stable string form, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Postponed => "postponed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Decode the persisted string form
    pub fn from_db_value(value: &str) -> Option<Self> {
        match value {
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "postponed" => Some(Self::Postponed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// A scheduled hearing
///
/// Belongs to exactly one case. Date changes normally flow through the
/// reschedule operation, which also appends an audit line to `notes` and
/// forces the status back to `Scheduled`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hearing {
    /// Store-assigned identity
    pub id: HearingId,

    /// Owning case
    pub case_id: CaseId,

    /// When the hearing takes place
    pub scheduled_at: DateTime<Utc>,

    /// Courtroom or venue
    pub location: Option<String>,

    /// Presiding judge
    pub judge: Option<String>,

    /// Free-form notes; reschedules append audit lines here
    pub notes: String,

    /// Lifecycle state
    pub status: HearingStatus,

    /// Set once on first persistence
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Fields for scheduling a hearing; status always starts `Scheduled`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateHearing {
    /// Owning case
    pub case_id: CaseId,
    /// When the hearing takes place
    pub scheduled_at: DateTime<Utc>,
    /// Courtroom or venue
    pub location: Option<String>,
    /// Presiding judge
    pub judge: Option<String>,
    /// Initial notes
    pub notes: String,
}

/// Partial update of a hearing; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateHearing {
    /// New date (reschedule is the audited path for this)
    pub scheduled_at: Option<DateTime<Utc>>,
    /// New venue (clearable)
    pub location: Option<Option<String>>,
    /// New judge (clearable)
    pub judge: Option<Option<String>>,
    /// Replacement notes
    pub notes: Option<String>,
    /// New lifecycle state
    pub status: Option<HearingStatus>,
}

impl Hearing {
    /// Apply a partial update in place, leaving `None` fields untouched
    pub fn apply(&mut self, update: UpdateHearing) {
        if let Some(scheduled_at) = update.scheduled_at {
            self.scheduled_at = scheduled_at;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(judge) = update.judge {
            self.judge = judge;
        }
        if let Some(notes) = update.notes {
            self.notes = notes;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }

    /// Append a line to the notes, newline-separated, preserving prior notes
    pub fn append_note(&mut self, line: &str) {
        if self.notes.is_empty() {
            self.notes = line.to_string();
        } else {
            self.notes.push('\n');
            self.notes.push_str(line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_hearing() -> Hearing {
        let now = Utc::now();
        Hearing {
            id: HearingId::new(3),
            case_id: CaseId::new(1),
            scheduled_at: now,
            location: None,
            judge: None,
            notes: String::new(),
            status: HearingStatus::Scheduled,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_append_note_on_empty_notes() {
        let mut hearing = sample_hearing();
        hearing.append_note("first line");
        assert_eq!(hearing.notes, "first line");
    }

    #[test]
    fn test_append_note_preserves_prior_notes() {
        let mut hearing = sample_hearing();
        hearing.notes = "existing".to_string();
        hearing.append_note("appended");
        assert_eq!(hearing.notes, "existing\nappended");
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            HearingStatus::Scheduled,
            HearingStatus::Completed,
            HearingStatus::Postponed,
            HearingStatus::Cancelled,
        ] {
            assert_eq!(HearingStatus::from_db_value(status.as_str()), Some(status));
        }
    }
}
