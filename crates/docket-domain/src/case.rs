//! Case module - the legal matters the office tracks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a case
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaseId(i64);

impl CaseId {
    /// Wrap a raw row id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area of law a case falls under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseType {
    /// Civil litigation
    Civil,
    /// Criminal defense
    Criminal,
    /// Family law
    Family,
    /// Corporate matters
    Corporate,
    /// Anything else
    Other,
}

impl CaseType {
    /// Stable string form, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Civil => "civil",
            Self::Criminal => "criminal",
            Self::Family => "family",
            Self::Corporate => "corporate",
            Self::Other => "other",
        }
    }

    /// Decode the persisted string form
    pub fn from_db_value(value: &str) -> Option<Self> {
        match value {
            "civil" => Some(Self::Civil),
            "criminal" => Some(Self::Criminal),
            "family" => Some(Self::Family),
            "corporate" => Some(Self::Corporate),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Case lifecycle state
///
/// New cases always start in `New`; beyond that any state may be set from
/// any other (there is no transition graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Just opened, not yet worked
    New,
    /// Actively worked
    Active,
    /// Awaiting an external party
    Pending,
    /// Resolved
    Closed,
    /// Retained for the record only
    Archived,
}

impl CaseStatus {
    /// Stable string form, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Closed => "closed",
            Self::Archived => "archived",
        }
    }

    /// Decode the persisted string form
    pub fn from_db_value(value: &str) -> Option<Self> {
        match value {
            "new" => Some(Self::New),
            "active" => Some(Self::Active),
            "pending" => Some(Self::Pending),
            "closed" => Some(Self::Closed),
            "archived" => Some(Self::Archived),
            _ => None,
        }
    }
}

/// A legal matter
///
/// A case owns its hearings and documents (deleting the case removes them)
/// and shares clients through the junction table. The junction table, not
/// any field on this record, is the source of truth for that relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    /// Store-assigned identity
    pub id: CaseId,

    /// Docket number (natural key when present)
    pub case_number: Option<String>,

    /// Short human-readable title
    pub title: String,

    /// Area of law
    pub case_type: CaseType,

    /// Longer description of the matter
    pub description: Option<String>,

    /// Lifecycle state
    pub status: CaseStatus,

    /// Set once on first persistence
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Fields for opening a case
///
/// There is no status field here: a freshly created case is always `New`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCase {
    /// Docket number
    pub case_number: Option<String>,
    /// Short title
    pub title: String,
    /// Area of law
    pub case_type: CaseType,
    /// Longer description
    pub description: Option<String>,
}

/// Partial update of a case; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCase {
    /// New docket number (clearable)
    pub case_number: Option<Option<String>>,
    /// New title
    pub title: Option<String>,
    /// New area of law
    pub case_type: Option<CaseType>,
    /// New description (clearable)
    pub description: Option<Option<String>>,
    /// New lifecycle state
    pub status: Option<CaseStatus>,
}

impl Case {
    /// Apply a partial update in place, leaving `None` fields untouched
    pub fn apply(&mut self, update: UpdateCase) {
        if let Some(case_number) = update.case_number {
            self.case_number = case_number;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(case_type) = update.case_type {
            self.case_type = case_type;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}
