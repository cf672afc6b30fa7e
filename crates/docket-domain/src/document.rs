//! Document module - archived text records owned by a case

use crate::case::CaseId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(i64);

impl DocumentId {
    /// Wrap a raw row id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Signed agreement
    Contract,
    /// Material supporting a claim
    Evidence,
    /// Filing addressed to a court
    Petition,
    /// Order issued by a court
    CourtOrder,
    /// Anything else
    Other,
}

impl DocumentType {
    /// Stable string form, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Evidence => "evidence",
            Self::Petition => "petition",
            Self::CourtOrder => "court_order",
            Self::Other => "other",
        }
    }

    /// Decode the persisted string form
    pub fn from_db_value(value: &str) -> Option<Self> {
        match value {
            "contract" => Some(Self::Contract),
            "evidence" => Some(Self::Evidence),
            "petition" => Some(Self::Petition),
            "court_order" => Some(Self::CourtOrder),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// An archived document
///
/// Content is plain text; no binary attachments are stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Store-assigned identity
    pub id: DocumentId,

    /// Owning case
    pub case_id: CaseId,

    /// Document title
    pub title: String,

    /// Kind of document
    pub doc_type: DocumentType,

    /// Full text content
    pub content: String,

    /// Set once on first persistence
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Fields for archiving a document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Owning case
    pub case_id: CaseId,
    /// Document title
    pub title: String,
    /// Kind of document
    pub doc_type: DocumentType,
    /// Full text content
    pub content: String,
}

/// Partial update of a document; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title
    pub title: Option<String>,
    /// New kind
    pub doc_type: Option<DocumentType>,
    /// Replacement content
    pub content: Option<String>,
}

impl Document {
    /// Apply a partial update in place, leaving `None` fields untouched
    pub fn apply(&mut self, update: UpdateDocument) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(doc_type) = update.doc_type {
            self.doc_type = doc_type;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }
}
