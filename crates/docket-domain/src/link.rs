//! Case↔Client junction record

use crate::case::CaseId;
use crate::client::ClientId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a junction row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(i64);

impl LinkId {
    /// Wrap a raw row id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One instance of the Case↔Client many-to-many association
///
/// A first-class persisted row with its own identity, so link metadata can
/// grow later. At most one link exists per (case, client) pair; the table is
/// the single source of truth for the relation and the "clients of a case"
/// view is always computed from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClientLink {
    /// Store-assigned identity
    pub id: LinkId,

    /// Linked case
    pub case_id: CaseId,

    /// Linked client
    pub client_id: ClientId,

    /// When the association was made
    pub linked_at: DateTime<Utc>,
}
