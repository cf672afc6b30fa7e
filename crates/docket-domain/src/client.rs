//! Client module - the people the office represents

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a client
///
/// Identities are numeric row ids assigned by the store on first insert and
/// immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(i64);

impl ClientId {
    /// Wrap a raw row id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A client of the office
///
/// Email is a natural key: unique across clients when present. A client
/// without an email is exempt from the uniqueness rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Store-assigned identity
    pub id: ClientId,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Contact email (natural key when present)
    pub email: Option<String>,

    /// Contact phone
    pub phone: Option<String>,

    /// Postal address
    pub address: Option<String>,

    /// Set once on first persistence
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation; never precedes `created_at`
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a client; the store assigns id and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClient {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Contact email
    pub email: Option<String>,
    /// Contact phone
    pub phone: Option<String>,
    /// Postal address
    pub address: Option<String>,
}

/// Partial update of a client
///
/// `None` leaves the field unchanged. For clearable fields,
/// `Some(Some(val))` = set, `Some(None)` = clear, `None` = no change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClient {
    /// New given name
    pub first_name: Option<String>,
    /// New family name
    pub last_name: Option<String>,
    /// New email (clearable)
    pub email: Option<Option<String>>,
    /// New phone (clearable)
    pub phone: Option<Option<String>>,
    /// New address (clearable)
    pub address: Option<Option<String>>,
}

impl Client {
    /// Apply a partial update in place, leaving `None` fields untouched
    pub fn apply(&mut self, update: UpdateClient) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
    }
}
