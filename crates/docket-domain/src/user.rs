//! User module - office accounts with roles and one-way password hashes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw row id
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role an account holds within the office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Attorney
    Lawyer,
    /// Support staff
    Assistant,
    /// Read-only access
    Viewer,
}

impl Role {
    /// Stable string form, as persisted
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Lawyer => "lawyer",
            Self::Assistant => "assistant",
            Self::Viewer => "viewer",
        }
    }

    /// Decode the persisted string form
    pub fn from_db_value(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(Self::Admin),
            "lawyer" => Some(Self::Lawyer),
            "assistant" => Some(Self::Assistant),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }
}

/// An office account
///
/// Username and email are both natural keys. Only the one-way hash of the
/// password is ever stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity
    pub id: UserId,

    /// Login name (natural key)
    pub username: String,

    /// One-way hash of the password; plaintext is never persisted
    pub password_hash: String,

    /// Contact email (natural key)
    pub email: String,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Access role
    pub role: Role,

    /// Disabled accounts cannot log in
    pub enabled: bool,

    /// Set once on first persistence
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a user; `password_hash` is already hashed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login name
    pub username: String,
    /// One-way hash produced by the password seam
    pub password_hash: String,
    /// Contact email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Access role
    pub role: Role,
}
