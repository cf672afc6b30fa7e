//! Error types shared between the domain traits and their implementations

use thiserror::Error;

/// Errors surfaced by the storage layer
///
/// Absence of a row is never an error: lookups return `Option`. These
/// variants cover genuine store failures plus the typed conflict a unique
/// constraint produces, so callers can distinguish "the write raced a
/// natural key" from "the database is broken".
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying database failed (connectivity, corruption, bad SQL)
    #[error("database error: {0}")]
    Database(String),

    /// A unique constraint rejected the write
    ///
    /// `constraint` names the violated columns as reported by the store,
    /// e.g. `clients.email`.
    #[error("unique constraint violated: {constraint}")]
    Conflict {
        /// Violated constraint, as reported by the store
        constraint: String,
    },

    /// A persisted value could not be decoded into its domain type
    #[error("invalid data: {0}")]
    InvalidData(String),
}

/// Failure producing a one-way password hash
#[derive(Error, Debug)]
#[error("password hashing failed: {0}")]
pub struct HashError(pub String);
