//! Docket Storage Layer
//!
//! Implements every repository trait from `docket-domain` on a single
//! SQLite-backed store.
//!
//! # Architecture
//!
//! - One `rusqlite` connection shared by all entity families; every
//!   repository call is a point-in-time round trip with no caching
//! - Timestamps are stored as fixed-width RFC 3339 UTC text, so SQL
//!   comparisons and ordering on date columns are chronological
//! - Natural keys (client email, case number, username, user email) are
//!   UNIQUE columns; a colliding write comes back as
//!   [`StoreError::Conflict`] without any prior read
//! - `PRAGMA foreign_keys = ON`: deleting a case cascades its hearings,
//!   documents, and junction rows; deleting a client cascades its junction
//!   rows only
//!
//! # Examples
//!
//! ```no_run
//! use docket_store::SqliteStore;
//!
//! let store = SqliteStore::open("docket.db").unwrap();
//! // Store is now ready for repository operations
//! ```

#![warn(missing_docs)]

use chrono::{DateTime, SecondsFormat, Utc};
use docket_domain::StoreError;
use rusqlite::types::Type;
use rusqlite::{Connection, Row};
use std::path::Path;
use std::time::Duration;

mod cases;
mod clients;
mod config;
mod documents;
mod hearings;
mod links;
mod users;

pub use config::StoreConfig;

/// SQLite-based implementation of the Docket repositories
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. Each thread should have its own
/// `SqliteStore` instance.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a store at the given database path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use docket_store::SqliteStore;
    ///
    /// let store = SqliteStore::open("docket.db").unwrap();
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(db_err)?;
        Self::init(conn)
    }

    /// Open an in-memory store, useful for testing
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(db_err)?;
        Self::init(conn)
    }

    /// Open a store from configuration
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let conn = Connection::open(&config.path).map_err(db_err)?;
        conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
            .map_err(db_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        // Cascades depend on this pragma; it is per-connection in SQLite.
        conn.pragma_update(None, "foreign_keys", "ON")
            .map_err(db_err)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema).map_err(db_err)
    }
}

/// Translate a rusqlite error into the domain store error
///
/// UNIQUE violations become a typed `Conflict` carrying the constraint name
/// SQLite reports (e.g. `clients.email`); everything else is a plain
/// database failure.
pub(crate) fn db_err(e: rusqlite::Error) -> StoreError {
    if let rusqlite::Error::SqliteFailure(code, Some(msg)) = &e {
        if code.code == rusqlite::ErrorCode::ConstraintViolation
            && msg.starts_with("UNIQUE constraint failed:")
        {
            let constraint = msg
                .trim_start_matches("UNIQUE constraint failed:")
                .trim()
                .to_string();
            return StoreError::Conflict { constraint };
        }
    }
    StoreError::Database(e.to_string())
}

/// Format a timestamp for storage
///
/// Fixed-width RFC 3339 UTC, so lexicographic order in SQL matches
/// chronological order.
pub(crate) fn fmt_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a stored timestamp
pub(crate) fn parse_ts(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::InvalidData(format!("invalid timestamp '{}': {}", raw, e)))
}

/// Read a timestamp column inside a row-mapping closure
pub(crate) fn ts_col(row: &Row<'_>, idx: usize) -> rusqlite::Result<DateTime<Utc>> {
    let raw: String = row.get(idx)?;
    parse_ts(&raw).map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Signal a malformed column value inside a row-mapping closure
pub(crate) fn invalid_col(idx: usize, msg: String) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(StoreError::InvalidData(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::traits::ClientRepository;
    use docket_domain::CreateClient;

    fn draft(first: &str, last: &str, email: Option<&str>) -> CreateClient {
        CreateClient {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.map(str::to_string),
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_schema_initializes_in_memory() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.list_clients().unwrap().is_empty());
    }

    #[test]
    fn test_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docket.db");

        {
            let store = SqliteStore::open(&path).unwrap();
            store
                .create_client(draft("Ada", "Marsh", Some("ada@example.com")))
                .unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let clients = store.list_clients().unwrap();
        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].first_name, "Ada");
    }

    #[test]
    fn test_open_from_config() {
        let config = StoreConfig {
            path: std::path::PathBuf::from(":memory:"),
            busy_timeout_ms: 100,
        };
        let store = SqliteStore::from_config(&config).unwrap();
        assert!(store.list_clients().unwrap().is_empty());
    }

    #[test]
    fn test_unique_violation_maps_to_conflict() {
        let store = SqliteStore::open_in_memory().unwrap();
        store
            .create_client(draft("Ada", "Marsh", Some("ada@example.com")))
            .unwrap();

        let err = store
            .create_client(draft("Ada", "Impostor", Some("ada@example.com")))
            .unwrap_err();

        match err {
            StoreError::Conflict { constraint } => assert_eq!(constraint, "clients.email"),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_timestamp_round_trip() {
        let now = Utc::now();
        let parsed = parse_ts(&fmt_ts(&now)).unwrap();
        assert_eq!(parsed, now);
    }

    #[test]
    fn test_timestamp_text_orders_chronologically() {
        let earlier = Utc::now();
        let later = earlier + chrono::Duration::seconds(90);
        assert!(fmt_ts(&earlier) < fmt_ts(&later));
    }
}
