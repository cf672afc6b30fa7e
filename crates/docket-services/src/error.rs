//! Error types for service operations

use docket_domain::{HashError, StoreError};
use thiserror::Error;

/// Errors surfaced by the domain services
///
/// The first three variants are caller-correctable; `Store` means the
/// database itself failed and wants operator attention. Services never
/// swallow a failure silently — the one sanctioned no-op is unlinking a
/// link that does not exist.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A referenced entity id does not exist
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity family, e.g. `client`
        entity: &'static str,
        /// The id that failed to resolve
        id: i64,
    },

    /// A natural key (email, case number, username) is already taken by a
    /// different entity
    #[error("duplicate value for {field}")]
    DuplicateKey {
        /// The colliding field
        field: String,
    },

    /// Malformed input reaching a service
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The underlying store failed independently of domain logic
    #[error("store failure: {0}")]
    Store(#[from] StoreError),

    /// The password seam failed to produce a hash
    #[error(transparent)]
    Hash(#[from] HashError),
}

pub(crate) fn not_found(entity: &'static str, id: i64) -> ServiceError {
    ServiceError::NotFound { entity, id }
}

/// Turn a store-level unique-constraint conflict into `DuplicateKey`
///
/// The store reports the violated constraint as `table.column`; the column
/// part is the field name callers care about. Anything that is not a
/// conflict stays a store failure.
pub(crate) fn conflict_to_duplicate(err: StoreError) -> ServiceError {
    match err {
        StoreError::Conflict { constraint } => {
            let field = constraint
                .rsplit('.')
                .next()
                .unwrap_or(constraint.as_str())
                .trim()
                .to_string();
            ServiceError::DuplicateKey { field }
        }
        other => ServiceError::Store(other),
    }
}

/// Trim an optional natural key; blank strings count as absent
pub(crate) fn normalize_opt(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
