//! Docket Domain Services
//!
//! Business-rule layer of the case tracking system. Each service guards the
//! mutations of one entity family before delegating to the repository
//! traits from `docket-domain`:
//!
//! - existence preconditions (`NotFound` before any mutation)
//! - natural-key uniqueness (`DuplicateKey`, enforced by the store's unique
//!   constraints rather than a read-before-write)
//! - status rules (new cases start `New`, new hearings start `Scheduled`,
//!   reschedules force `Scheduled` and append an audit line)
//! - date-range validation (`InvalidArgument` before any store access)
//!
//! Presentation code calls these services and never touches repositories
//! directly. Authentication hands the caller an explicit [`Session`] value;
//! holding one *is* being logged in.
//!
//! All services borrow a store implementing the repository traits; wiring
//! them to `docket_store::SqliteStore` is the caller's one-line job.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod cases;
pub mod clients;
pub mod documents;
pub mod error;
pub mod hearings;
pub mod password;
pub mod session;

// Re-exports for convenience
pub use auth::{AuthService, RegisterUser};
pub use cases::CaseService;
pub use clients::ClientService;
pub use documents::DocumentService;
pub use error::ServiceError;
pub use hearings::HearingService;
pub use password::Argon2Hasher;
pub use session::Session;
