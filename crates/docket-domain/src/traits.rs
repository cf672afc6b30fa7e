//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Repository traits are grouped per entity family; the
//! storage crate implements all of them on one store type over a single
//! shared connection. Services depend only on the traits they need.
//!
//! Contract shared by every repository:
//! - `create` assigns the identity and both timestamps, then returns the
//!   persisted entity. Natural-key collisions surface as
//!   [`StoreError::Conflict`] straight from the store's unique constraint.
//! - Lookups return `Option`; absence is never an error.
//! - `update`/`delete` return the affected-row count. `0` means the row no
//!   longer exists and callers must treat it as not-found.
//! - List operations return an empty `Vec`, never an error, on no match.

use crate::case::{Case, CaseId, CreateCase};
use crate::client::{Client, ClientId, CreateClient};
use crate::document::{CreateDocument, Document, DocumentId};
use crate::error::{HashError, StoreError};
use crate::hearing::{CreateHearing, Hearing, HearingId};
use crate::user::{CreateUser, User, UserId};
use chrono::{DateTime, Utc};

/// Repository for clients
pub trait ClientRepository {
    /// Persist a new client and return it with its generated identity
    fn create_client(&self, draft: CreateClient) -> Result<Client, StoreError>;

    /// Look up a client by id
    fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError>;

    /// Look up a client by its email natural key
    fn get_client_by_email(&self, email: &str) -> Result<Option<Client>, StoreError>;

    /// All clients, in repository order
    fn list_clients(&self) -> Result<Vec<Client>, StoreError>;

    /// Case-insensitive substring match over first OR last name
    fn search_clients(&self, term: &str) -> Result<Vec<Client>, StoreError>;

    /// Persist full entity state, refreshing the update timestamp
    fn update_client(&self, client: &Client) -> Result<usize, StoreError>;

    /// Delete by id, returning the affected-row count
    fn delete_client(&self, id: ClientId) -> Result<usize, StoreError>;
}

/// Repository for cases
pub trait CaseRepository {
    /// Persist a new case (status `New`) and return it with its identity
    fn create_case(&self, draft: CreateCase) -> Result<Case, StoreError>;

    /// Look up a case by id
    fn get_case(&self, id: CaseId) -> Result<Option<Case>, StoreError>;

    /// Look up a case by its docket-number natural key
    fn get_case_by_number(&self, case_number: &str) -> Result<Option<Case>, StoreError>;

    /// All cases, in repository order
    fn list_cases(&self) -> Result<Vec<Case>, StoreError>;

    /// Persist full entity state, refreshing the update timestamp
    fn update_case(&self, case: &Case) -> Result<usize, StoreError>;

    /// Delete by id; owned hearings, documents, and links go with it
    fn delete_case(&self, id: CaseId) -> Result<usize, StoreError>;
}

/// Repository for the Case↔Client junction
///
/// The junction table is authoritative; both lookup directions are computed
/// joins. Existence of the linked entities is the calling service's concern.
pub trait CaseClientRepository {
    /// Create the link if absent; idempotent. Returns whether a row was
    /// inserted.
    fn link(&self, case_id: CaseId, client_id: ClientId) -> Result<bool, StoreError>;

    /// Remove the link if present; a missing link is a no-op. Returns the
    /// affected-row count.
    fn unlink(&self, case_id: CaseId, client_id: ClientId) -> Result<usize, StoreError>;

    /// Clients linked to a case
    fn clients_for_case(&self, case_id: CaseId) -> Result<Vec<Client>, StoreError>;

    /// Cases linked to a client
    fn cases_for_client(&self, client_id: ClientId) -> Result<Vec<Case>, StoreError>;
}

/// Repository for hearings
pub trait HearingRepository {
    /// Persist a new hearing (status `Scheduled`) and return it
    fn create_hearing(&self, draft: CreateHearing) -> Result<Hearing, StoreError>;

    /// Look up a hearing by id
    fn get_hearing(&self, id: HearingId) -> Result<Option<Hearing>, StoreError>;

    /// Hearings belonging to a case
    fn hearings_for_case(&self, case_id: CaseId) -> Result<Vec<Hearing>, StoreError>;

    /// Hearings with `start <= scheduled_at <= end`, ascending by date
    fn hearings_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Hearing>, StoreError>;

    /// Hearings strictly after `after` and not cancelled, ascending by date
    fn upcoming_hearings(&self, after: DateTime<Utc>) -> Result<Vec<Hearing>, StoreError>;

    /// Persist full entity state, refreshing the update timestamp
    fn update_hearing(&self, hearing: &Hearing) -> Result<usize, StoreError>;

    /// Delete by id, returning the affected-row count
    fn delete_hearing(&self, id: HearingId) -> Result<usize, StoreError>;
}

/// Repository for documents
pub trait DocumentRepository {
    /// Persist a new document and return it with its identity
    fn create_document(&self, draft: CreateDocument) -> Result<Document, StoreError>;

    /// Look up a document by id
    fn get_document(&self, id: DocumentId) -> Result<Option<Document>, StoreError>;

    /// Documents belonging to a case
    fn documents_for_case(&self, case_id: CaseId) -> Result<Vec<Document>, StoreError>;

    /// Persist full entity state, refreshing the update timestamp
    fn update_document(&self, document: &Document) -> Result<usize, StoreError>;

    /// Delete by id, returning the affected-row count
    fn delete_document(&self, id: DocumentId) -> Result<usize, StoreError>;
}

/// Repository for users
pub trait UserRepository {
    /// Persist a new user and return it with its identity
    fn create_user(&self, draft: CreateUser) -> Result<User, StoreError>;

    /// Look up a user by id
    fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError>;

    /// Look up a user by its username natural key
    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Look up a user by its email natural key
    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// All users, in repository order
    fn list_users(&self) -> Result<Vec<User>, StoreError>;

    /// Enable or disable an account; disabled accounts cannot log in.
    /// Returns the affected-row count under the usual contract.
    fn set_user_enabled(&self, id: UserId, enabled: bool) -> Result<usize, StoreError>;
}

/// One-way password hash seam
///
/// The hash algorithm is pluggable; the authentication service consumes
/// this trait and never sees plaintext beyond the call boundary.
pub trait PasswordHasher {
    /// Produce a one-way hash of `password` suitable for storage
    fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Check `password` against a stored hash; failure-closed, so a
    /// malformed stored hash verifies as `false` rather than erroring
    fn verify_password(&self, password: &str, stored: &str) -> bool;
}
