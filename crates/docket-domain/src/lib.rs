//! Docket Domain Layer
//!
//! This crate contains the entity model and trait contracts for Docket, a
//! case tracking system for a small legal office. It defines the records
//! (cases, clients, hearings, documents, users), the typed enumerations for
//! their status/type fields, and the repository traits the storage layer
//! implements.
//!
//! ## Key Concepts
//!
//! - **Case**: A legal matter with a natural key (case number) and a status
//! - **Client**: A person associated with cases through junction links
//! - **CaseClientLink**: The persisted junction row of the Case↔Client
//!   many-to-many relation; the junction table is the single source of truth
//! - **Hearing / Document**: Records owned exclusively by one case
//! - **User**: An office account with a one-way password hash and a role
//!
//! ## Architecture
//!
//! This crate holds no business rules and no storage code:
//! - Entity records and enumerations only
//! - Trait definitions for the store and the password hash seam
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod case;
pub mod client;
pub mod document;
pub mod error;
pub mod hearing;
pub mod link;
pub mod traits;
pub mod user;

// Re-exports for convenience
pub use case::{Case, CaseId, CaseStatus, CaseType, CreateCase, UpdateCase};
pub use client::{Client, ClientId, CreateClient, UpdateClient};
pub use document::{CreateDocument, Document, DocumentId, DocumentType, UpdateDocument};
pub use error::{HashError, StoreError};
pub use hearing::{CreateHearing, Hearing, HearingId, HearingStatus, UpdateHearing};
pub use link::{CaseClientLink, LinkId};
pub use user::{CreateUser, Role, User, UserId};
