//! Case service - case lifecycle and the Case↔Client relationship

use crate::error::{conflict_to_duplicate, normalize_opt, not_found, ServiceError};
use docket_domain::traits::{CaseClientRepository, CaseRepository, ClientRepository};
use docket_domain::{Case, CaseId, Client, ClientId, CreateCase, UpdateCase};
use tracing::{debug, info};

/// Business rules for cases and their client associations
///
/// Relationship operations verify both anchor entities exist before
/// touching the junction table; the junction table itself is the single
/// source of truth for membership in both directions.
pub struct CaseService<'a, S> {
    store: &'a S,
}

impl<'a, S> CaseService<'a, S>
where
    S: CaseRepository + ClientRepository + CaseClientRepository,
{
    /// Create a service over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn require_case(&self, id: CaseId) -> Result<Case, ServiceError> {
        self.store
            .get_case(id)?
            .ok_or_else(|| not_found("case", id.value()))
    }

    fn require_client(&self, id: ClientId) -> Result<Client, ServiceError> {
        self.store
            .get_client(id)?
            .ok_or_else(|| not_found("client", id.value()))
    }

    /// Open a case; it always starts in status `New`
    ///
    /// A taken case number fails with `DuplicateKey`.
    pub fn create_case(&self, mut draft: CreateCase) -> Result<Case, ServiceError> {
        draft.case_number = normalize_opt(draft.case_number);
        let case = self.store.create_case(draft).map_err(conflict_to_duplicate)?;
        info!(id = case.id.value(), "case created");
        Ok(case)
    }

    /// Look up a case, failing with `NotFound` when absent
    pub fn get_case(&self, id: CaseId) -> Result<Case, ServiceError> {
        self.require_case(id)
    }

    /// All cases
    pub fn list_cases(&self) -> Result<Vec<Case>, ServiceError> {
        Ok(self.store.list_cases()?)
    }

    /// Apply a partial update
    ///
    /// Any status may be set from any other; there is no transition graph.
    /// A case-number change colliding with a different case fails with
    /// `DuplicateKey`.
    pub fn update_case(&self, id: CaseId, mut update: UpdateCase) -> Result<Case, ServiceError> {
        update.case_number = update.case_number.map(normalize_opt);

        let mut case = self.require_case(id)?;
        case.apply(update);

        let affected = self.store.update_case(&case).map_err(conflict_to_duplicate)?;
        if affected == 0 {
            return Err(not_found("case", id.value()));
        }
        debug!(id = id.value(), "case updated");

        self.require_case(id)
    }

    /// Delete a case along with its hearings, documents, and client links
    pub fn delete_case(&self, id: CaseId) -> Result<(), ServiceError> {
        let affected = self.store.delete_case(id)?;
        if affected == 0 {
            return Err(not_found("case", id.value()));
        }
        info!(id = id.value(), "case deleted");
        Ok(())
    }

    /// Associate a client with a case; idempotent
    ///
    /// Both entities must exist (`NotFound` otherwise). Linking an already
    /// linked pair changes nothing.
    pub fn add_client_to_case(
        &self,
        case_id: CaseId,
        client_id: ClientId,
    ) -> Result<(), ServiceError> {
        self.require_case(case_id)?;
        self.require_client(client_id)?;

        let linked = self.store.link(case_id, client_id)?;
        if linked {
            info!(
                case_id = case_id.value(),
                client_id = client_id.value(),
                "client linked to case"
            );
        }
        Ok(())
    }

    /// Remove a client association; a missing link is a no-op
    ///
    /// Both entities must still exist (`NotFound` otherwise).
    pub fn remove_client_from_case(
        &self,
        case_id: CaseId,
        client_id: ClientId,
    ) -> Result<(), ServiceError> {
        self.require_case(case_id)?;
        self.require_client(client_id)?;

        let removed = self.store.unlink(case_id, client_id)?;
        if removed > 0 {
            info!(
                case_id = case_id.value(),
                client_id = client_id.value(),
                "client unlinked from case"
            );
        }
        Ok(())
    }

    /// Clients linked to a case; the case must exist
    pub fn get_clients_for_case(&self, case_id: CaseId) -> Result<Vec<Client>, ServiceError> {
        self.require_case(case_id)?;
        Ok(self.store.clients_for_case(case_id)?)
    }

    /// Cases linked to a client; the client must exist
    pub fn get_cases_for_client(&self, client_id: ClientId) -> Result<Vec<Case>, ServiceError> {
        self.require_client(client_id)?;
        Ok(self.store.cases_for_client(client_id)?)
    }
}
