//! Document service - archived text records guarded by case existence

use crate::error::{not_found, ServiceError};
use docket_domain::traits::{CaseRepository, DocumentRepository};
use docket_domain::{CaseId, CreateDocument, Document, DocumentId, UpdateDocument};
use tracing::{debug, info};

/// Business rules for archived documents
pub struct DocumentService<'a, S> {
    store: &'a S,
}

impl<'a, S> DocumentService<'a, S>
where
    S: DocumentRepository + CaseRepository,
{
    /// Create a service over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn require_document(&self, id: DocumentId) -> Result<Document, ServiceError> {
        self.store
            .get_document(id)?
            .ok_or_else(|| not_found("document", id.value()))
    }

    fn require_case(&self, id: CaseId) -> Result<(), ServiceError> {
        self.store
            .get_case(id)?
            .map(|_| ())
            .ok_or_else(|| not_found("case", id.value()))
    }

    /// Archive a document; the owning case must exist
    pub fn create_document(&self, draft: CreateDocument) -> Result<Document, ServiceError> {
        self.require_case(draft.case_id)?;
        let document = self.store.create_document(draft)?;
        info!(
            id = document.id.value(),
            case_id = document.case_id.value(),
            "document archived"
        );
        Ok(document)
    }

    /// Look up a document, failing with `NotFound` when absent
    pub fn get_document(&self, id: DocumentId) -> Result<Document, ServiceError> {
        self.require_document(id)
    }

    /// Documents belonging to a case; the case must exist
    pub fn documents_for_case(&self, case_id: CaseId) -> Result<Vec<Document>, ServiceError> {
        self.require_case(case_id)?;
        Ok(self.store.documents_for_case(case_id)?)
    }

    /// Apply a partial update; unsupplied fields keep their current value
    pub fn update_document(
        &self,
        id: DocumentId,
        update: UpdateDocument,
    ) -> Result<Document, ServiceError> {
        let mut document = self.require_document(id)?;
        document.apply(update);

        let affected = self.store.update_document(&document)?;
        if affected == 0 {
            return Err(not_found("document", id.value()));
        }
        debug!(id = id.value(), "document updated");

        self.require_document(id)
    }

    /// Delete a document, failing with `NotFound` when absent
    pub fn delete_document(&self, id: DocumentId) -> Result<(), ServiceError> {
        let affected = self.store.delete_document(id)?;
        if affected == 0 {
            return Err(not_found("document", id.value()));
        }
        info!(id = id.value(), "document deleted");
        Ok(())
    }
}
