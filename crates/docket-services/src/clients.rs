//! Client service - uniqueness and existence rules for client records

use crate::error::{conflict_to_duplicate, normalize_opt, not_found, ServiceError};
use docket_domain::traits::ClientRepository;
use docket_domain::{Client, ClientId, CreateClient, UpdateClient};
use tracing::{debug, info};

/// Business rules for the client entity family
///
/// Email uniqueness rides on the store's unique column: a colliding write
/// comes back as a typed conflict and is surfaced as `DuplicateKey`, with
/// no check-then-insert window. Blank emails are normalized to absent and
/// exempt from uniqueness.
pub struct ClientService<'a, S> {
    store: &'a S,
}

impl<'a, S: ClientRepository> ClientService<'a, S> {
    /// Create a service over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Create a client; a taken email fails with `DuplicateKey`
    pub fn create_client(&self, mut draft: CreateClient) -> Result<Client, ServiceError> {
        draft.email = normalize_opt(draft.email);
        let client = self
            .store
            .create_client(draft)
            .map_err(conflict_to_duplicate)?;
        info!(id = client.id.value(), "client created");
        Ok(client)
    }

    /// Look up a client, failing with `NotFound` when absent
    pub fn get_client(&self, id: ClientId) -> Result<Client, ServiceError> {
        self.store
            .get_client(id)?
            .ok_or_else(|| not_found("client", id.value()))
    }

    /// All clients
    pub fn list_clients(&self) -> Result<Vec<Client>, ServiceError> {
        Ok(self.store.list_clients()?)
    }

    /// Case-insensitive partial match over first OR last name
    pub fn search_clients(&self, term: &str) -> Result<Vec<Client>, ServiceError> {
        Ok(self.store.search_clients(term)?)
    }

    /// Apply a partial update
    ///
    /// Fails with `NotFound` if the id is absent. Changing the email to one
    /// held by a *different* client fails with `DuplicateKey`; re-setting a
    /// client's own email succeeds.
    pub fn update_client(
        &self,
        id: ClientId,
        mut update: UpdateClient,
    ) -> Result<Client, ServiceError> {
        update.email = update.email.map(normalize_opt);

        let mut client = self.get_client(id)?;
        client.apply(update);

        let affected = self
            .store
            .update_client(&client)
            .map_err(conflict_to_duplicate)?;
        if affected == 0 {
            return Err(not_found("client", id.value()));
        }
        debug!(id = id.value(), "client updated");

        // Re-read so the caller sees the refreshed update timestamp.
        self.get_client(id)
    }

    /// Delete a client, failing with `NotFound` when absent
    ///
    /// Junction links to cases cascade away; the cases themselves survive.
    pub fn delete_client(&self, id: ClientId) -> Result<(), ServiceError> {
        let affected = self.store.delete_client(id)?;
        if affected == 0 {
            return Err(not_found("client", id.value()));
        }
        info!(id = id.value(), "client deleted");
        Ok(())
    }
}
