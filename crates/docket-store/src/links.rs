//! Case↔Client junction implementation
//!
//! The junction table is the single source of truth for the relation; both
//! lookup directions are joins computed at call time.

use crate::cases::row_to_case;
use crate::clients::row_to_client;
use crate::{db_err, fmt_ts, SqliteStore};
use chrono::Utc;
use docket_domain::traits::CaseClientRepository;
use docket_domain::{Case, CaseId, Client, ClientId, StoreError};
use rusqlite::params;

impl CaseClientRepository for SqliteStore {
    fn link(&self, case_id: CaseId, client_id: ClientId) -> Result<bool, StoreError> {
        // ON CONFLICT DO NOTHING makes relinking idempotent; the UNIQUE pair
        // constraint keeps duplicates out even under concurrent writers.
        let inserted = self
            .conn
            .execute(
                "INSERT INTO case_clients (case_id, client_id, linked_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT (case_id, client_id) DO NOTHING",
                params![case_id.value(), client_id.value(), fmt_ts(&Utc::now())],
            )
            .map_err(db_err)?;
        Ok(inserted > 0)
    }

    fn unlink(&self, case_id: CaseId, client_id: ClientId) -> Result<usize, StoreError> {
        self.conn
            .execute(
                "DELETE FROM case_clients WHERE case_id = ?1 AND client_id = ?2",
                params![case_id.value(), client_id.value()],
            )
            .map_err(db_err)
    }

    fn clients_for_case(&self, case_id: CaseId) -> Result<Vec<Client>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT c.id, c.first_name, c.last_name, c.email, c.phone, c.address, c.created_at, c.updated_at
                 FROM clients c
                 JOIN case_clients cc ON cc.client_id = c.id
                 WHERE cc.case_id = ?1
                 ORDER BY c.id ASC",
            )
            .map_err(db_err)?;
        let clients = stmt
            .query_map(params![case_id.value()], row_to_client)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(clients)
    }

    fn cases_for_client(&self, client_id: ClientId) -> Result<Vec<Case>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT cs.id, cs.case_number, cs.title, cs.case_type, cs.description, cs.status, cs.created_at, cs.updated_at
                 FROM cases cs
                 JOIN case_clients cc ON cc.case_id = cs.id
                 WHERE cc.client_id = ?1
                 ORDER BY cs.id ASC",
            )
            .map_err(db_err)?;
        let cases = stmt
            .query_map(params![client_id.value()], row_to_case)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(cases)
    }
}
