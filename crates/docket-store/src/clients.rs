//! Client repository implementation

use crate::{db_err, fmt_ts, ts_col, SqliteStore};
use chrono::Utc;
use docket_domain::traits::ClientRepository;
use docket_domain::{Client, ClientId, CreateClient, StoreError};
use rusqlite::{params, OptionalExtension, Row};

const COLUMNS: &str = "id, first_name, last_name, email, phone, address, created_at, updated_at";

pub(crate) fn row_to_client(row: &Row<'_>) -> rusqlite::Result<Client> {
    Ok(Client {
        id: ClientId::new(row.get(0)?),
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        created_at: ts_col(row, 6)?,
        updated_at: ts_col(row, 7)?,
    })
}

impl ClientRepository for SqliteStore {
    fn create_client(&self, draft: CreateClient) -> Result<Client, StoreError> {
        let now = Utc::now();
        self.conn
            .execute(
                "INSERT INTO clients (first_name, last_name, email, phone, address, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
                params![
                    draft.first_name,
                    draft.last_name,
                    draft.email,
                    draft.phone,
                    draft.address,
                    fmt_ts(&now),
                ],
            )
            .map_err(db_err)?;

        Ok(Client {
            id: ClientId::new(self.conn.last_insert_rowid()),
            first_name: draft.first_name,
            last_name: draft.last_name,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            created_at: now,
            updated_at: now,
        })
    }

    fn get_client(&self, id: ClientId) -> Result<Option<Client>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM clients WHERE id = ?1"),
                params![id.value()],
                row_to_client,
            )
            .optional()
            .map_err(db_err)
    }

    fn get_client_by_email(&self, email: &str) -> Result<Option<Client>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM clients WHERE email = ?1"),
                params![email],
                row_to_client,
            )
            .optional()
            .map_err(db_err)
    }

    fn list_clients(&self) -> Result<Vec<Client>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM clients ORDER BY id ASC"))
            .map_err(db_err)?;
        let clients = stmt
            .query_map([], row_to_client)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(clients)
    }

    fn search_clients(&self, term: &str) -> Result<Vec<Client>, StoreError> {
        let pattern = format!("%{}%", term.to_lowercase());
        let mut stmt = self
            .conn
            .prepare(&format!(
                "SELECT {COLUMNS} FROM clients
                 WHERE lower(first_name) LIKE ?1 OR lower(last_name) LIKE ?1
                 ORDER BY last_name ASC, first_name ASC"
            ))
            .map_err(db_err)?;
        let clients = stmt
            .query_map(params![pattern], row_to_client)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(clients)
    }

    fn update_client(&self, client: &Client) -> Result<usize, StoreError> {
        self.conn
            .execute(
                "UPDATE clients SET
                    first_name = ?2,
                    last_name = ?3,
                    email = ?4,
                    phone = ?5,
                    address = ?6,
                    updated_at = ?7
                 WHERE id = ?1",
                params![
                    client.id.value(),
                    client.first_name,
                    client.last_name,
                    client.email,
                    client.phone,
                    client.address,
                    fmt_ts(&Utc::now()),
                ],
            )
            .map_err(db_err)
    }

    fn delete_client(&self, id: ClientId) -> Result<usize, StoreError> {
        self.conn
            .execute("DELETE FROM clients WHERE id = ?1", params![id.value()])
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

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
    fn test_create_assigns_identity_and_timestamps() {
        let store = store();
        let client = store
            .create_client(draft("Ada", "Marsh", Some("ada@example.com")))
            .unwrap();

        assert!(client.id.value() > 0);
        assert_eq!(client.created_at, client.updated_at);

        let fetched = store.get_client(client.id).unwrap().unwrap();
        assert_eq!(fetched, client);
    }

    #[test]
    fn test_get_by_email() {
        let store = store();
        let created = store
            .create_client(draft("Ada", "Marsh", Some("ada@example.com")))
            .unwrap();

        let found = store.get_client_by_email("ada@example.com").unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(store.get_client_by_email("nobody@example.com").unwrap().is_none());
    }

    #[test]
    fn test_clients_without_email_do_not_collide() {
        let store = store();
        store.create_client(draft("Ada", "Marsh", None)).unwrap();
        store.create_client(draft("Ben", "Ortiz", None)).unwrap();
        assert_eq!(store.list_clients().unwrap().len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_over_both_names() {
        let store = store();
        store.create_client(draft("Ada", "Marsh", None)).unwrap();
        store.create_client(draft("Ben", "Ortiz", None)).unwrap();
        store.create_client(draft("Marsha", "Lane", None)).unwrap();

        let hits = store.search_clients("MARSH").unwrap();
        let names: Vec<_> = hits.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Ada"));
        assert!(names.contains(&"Marsha"));
    }

    #[test]
    fn test_update_refreshes_timestamp_and_reports_rowcount() {
        let store = store();
        let mut client = store.create_client(draft("Ada", "Marsh", None)).unwrap();

        client.phone = Some("555-0100".to_string());
        assert_eq!(store.update_client(&client).unwrap(), 1);

        let fetched = store.get_client(client.id).unwrap().unwrap();
        assert_eq!(fetched.phone.as_deref(), Some("555-0100"));
        assert!(fetched.updated_at >= fetched.created_at);

        let ghost = Client {
            id: ClientId::new(9_999),
            ..client
        };
        assert_eq!(store.update_client(&ghost).unwrap(), 0);
    }

    #[test]
    fn test_delete_reports_rowcount() {
        let store = store();
        let client = store.create_client(draft("Ada", "Marsh", None)).unwrap();

        assert_eq!(store.delete_client(client.id).unwrap(), 1);
        assert_eq!(store.delete_client(client.id).unwrap(), 0);
        assert!(store.get_client(client.id).unwrap().is_none());
    }
}
