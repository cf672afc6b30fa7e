//! User repository implementation

use crate::{db_err, fmt_ts, invalid_col, ts_col, SqliteStore};
use chrono::Utc;
use docket_domain::traits::UserRepository;
use docket_domain::{CreateUser, Role, StoreError, User, UserId};
use rusqlite::{params, OptionalExtension, Row};

const COLUMNS: &str =
    "id, username, password_hash, email, first_name, last_name, role, enabled, created_at, updated_at";

fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    let role_raw: String = row.get(6)?;
    let role = Role::from_db_value(&role_raw)
        .ok_or_else(|| invalid_col(6, format!("invalid role '{}'", role_raw)))?;
    let enabled: i64 = row.get(7)?;

    Ok(User {
        id: UserId::new(row.get(0)?),
        username: row.get(1)?,
        password_hash: row.get(2)?,
        email: row.get(3)?,
        first_name: row.get(4)?,
        last_name: row.get(5)?,
        role,
        enabled: enabled != 0,
        created_at: ts_col(row, 8)?,
        updated_at: ts_col(row, 9)?,
    })
}

impl UserRepository for SqliteStore {
    fn create_user(&self, draft: CreateUser) -> Result<User, StoreError> {
        let now = Utc::now();
        self.conn
            .execute(
                "INSERT INTO users (username, password_hash, email, first_name, last_name, role, enabled, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, 1, ?7, ?7)",
                params![
                    draft.username,
                    draft.password_hash,
                    draft.email,
                    draft.first_name,
                    draft.last_name,
                    draft.role.as_str(),
                    fmt_ts(&now),
                ],
            )
            .map_err(db_err)?;

        Ok(User {
            id: UserId::new(self.conn.last_insert_rowid()),
            username: draft.username,
            password_hash: draft.password_hash,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            role: draft.role,
            enabled: true,
            created_at: now,
            updated_at: now,
        })
    }

    fn get_user(&self, id: UserId) -> Result<Option<User>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM users WHERE id = ?1"),
                params![id.value()],
                row_to_user,
            )
            .optional()
            .map_err(db_err)
    }

    fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM users WHERE username = ?1"),
                params![username],
                row_to_user,
            )
            .optional()
            .map_err(db_err)
    }

    fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM users WHERE email = ?1"),
                params![email],
                row_to_user,
            )
            .optional()
            .map_err(db_err)
    }

    fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {COLUMNS} FROM users ORDER BY id ASC"))
            .map_err(db_err)?;
        let users = stmt
            .query_map([], row_to_user)
            .map_err(db_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(db_err)?;
        Ok(users)
    }

    fn set_user_enabled(&self, id: UserId, enabled: bool) -> Result<usize, StoreError> {
        self.conn
            .execute(
                "UPDATE users SET enabled = ?2, updated_at = ?3 WHERE id = ?1",
                params![id.value(), enabled as i64, fmt_ts(&Utc::now())],
            )
            .map_err(db_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SqliteStore {
        SqliteStore::open_in_memory().unwrap()
    }

    fn draft(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: username.to_string(),
            password_hash: "$fake$hash".to_string(),
            email: email.to_string(),
            first_name: "Jo".to_string(),
            last_name: "Reyes".to_string(),
            role: Role::Lawyer,
        }
    }

    #[test]
    fn test_created_user_is_enabled() {
        let store = store();
        let user = store.create_user(draft("jreyes", "jo@example.com")).unwrap();

        assert!(user.enabled);
        let fetched = store.get_user_by_username("jreyes").unwrap().unwrap();
        assert_eq!(fetched, user);
    }

    #[test]
    fn test_username_and_email_are_natural_keys() {
        let store = store();
        store.create_user(draft("jreyes", "jo@example.com")).unwrap();

        let err = store
            .create_user(draft("jreyes", "other@example.com"))
            .unwrap_err();
        match err {
            StoreError::Conflict { constraint } => assert_eq!(constraint, "users.username"),
            other => panic!("expected Conflict, got {other:?}"),
        }

        let err = store
            .create_user(draft("other", "jo@example.com"))
            .unwrap_err();
        match err {
            StoreError::Conflict { constraint } => assert_eq!(constraint, "users.email"),
            other => panic!("expected Conflict, got {other:?}"),
        }
    }

    #[test]
    fn test_set_enabled_flag() {
        let store = store();
        let user = store.create_user(draft("jreyes", "jo@example.com")).unwrap();

        assert_eq!(store.set_user_enabled(user.id, false).unwrap(), 1);
        assert!(!store.get_user(user.id).unwrap().unwrap().enabled);

        assert_eq!(store.set_user_enabled(UserId::new(404), false).unwrap(), 0);
    }

    #[test]
    fn test_lookup_by_email() {
        let store = store();
        let created = store.create_user(draft("jreyes", "jo@example.com")).unwrap();
        let found = store.get_user_by_email("jo@example.com").unwrap().unwrap();
        assert_eq!(found.id, created.id);
    }
}
