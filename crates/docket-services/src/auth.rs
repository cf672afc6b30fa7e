//! Authentication service - registration, login, and session handout

use crate::error::{conflict_to_duplicate, ServiceError};
use crate::session::Session;
use docket_domain::traits::{PasswordHasher, UserRepository};
use docket_domain::{CreateUser, Role, User};
use tracing::{debug, info};

/// Fields for registering an account; the password is plaintext here and
/// nowhere past this boundary
#[derive(Debug, Clone)]
pub struct RegisterUser {
    /// Login name
    pub username: String,
    /// Plaintext password; only its one-way hash is stored
    pub password: String,
    /// Contact email
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Access role
    pub role: Role,
}

/// Registration and login against the user repository
///
/// Login fails closed: unknown username, disabled account, and wrong
/// password are indistinguishable to the caller — all yield `None`.
pub struct AuthService<'a, S, H> {
    store: &'a S,
    hasher: H,
}

impl<'a, S, H> AuthService<'a, S, H>
where
    S: UserRepository,
    H: PasswordHasher,
{
    /// Create a service over the given store and hash seam
    pub fn new(store: &'a S, hasher: H) -> Self {
        Self { store, hasher }
    }

    /// Register an account
    ///
    /// A taken username or email fails with `DuplicateKey`. Only the
    /// one-way hash of the password is persisted.
    pub fn register(&self, draft: RegisterUser) -> Result<User, ServiceError> {
        let password_hash = self.hasher.hash_password(&draft.password)?;
        let user = self
            .store
            .create_user(CreateUser {
                username: draft.username,
                password_hash,
                email: draft.email,
                first_name: draft.first_name,
                last_name: draft.last_name,
                role: draft.role,
            })
            .map_err(conflict_to_duplicate)?;
        info!(username = %user.username, role = user.role.as_str(), "user registered");
        Ok(user)
    }

    /// Authenticate and hand out a session
    ///
    /// Returns `None` when the username is unknown, the account is
    /// disabled, or the password does not match.
    pub fn login(&self, username: &str, password: &str) -> Result<Option<Session>, ServiceError> {
        let Some(user) = self.store.get_user_by_username(username)? else {
            debug!(username, "login rejected: unknown username");
            return Ok(None);
        };
        if !user.enabled {
            debug!(username, "login rejected: account disabled");
            return Ok(None);
        }
        if !self.hasher.verify_password(password, &user.password_hash) {
            debug!(username, "login rejected: password mismatch");
            return Ok(None);
        }

        info!(username, "login succeeded");
        Ok(Some(Session::new(user)))
    }

    /// End a session
    ///
    /// Dropping the session would do; this consuming form exists so the
    /// event gets logged.
    pub fn logout(&self, session: Session) {
        info!(username = %session.username(), "logged out");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::Argon2Hasher;
    use docket_store::SqliteStore;

    fn register_draft(username: &str, email: &str) -> RegisterUser {
        RegisterUser {
            username: username.to_string(),
            password: "hunter2hunter2".to_string(),
            email: email.to_string(),
            first_name: "Jo".to_string(),
            last_name: "Reyes".to_string(),
            role: Role::Lawyer,
        }
    }

    #[test]
    fn test_register_stores_hash_not_plaintext() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = AuthService::new(&store, Argon2Hasher);

        let user = service.register(register_draft("jreyes", "jo@example.com")).unwrap();
        assert_ne!(user.password_hash, "hunter2hunter2");
        assert!(!user.password_hash.contains("hunter2"));
    }

    #[test]
    fn test_duplicate_username_and_email_rejected() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = AuthService::new(&store, Argon2Hasher);
        service.register(register_draft("jreyes", "jo@example.com")).unwrap();

        let err = service
            .register(register_draft("jreyes", "other@example.com"))
            .unwrap_err();
        match err {
            ServiceError::DuplicateKey { field } => assert_eq!(field, "username"),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }

        let err = service
            .register(register_draft("other", "jo@example.com"))
            .unwrap_err();
        match err {
            ServiceError::DuplicateKey { field } => assert_eq!(field, "email"),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn test_login_round_trip() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = AuthService::new(&store, Argon2Hasher);
        service.register(register_draft("jreyes", "jo@example.com")).unwrap();

        let session = service.login("jreyes", "hunter2hunter2").unwrap().unwrap();
        assert_eq!(session.username(), "jreyes");
        assert!(session.has_role(Role::Lawyer));

        service.logout(session);
    }

    #[test]
    fn test_login_fails_closed() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = AuthService::new(&store, Argon2Hasher);
        service.register(register_draft("jreyes", "jo@example.com")).unwrap();

        assert!(service.login("nobody", "hunter2hunter2").unwrap().is_none());
        assert!(service.login("jreyes", "wrong password").unwrap().is_none());
    }

    #[test]
    fn test_disabled_account_cannot_log_in() {
        let store = SqliteStore::open_in_memory().unwrap();
        let service = AuthService::new(&store, Argon2Hasher);
        let user = service.register(register_draft("jreyes", "jo@example.com")).unwrap();

        // Disable the account directly in the store.
        store
            .set_user_enabled(user.id, false)
            .unwrap();

        assert!(service.login("jreyes", "hunter2hunter2").unwrap().is_none());
    }
}
