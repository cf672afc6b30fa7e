//! Explicit session values handed out by the authentication service
//!
//! A session is a plain value the caller holds and passes where needed;
//! there is no process-wide current user, so multiple logical sessions can
//! coexist. Being logged in *is* holding a `Session`.

use chrono::{DateTime, Utc};
use docket_domain::{Role, User};

/// An authenticated session
///
/// Obtained from a successful login; dropped (or passed to
/// `AuthService::logout`) to end it.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
    started_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(user: User) -> Self {
        Self {
            user,
            started_at: Utc::now(),
        }
    }

    /// The authenticated user
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Login name of the authenticated user
    pub fn username(&self) -> &str {
        &self.user.username
    }

    /// Whether the authenticated user holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.user.role == role
    }

    /// When the session began
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::UserId;

    fn sample_user(role: Role) -> User {
        let now = Utc::now();
        User {
            id: UserId::new(1),
            username: "jreyes".to_string(),
            password_hash: "$fake$hash".to_string(),
            email: "jo@example.com".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Reyes".to_string(),
            role,
            enabled: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_has_role_matches_exactly() {
        let session = Session::new(sample_user(Role::Lawyer));
        assert!(session.has_role(Role::Lawyer));
        assert!(!session.has_role(Role::Admin));
    }

    #[test]
    fn test_session_exposes_user() {
        let session = Session::new(sample_user(Role::Viewer));
        assert_eq!(session.username(), "jreyes");
        assert_eq!(session.user().email, "jo@example.com");
    }
}
