//! The in-memory session record.

use courtside_api::User;
use courtside_store::SessionSnapshot;

/// Shown when a failed operation carries no usable message of its own.
pub const GENERIC_ERROR: &str = "Something went wrong. Please try again.";

/// The client-held record of who is signed in.
///
/// Invariant: `is_authenticated` is always exactly `user.is_some()`.
/// The store's single mutation path re-derives the flag after every
/// change, so no caller can set one without the other.
///
/// `is_loading` and `error` are transient — they describe the most
/// recent operation, never survive a restart, and are not part of the
/// persisted [`SessionSnapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The signed-in user's profile, or `None` when unauthenticated.
    pub user: Option<User>,

    /// Derived: `user.is_some()`.
    pub is_authenticated: bool,

    /// True while a login, registration, or re-validation is in flight.
    pub is_loading: bool,

    /// The last operation's failure message, for display. Cleared when
    /// an operation starts and on success.
    pub error: Option<String>,
}

impl Session {
    /// The state every store starts in: signed out, idle, no error.
    pub fn empty() -> Self {
        Self {
            user: None,
            is_authenticated: false,
            is_loading: false,
            error: None,
        }
    }

    /// The durable subset of this session.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_api::{Role, UserId};

    fn player() -> User {
        User {
            id: UserId("9".into()),
            name: None,
            email: "p@example.com".into(),
            role: Role::Player,
            email_verified: false,
        }
    }

    #[test]
    fn test_empty_session_is_fully_cleared() {
        let session = Session::empty();
        assert!(session.user.is_none());
        assert!(!session.is_authenticated);
        assert!(!session.is_loading);
        assert!(session.error.is_none());
    }

    #[test]
    fn test_snapshot_carries_only_durable_fields() {
        let session = Session {
            user: Some(player()),
            is_authenticated: true,
            is_loading: true,
            error: Some("stale".into()),
        };

        let snapshot = session.snapshot();

        assert_eq!(snapshot.user, Some(player()));
        assert!(snapshot.is_authenticated);
        // Nothing else exists on the snapshot type to leak.
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
