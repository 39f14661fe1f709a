//! The persisted session snapshot and the store seam it travels through.
//!
//! The persisted subset is a contract: exactly `{user, isAuthenticated}`
//! under the fixed `auth-storage` key. [`SessionSnapshot`] IS that
//! contract — there is no field for `is_loading` or `error`, so no
//! implementation can accidentally persist them.

use std::sync::Mutex;

use courtside_api::User;
use serde::{Deserialize, Serialize};

use crate::StoreError;

/// The fixed key the session snapshot is stored under.
///
/// File-backed stores use it as the file stem (`auth-storage.json`).
pub const STORAGE_KEY: &str = "auth-storage";

/// The durable subset of the in-memory session.
///
/// `is_authenticated` is derived from `user` everywhere in the session
/// layer, but it is persisted alongside it to keep the on-disk shape
/// stable for other readers. Rehydration re-derives the flag rather than
/// trusting the stored one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub user: Option<User>,
    pub is_authenticated: bool,
}

impl SessionSnapshot {
    /// Snapshot of an authenticated session.
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
        }
    }

    /// Snapshot of a signed-out session.
    pub fn anonymous() -> Self {
        Self {
            user: None,
            is_authenticated: false,
        }
    }
}

/// Where the session snapshot lives between runs.
///
/// The session store calls `save` at the end of every state transition
/// that changes the durable subset, `clear` on logout, and `load` once
/// at rehydration. Saves are synchronous and not transactional with the
/// in-memory update; a crash in between leaves the snapshot stale until
/// the next successful operation.
pub trait SnapshotStore: Send + Sync + 'static {
    /// Persists the snapshot, replacing any previous one.
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError>;

    /// Loads the previously persisted snapshot, or `None` if there
    /// isn't one.
    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError>;

    /// Removes the persisted snapshot. A no-op when nothing is stored.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Shared snapshot stores, mirroring the `Arc` passthrough on the other
/// collaborator seams.
impl<S: SnapshotStore> SnapshotStore for std::sync::Arc<S> {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        (**self).save(snapshot)
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        (**self).load()
    }

    fn clear(&self) -> Result<(), StoreError> {
        (**self).clear()
    }
}

// ---------------------------------------------------------------------------
// MemorySnapshotStore
// ---------------------------------------------------------------------------

/// A [`SnapshotStore`] that keeps the snapshot in memory.
///
/// One instance per test keeps persistence assertions isolated.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshot: Mutex<Option<SessionSnapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a snapshot, as if a previous run had saved
    /// it. Test helper.
    pub fn seeded(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &SessionSnapshot) -> Result<(), StoreError> {
        *self.snapshot.lock().expect("snapshot lock poisoned") =
            Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<SessionSnapshot>, StoreError> {
        Ok(self.snapshot.lock().expect("snapshot lock poisoned").clone())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.snapshot.lock().expect("snapshot lock poisoned") = None;
        Ok(())
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use courtside_api::{Role, UserId};

    fn organizer() -> User {
        User {
            id: UserId("1".into()),
            name: Some("Alice Chen".into()),
            email: "alice@example.com".into(),
            role: Role::Organizer,
            email_verified: true,
        }
    }

    #[test]
    fn test_snapshot_serializes_exact_persisted_subset() {
        let snapshot = SessionSnapshot::authenticated(organizer());

        let value = serde_json::to_value(&snapshot).unwrap();
        let obj = value.as_object().unwrap();

        // Exactly the two persisted fields, nothing transient.
        assert_eq!(obj.len(), 2);
        assert!(obj.contains_key("user"));
        assert_eq!(obj["isAuthenticated"], true);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = SessionSnapshot::authenticated(organizer());

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SessionSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_anonymous_snapshot_has_no_user() {
        let snapshot = SessionSnapshot::anonymous();
        assert!(snapshot.user.is_none());
        assert!(!snapshot.is_authenticated);
    }

    #[test]
    fn test_memory_store_load_empty_returns_none() {
        let store = MemorySnapshotStore::new();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_memory_store_save_then_load_round_trips() {
        let store = MemorySnapshotStore::new();
        let snapshot = SessionSnapshot::authenticated(organizer());

        store.save(&snapshot).unwrap();

        assert_eq!(store.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_memory_store_clear_removes_snapshot() {
        let store =
            MemorySnapshotStore::seeded(SessionSnapshot::anonymous());

        store.clear().unwrap();

        assert!(store.load().unwrap().is_none());
    }
}
