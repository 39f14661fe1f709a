//! Bearer-token storage seam.
//!
//! The backend issues two JWT cookies on login: a short-lived access
//! token and a longer-lived refresh token. Outside a browser there is no
//! cookie jar, so the client keeps them in a [`TokenStore`] and the HTTP
//! layer replays them on every request.
//!
//! The session store only ever calls [`TokenStore::clear_all`] — on
//! logout, both tokens must go, unconditionally.

use std::collections::HashMap;
use std::sync::Mutex;

/// Which of the two bearer tokens a call refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Short-lived token attached to every authenticated request.
    Access,
    /// Long-lived token used to mint fresh access tokens.
    Refresh,
}

impl TokenKind {
    /// The cookie name the backend uses for this token.
    pub fn cookie_name(self) -> &'static str {
        match self {
            Self::Access => "access_token",
            Self::Refresh => "refresh_token",
        }
    }

    /// Both kinds, for "do this to every token" call sites.
    pub fn all() -> [TokenKind; 2] {
        [Self::Access, Self::Refresh]
    }
}

/// Where bearer tokens live between requests.
///
/// Implementations must not fail loudly: token storage is fire-and-forget
/// from the caller's perspective (a logout that cannot delete a token
/// file still logs the user out locally). Implementations log their own
/// I/O problems.
pub trait TokenStore: Send + Sync + 'static {
    /// Returns the stored token of the given kind, if any.
    fn get(&self, kind: TokenKind) -> Option<String>;

    /// Stores (or replaces) a token.
    fn set(&self, kind: TokenKind, value: &str);

    /// Removes every stored token. Called on logout; must always leave
    /// the store empty.
    fn clear_all(&self);
}

/// Shared token stores: the HTTP layer and the session store typically
/// hold the same `Arc<FileTokenStore>`.
impl<T: TokenStore> TokenStore for std::sync::Arc<T> {
    fn get(&self, kind: TokenKind) -> Option<String> {
        (**self).get(kind)
    }

    fn set(&self, kind: TokenKind, value: &str) {
        (**self).set(kind, value)
    }

    fn clear_all(&self) {
        (**self).clear_all()
    }
}

// ---------------------------------------------------------------------------
// MemoryTokenStore
// ---------------------------------------------------------------------------

/// A [`TokenStore`] that keeps tokens in memory.
///
/// Good enough for tests and for short-lived processes that don't need
/// the session to survive a restart. For durable storage see the file
/// store in `courtside-store`.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<TokenKind, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .get(&kind)
            .cloned()
    }

    fn set(&self, kind: TokenKind, value: &str) {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .insert(kind, value.to_string());
    }

    fn clear_all(&self) {
        self.tokens
            .lock()
            .expect("token store lock poisoned")
            .clear();
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_none_when_empty() {
        let store = MemoryTokenStore::new();
        assert!(store.get(TokenKind::Access).is_none());
        assert!(store.get(TokenKind::Refresh).is_none());
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let store = MemoryTokenStore::new();

        store.set(TokenKind::Access, "jwt-a");
        store.set(TokenKind::Refresh, "jwt-r");

        assert_eq!(store.get(TokenKind::Access).as_deref(), Some("jwt-a"));
        assert_eq!(store.get(TokenKind::Refresh).as_deref(), Some("jwt-r"));
    }

    #[test]
    fn test_set_replaces_existing_token() {
        let store = MemoryTokenStore::new();
        store.set(TokenKind::Access, "old");

        store.set(TokenKind::Access, "new");

        assert_eq!(store.get(TokenKind::Access).as_deref(), Some("new"));
    }

    #[test]
    fn test_clear_all_removes_every_token() {
        let store = MemoryTokenStore::new();
        store.set(TokenKind::Access, "jwt-a");
        store.set(TokenKind::Refresh, "jwt-r");

        store.clear_all();

        for kind in TokenKind::all() {
            assert!(store.get(kind).is_none());
        }
    }

    #[test]
    fn test_clear_all_on_empty_store_is_a_no_op() {
        let store = MemoryTokenStore::new();
        store.clear_all();
        assert!(store.get(TokenKind::Access).is_none());
    }

    #[test]
    fn test_cookie_names_match_backend() {
        assert_eq!(TokenKind::Access.cookie_name(), "access_token");
        assert_eq!(TokenKind::Refresh.cookie_name(), "refresh_token");
    }
}
