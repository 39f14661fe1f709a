//! The session store: the single choke point for identity state.
//!
//! Five operations mutate the session (`login`, `register`, `logout`,
//! `fetch_current_user`, `set_user`); everything else only reads it.
//! All remote failures are absorbed here — no operation returns `Err`
//! past the store boundary. Callers get a `bool` (or nothing) and read
//! [`Session::error`] for display.
//!
//! # Concurrency note
//!
//! The operations take `&mut self`, so a single owner cannot overlap
//! two of them — the borrow checker enforces the one-in-flight rule.
//! Callers that share a store behind a lock serialize operations at the
//! lock instead; if they interleave awaits, completions apply in
//! call-completion order (last writer wins). The store makes no
//! ordering promise beyond that.

use courtside_api::{
    ApiError, ApiResponse, AuthApi, AuthPayload, Credentials,
    RegistrationForm, TokenStore, User,
};
use courtside_store::SnapshotStore;
use tokio::sync::watch;

use crate::{Session, GENERIC_ERROR};

/// The dependency-injected session state container.
///
/// One instance per logical client (and per test). Collaborators come
/// in through the constructor, never from globals:
///
/// - `A` — the remote auth API ([`AuthApi`])
/// - `T` — bearer-token storage ([`TokenStore`]), only touched on logout
/// - `S` — durable snapshot storage ([`SnapshotStore`])
pub struct SessionStore<A, T, S>
where
    A: AuthApi,
    T: TokenStore,
    S: SnapshotStore,
{
    api: A,
    tokens: T,
    snapshots: S,
    session: Session,
    publisher: watch::Sender<Session>,
}

impl<A, T, S> SessionStore<A, T, S>
where
    A: AuthApi,
    T: TokenStore,
    S: SnapshotStore,
{
    /// Creates a store in the signed-out state.
    ///
    /// Call [`rehydrate`](Self::rehydrate) afterwards to restore a
    /// persisted session from a previous run.
    pub fn new(api: A, tokens: T, snapshots: S) -> Self {
        let session = Session::empty();
        let (publisher, _) = watch::channel(session.clone());
        Self {
            api,
            tokens,
            snapshots,
            session,
            publisher,
        }
    }

    /// The current session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// A receiver that observes every settled and in-flight state the
    /// store publishes. UI-like consumers watch this instead of polling.
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.publisher.subscribe()
    }

    /// Restores the durable subset from the snapshot store.
    ///
    /// `is_authenticated` is re-derived from the restored `user` rather
    /// than trusted from disk; `is_loading` and `error` always come
    /// back as `false`/`None`. An absent or unreadable snapshot leaves
    /// the store signed out; load errors are logged, never surfaced.
    pub fn rehydrate(&mut self) {
        match self.snapshots.load() {
            Ok(Some(snapshot)) => {
                self.mutate(|s| {
                    s.user = snapshot.user;
                    s.is_loading = false;
                    s.error = None;
                });
                tracing::info!(
                    authenticated = self.session.is_authenticated,
                    "session rehydrated"
                );
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, "failed to load session snapshot");
            }
        }
    }

    /// Attempts remote authentication with the given credentials.
    ///
    /// On success the returned user becomes the session user and `true`
    /// comes back. On any failure the user stays absent, the failure
    /// message lands in [`Session::error`], and `false` comes back.
    /// `is_loading` is cleared on every path.
    pub async fn login(&mut self, credentials: &Credentials) -> bool {
        self.begin_attempt();
        let result = self.api.login(credentials).await;
        self.settle_attempt("login", result)
    }

    /// Creates an account and signs it in within the same call.
    ///
    /// Same contract as [`login`](Self::login). There is no separate
    /// verification gate here — `email_verified` rides on the user
    /// record for callers to interpret.
    pub async fn register(&mut self, form: &RegistrationForm) -> bool {
        self.begin_attempt();
        let result = self.api.register(form).await;
        self.settle_attempt("register", result)
    }

    /// Ends the session, unconditionally.
    ///
    /// The remote logout call is best-effort: a failure is logged and
    /// swallowed, because from the user's perspective logout must
    /// always succeed locally. Bearer tokens and the persisted
    /// snapshot are cleared either way.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            tracing::warn!(
                error = %e,
                "remote logout failed; clearing local session anyway"
            );
        }

        self.tokens.clear_all();
        self.clear_session();
        if let Err(e) = self.snapshots.clear() {
            tracing::warn!(error = %e, "failed to clear session snapshot");
        }
        tracing::info!("signed out");
    }

    /// Re-validates the session against the backend (e.g. after a
    /// restart, before the rehydrated snapshot is trusted).
    ///
    /// On success the fresh user record replaces the stored one. On any
    /// failure — network error or unsuccessful response alike — the
    /// session is cleared, equivalent to an implicit logout. The store
    /// deliberately does not distinguish a transient network hiccup
    /// from an invalid session at this layer; the log line is the only
    /// place the difference survives.
    pub async fn fetch_current_user(&mut self) {
        self.mutate(|s| s.is_loading = true);

        match self.api.current_user().await {
            Ok(ApiResponse {
                success: true,
                data: Some(user),
                ..
            }) => {
                tracing::debug!(user = %user.id, "session re-validated");
                self.mutate(|s| {
                    s.user = Some(user);
                    s.error = None;
                    s.is_loading = false;
                });
                self.persist();
            }
            Ok(_) => {
                tracing::debug!(
                    "current-user returned unsuccessful; clearing session"
                );
                self.expire_session();
            }
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    "session re-validation failed; clearing session"
                );
                self.expire_session();
            }
        }
    }

    /// Directly replaces the session user, re-deriving
    /// `is_authenticated` as a side effect.
    ///
    /// Used by external flows such as silent session restoration.
    pub fn set_user(&mut self, user: Option<User>) {
        self.mutate(|s| {
            s.user = user;
        });
        self.persist();
    }

    // -- Internals --------------------------------------------------------

    /// Marks an auth attempt as in flight and drops any stale error.
    fn begin_attempt(&mut self) {
        self.mutate(|s| {
            s.is_loading = true;
            s.error = None;
        });
    }

    /// Settles a login/register attempt. Every branch clears
    /// `is_loading`, so the flag cannot stay stuck on any path.
    fn settle_attempt(
        &mut self,
        operation: &'static str,
        result: Result<ApiResponse<AuthPayload>, ApiError>,
    ) -> bool {
        match result {
            Ok(ApiResponse {
                success: true,
                data: Some(payload),
                ..
            }) => {
                tracing::info!(
                    operation,
                    user = %payload.user.id,
                    "signed in"
                );
                self.mutate(|s| {
                    s.user = Some(payload.user);
                    s.error = None;
                    s.is_loading = false;
                });
                self.persist();
                true
            }
            Ok(envelope) => {
                // Resolved but unsuccessful: the server said no.
                let message = envelope
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| GENERIC_ERROR.to_string());
                self.fail_attempt(operation, message);
                false
            }
            Err(e) => {
                let message = extract_message(&e);
                self.fail_attempt(operation, message);
                false
            }
        }
    }

    fn fail_attempt(&mut self, operation: &'static str, message: String) {
        tracing::info!(operation, message = %message, "auth attempt rejected");
        self.mutate(|s| {
            s.error = Some(message);
            s.is_loading = false;
        });
    }

    /// Clears in-memory session state only.
    fn clear_session(&mut self) {
        self.mutate(|s| {
            s.user = None;
            s.error = None;
            s.is_loading = false;
        });
    }

    /// Implicit logout after a failed re-validation: in-memory state
    /// and the persisted snapshot are cleared; bearer tokens are left
    /// for the transport layer to retry or refresh with.
    fn expire_session(&mut self) {
        self.clear_session();
        if let Err(e) = self.snapshots.clear() {
            tracing::warn!(error = %e, "failed to clear session snapshot");
        }
    }

    /// The single mutation path. Applies the change, re-derives
    /// `is_authenticated` from `user`, and publishes the new state.
    fn mutate(&mut self, change: impl FnOnce(&mut Session)) {
        change(&mut self.session);
        self.session.is_authenticated = self.session.user.is_some();
        self.publisher.send_replace(self.session.clone());
    }

    /// Fire-and-forget persistence of the durable subset. A failed save
    /// never fails the operation that triggered it.
    fn persist(&self) {
        if let Err(e) = self.snapshots.save(&self.session.snapshot()) {
            tracing::warn!(error = %e, "failed to save session snapshot");
        }
    }
}

/// Best-effort extraction of a user-facing message from an API error:
/// the server's own wording when present, the error's display output
/// otherwise, and a fixed fallback if even that is empty.
fn extract_message(error: &ApiError) -> String {
    if let Some(message) = error.user_message() {
        return message.to_string();
    }
    let message = error.to_string();
    if message.is_empty() {
        GENERIC_ERROR.to_string()
    } else {
        message
    }
}

// =========================================================================
// Tests
// =========================================================================
