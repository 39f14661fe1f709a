//! `SessionBuilder`: wires the default implementations together.
//!
//! This is the entry point for applications that just want a working
//! session: HTTP against a base URL, tokens and the session snapshot on
//! disk under a data directory. Tests and embedders with other needs
//! construct [`SessionStore`] directly with their own collaborators.

use std::path::PathBuf;
use std::sync::Arc;

use courtside_api::HttpAuthApi;
use courtside_session::SessionStore;
use courtside_store::{FileTokenStore, JsonSnapshotStore};

use crate::CourtsideError;

/// The fully wired store type the builder produces.
pub type DefaultSessionStore = SessionStore<
    HttpAuthApi<FileTokenStore>,
    Arc<FileTokenStore>,
    JsonSnapshotStore,
>;

/// Builder for the default session wiring.
///
/// # Example
///
/// ```rust,no_run
/// use courtside::SessionBuilder;
///
/// # async fn run() -> Result<(), courtside::CourtsideError> {
/// let mut session = SessionBuilder::new()
///     .base_url("https://api.courtside.example/api/v1")
///     .data_dir("/home/me/.config/courtside")
///     .build()?;
///
/// // Re-validate whatever the snapshot restored.
/// session.fetch_current_user().await;
/// # Ok(())
/// # }
/// ```
pub struct SessionBuilder {
    base_url: String,
    data_dir: PathBuf,
}

impl SessionBuilder {
    /// Creates a builder with development defaults.
    pub fn new() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api/v1".to_string(),
            data_dir: PathBuf::from(".courtside"),
        }
    }

    /// Sets the backend base URL (up to and including the API prefix).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the directory that holds the session snapshot and the
    /// bearer-token files. Created lazily on first write.
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Builds the store and rehydrates it from the data directory.
    ///
    /// The token store is shared between the HTTP layer (which fills it
    /// from `Set-Cookie` and replays it) and the session store (which
    /// clears it on logout).
    pub fn build(self) -> Result<DefaultSessionStore, CourtsideError> {
        let tokens =
            Arc::new(FileTokenStore::new(self.data_dir.join("tokens")));
        let api = HttpAuthApi::new(self.base_url, Arc::clone(&tokens))?;
        let snapshots = JsonSnapshotStore::new(self.data_dir);

        let mut store = SessionStore::new(api, tokens, snapshots);
        store.rehydrate();
        Ok(store)
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
