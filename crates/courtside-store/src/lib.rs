//! Durable client-side storage for Courtside.
//!
//! Two things survive a process restart:
//!
//! 1. **The session snapshot** — the `{user, isAuthenticated}` subset of
//!    the in-memory session, written through the [`SnapshotStore`] trait.
//!    Transient fields (`is_loading`, `error`) are not part of the
//!    snapshot type at all, so they cannot leak to disk.
//! 2. **Bearer tokens** — via [`FileTokenStore`], a file-per-token
//!    implementation of the `TokenStore` seam from `courtside-api`.
//!
//! Writes are fire-and-forget from the session layer's point of view: a
//! failed save is logged and the in-memory state stays authoritative
//! until the next successful write.

mod error;
mod json_file;
mod snapshot;
mod token_file;

pub use error::StoreError;
pub use json_file::JsonSnapshotStore;
pub use snapshot::{MemorySnapshotStore, SessionSnapshot, SnapshotStore, STORAGE_KEY};
pub use token_file::FileTokenStore;
