//! Authenticated-session state for Courtside.
//!
//! This crate owns the client's answer to "who is signed in right now?".
//! Everything that changes that answer — login, registration, logout,
//! re-validation after a restart — goes through the [`SessionStore`], so
//! UI-like consumers never talk to the API layer directly for identity.
//!
//! # How it fits in the stack
//!
//! ```text
//! UI / callers (above)   ← read Session, call the five operations
//!     ↕
//! Session Layer (this crate) ← the single choke point for identity state
//!     ↕
//! API + Storage (below)  ← AuthApi, TokenStore, SnapshotStore seams
//! ```
//!
//! # State machine
//!
//! ```text
//!   Unauthenticated ──(login ok | register ok | fetch ok)──→ Authenticated
//!        ↑                                                        │
//!        └──────────(logout | fetch_current_user failure)─────────┘
//! ```
//!
//! `is_loading` is orthogonal to the two states: true only while a
//! `login`, `register`, or `fetch_current_user` call is in flight.

mod session;
mod store;

pub use session::{Session, GENERIC_ERROR};
pub use store::SessionStore;
