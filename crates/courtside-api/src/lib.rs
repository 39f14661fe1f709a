//! Remote auth API layer for Courtside.
//!
//! This crate is the seam between the session store and the tournament
//! platform's REST backend. It defines:
//!
//! 1. **Wire types** — the user record, credentials, and the
//!    `{success, data, message}` response envelope ([`ApiResponse`])
//! 2. **The [`AuthApi`] trait** — the four remote operations the session
//!    store is allowed to perform (login, register, logout, current user)
//! 3. **The [`TokenStore`] trait** — where bearer-token cookies live
//!    between requests
//! 4. **[`HttpAuthApi`]** — a `reqwest`-backed implementation of
//!    [`AuthApi`] (behind the default-on `http` feature)
//!
//! # How it fits in the stack
//!
//! ```text
//! Session Layer (above)  ← calls AuthApi, never reqwest directly
//!     ↕
//! API Layer (this crate) ← speaks the REST wire format, manages tokens
//!     ↕
//! Remote backend (below) ← /auth/login, /auth/register, /auth/logout, /auth/me
//! ```

mod auth;
mod error;
#[cfg(feature = "http")]
mod http;
mod tokens;
mod types;

pub use auth::AuthApi;
pub use error::ApiError;
#[cfg(feature = "http")]
pub use http::HttpAuthApi;
pub use tokens::{MemoryTokenStore, TokenKind, TokenStore};
pub use types::{
    ApiResponse, AuthPayload, Credentials, RegistrationForm, Role, User,
    UserId,
};
