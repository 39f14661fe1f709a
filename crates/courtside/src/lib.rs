//! # Courtside
//!
//! Client-side session layer for the Courtside tournament platform.
//!
//! Courtside holds the authenticated session in one dependency-injected
//! state container and mediates every identity operation (login,
//! registration, logout, re-validation) through it, so application code
//! never talks to the auth API directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use courtside::prelude::*;
//!
//! # async fn run() -> Result<(), courtside::CourtsideError> {
//! let mut session = SessionBuilder::new()
//!     .base_url("https://api.courtside.example/api/v1")
//!     .data_dir("/home/me/.config/courtside")
//!     .build()?;
//!
//! if session
//!     .login(&Credentials::new("me@example.com", "secret"))
//!     .await
//! {
//!     println!("signed in as {}", session.session().user.as_ref().unwrap().email);
//! } else {
//!     eprintln!("{}", session.session().error.as_deref().unwrap());
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod error;

pub use builder::{DefaultSessionStore, SessionBuilder};
pub use error::CourtsideError;

/// The names most applications need.
pub mod prelude {
    pub use courtside_api::{
        AuthApi, Credentials, RegistrationForm, Role, TokenStore, User,
        UserId,
    };
    pub use courtside_session::{Session, SessionStore};
    pub use courtside_store::{SessionSnapshot, SnapshotStore};

    pub use crate::{CourtsideError, DefaultSessionStore, SessionBuilder};
}
