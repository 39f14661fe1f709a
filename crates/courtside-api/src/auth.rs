//! The remote-call seam between the session store and the backend.
//!
//! The session store never holds an HTTP client. It holds an [`AuthApi`]
//! implementation and calls these four operations through the trait.
//! This lets us:
//! - Use [`HttpAuthApi`](crate::HttpAuthApi) in production
//! - Use a scripted mock in tests (resolve, reject, or answer
//!   `success: false` on demand)
//!
//! All without changing any session-layer code.

use crate::{
    ApiError, ApiResponse, AuthPayload, Credentials, RegistrationForm, User,
};

/// The four remote operations the session layer performs.
///
/// # Trait bounds
///
/// - `Send + Sync` → the API client is shared across async tasks.
/// - `'static` → it owns its data and lives as long as the store.
///
/// # Contract
///
/// Each method either resolves with the server's envelope or fails with
/// an [`ApiError`]. A resolved envelope with `success: false` is NOT an
/// `Err` — the request worked, the server declined. Callers must check
/// both layers.
pub trait AuthApi: Send + Sync + 'static {
    /// Exchanges credentials for an authenticated session.
    ///
    /// On success the lower layer has already captured the bearer-token
    /// cookies; the envelope carries the signed-in [`User`].
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<ApiResponse<AuthPayload>, ApiError>> + Send;

    /// Creates an account and signs it in within the same call.
    fn register(
        &self,
        form: &RegistrationForm,
    ) -> impl std::future::Future<Output = Result<ApiResponse<AuthPayload>, ApiError>> + Send;

    /// Invalidates the session server-side.
    ///
    /// Callers are expected to clear local state whether or not this
    /// resolves — a dead server must not keep a user signed in.
    fn logout(
        &self,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send;

    /// Fetches the profile the current bearer token resolves to.
    ///
    /// Used to re-validate a rehydrated session after startup.
    fn current_user(
        &self,
    ) -> impl std::future::Future<Output = Result<ApiResponse<User>, ApiError>> + Send;
}

/// An `Arc`'d client is itself a client, so one HTTP client can serve
/// the session store and any other caller at the same time.
impl<A: AuthApi> AuthApi for std::sync::Arc<A> {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<ApiResponse<AuthPayload>, ApiError>> + Send
    {
        (**self).login(credentials)
    }

    fn register(
        &self,
        form: &RegistrationForm,
    ) -> impl std::future::Future<Output = Result<ApiResponse<AuthPayload>, ApiError>> + Send
    {
        (**self).register(form)
    }

    fn logout(
        &self,
    ) -> impl std::future::Future<Output = Result<(), ApiError>> + Send {
        (**self).logout()
    }

    fn current_user(
        &self,
    ) -> impl std::future::Future<Output = Result<ApiResponse<User>, ApiError>> + Send
    {
        (**self).current_user()
    }
}
