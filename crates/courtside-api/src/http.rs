//! `reqwest`-backed implementation of [`AuthApi`].
//!
//! The backend authenticates with JWT cookies (`access_token`,
//! `refresh_token`) set on the login/registration responses. Browsers get
//! those for free; here the client captures `Set-Cookie` headers into a
//! [`TokenStore`] and replays them as a `Cookie` header on every
//! subsequent request.

use std::sync::Arc;

use reqwest::header::{HeaderMap, COOKIE, SET_COOKIE};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    ApiError, ApiResponse, AuthApi, AuthPayload, Credentials,
    RegistrationForm, TokenKind, TokenStore, User,
};

/// An [`AuthApi`] that talks to the real backend over HTTP.
///
/// Cheap to share: clone the `Arc` it lives in, or clone the struct
/// itself (`reqwest::Client` is internally reference-counted).
pub struct HttpAuthApi<T: TokenStore> {
    base_url: String,
    client: reqwest::Client,
    tokens: Arc<T>,
}

impl<T: TokenStore> HttpAuthApi<T> {
    /// Creates a client against `base_url` (e.g.
    /// `https://api.example.com/api/v1`), storing captured bearer
    /// tokens in `tokens`.
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<T>,
    ) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(transport)?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds the `Cookie` header value from the stored tokens, or
    /// `None` when no token is stored (anonymous request).
    fn cookie_header(&self) -> Option<String> {
        let pairs: Vec<String> = TokenKind::all()
            .into_iter()
            .filter_map(|kind| {
                self.tokens
                    .get(kind)
                    .map(|v| format!("{}={v}", kind.cookie_name()))
            })
            .collect();
        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }

    /// Pulls any bearer-token cookies out of a response and persists
    /// them. Non-token cookies are ignored.
    fn capture_tokens(&self, headers: &HeaderMap) {
        for header in headers.get_all(SET_COOKIE) {
            let Ok(raw) = header.to_str() else { continue };
            let Some((name, value)) = parse_set_cookie(raw) else {
                continue;
            };
            for kind in TokenKind::all() {
                if kind.cookie_name() == name && !value.is_empty() {
                    self.tokens.set(kind, value);
                    tracing::debug!(cookie = name, "captured bearer token");
                }
            }
        }
    }

    /// Sends a request, captures tokens from the response, and decodes
    /// the body.
    ///
    /// A non-2xx status becomes [`ApiError::Rejected`], with the message
    /// lifted from the error envelope when the body carries one.
    async fn send<R: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<R, ApiError> {
        let req = match self.cookie_header() {
            Some(cookies) => req.header(COOKIE, cookies),
            None => req,
        };

        let resp = req.send().await.map_err(transport)?;
        let status = resp.status();
        self.capture_tokens(resp.headers());
        let bytes = resp.bytes().await.map_err(transport)?;

        if !status.is_success() {
            let message =
                serde_json::from_slice::<ApiResponse<serde_json::Value>>(
                    &bytes,
                )
                .ok()
                .and_then(|envelope| envelope.message)
                .unwrap_or_else(|| {
                    format!("request failed with status {status}")
                });
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        self.send(self.client.post(self.url(path)).json(body)).await
    }

    async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<R, ApiError> {
        self.send(self.client.get(self.url(path))).await
    }
}

impl<T: TokenStore> AuthApi for HttpAuthApi<T> {
    async fn login(
        &self,
        credentials: &Credentials,
    ) -> Result<ApiResponse<AuthPayload>, ApiError> {
        self.post("/auth/login", credentials).await
    }

    async fn register(
        &self,
        form: &RegistrationForm,
    ) -> Result<ApiResponse<AuthPayload>, ApiError> {
        self.post("/auth/register", form).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        // The logout envelope carries no payload we care about.
        let _: ApiResponse<serde_json::Value> =
            self.post("/auth/logout", &serde_json::json!({})).await?;
        Ok(())
    }

    async fn current_user(&self) -> Result<ApiResponse<User>, ApiError> {
        self.get("/auth/me").await
    }
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Extracts `(name, value)` from a `Set-Cookie` header, dropping
/// attributes (`Path`, `HttpOnly`, `Max-Age`, ...).
fn parse_set_cookie(raw: &str) -> Option<(&str, &str)> {
    let pair = raw.split(';').next()?;
    let (name, value) = pair.split_once('=')?;
    Some((name.trim(), value.trim()))
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryTokenStore;

    #[test]
    fn test_parse_set_cookie_strips_attributes() {
        let raw = "access_token=abc123; Path=/; HttpOnly; Max-Age=900";
        assert_eq!(parse_set_cookie(raw), Some(("access_token", "abc123")));
    }

    #[test]
    fn test_parse_set_cookie_plain_pair() {
        assert_eq!(parse_set_cookie("refresh_token=xyz"), Some(("refresh_token", "xyz")));
    }

    #[test]
    fn test_parse_set_cookie_rejects_garbage() {
        assert_eq!(parse_set_cookie("no-equals-sign"), None);
        assert_eq!(parse_set_cookie(""), None);
    }

    #[test]
    fn test_cookie_header_empty_store_is_none() {
        let api = HttpAuthApi::new(
            "http://localhost:8080/api/v1",
            Arc::new(MemoryTokenStore::new()),
        )
        .unwrap();
        assert!(api.cookie_header().is_none());
    }

    #[test]
    fn test_cookie_header_joins_stored_tokens() {
        let tokens = Arc::new(MemoryTokenStore::new());
        tokens.set(TokenKind::Access, "a1");
        tokens.set(TokenKind::Refresh, "r1");
        let api =
            HttpAuthApi::new("http://localhost:8080", Arc::clone(&tokens))
                .unwrap();

        assert_eq!(
            api.cookie_header().as_deref(),
            Some("access_token=a1; refresh_token=r1")
        );
    }

    #[test]
    fn test_new_trims_trailing_slash_from_base_url() {
        let api = HttpAuthApi::new(
            "http://localhost:8080/api/v1/",
            Arc::new(MemoryTokenStore::new()),
        )
        .unwrap();
        assert_eq!(api.url("/auth/me"), "http://localhost:8080/api/v1/auth/me");
    }

    #[test]
    fn test_capture_tokens_stores_known_cookies_only() {
        let tokens = Arc::new(MemoryTokenStore::new());
        let api =
            HttpAuthApi::new("http://localhost:8080", Arc::clone(&tokens))
                .unwrap();

        let mut headers = HeaderMap::new();
        headers.append(SET_COOKIE, "access_token=a1; HttpOnly".parse().unwrap());
        headers.append(SET_COOKIE, "session_hint=ignored".parse().unwrap());

        api.capture_tokens(&headers);

        assert_eq!(tokens.get(TokenKind::Access).as_deref(), Some("a1"));
        assert!(tokens.get(TokenKind::Refresh).is_none());
    }
}
