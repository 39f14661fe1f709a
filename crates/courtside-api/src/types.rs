//! Wire types shared with the tournament platform's REST backend.
//!
//! Everything here crosses the network as JSON. Field names follow the
//! backend's camelCase convention; enum values follow its
//! SCREAMING_SNAKE_CASE convention.

use serde::{Deserialize, Serialize};

use std::fmt;

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a user account.
///
/// Newtype wrapper over the backend's opaque string id. Wrapping it keeps
/// a user id from being confused with any other string (email, token)
/// at compile time.
///
/// `#[serde(transparent)]` serializes this as the bare string, so a
/// `UserId("1".into())` becomes just `"1"` in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U-{}", self.0)
    }
}

/// The role a user account holds on the platform.
///
/// Roles gate what the backend lets an account do; the client only
/// carries them for display and routing decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Registers for and plays in tournaments.
    Player,
    /// Creates and runs tournaments and clubs.
    Organizer,
    /// Platform administration.
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Player => write!(f, "PLAYER"),
            Self::Organizer => write!(f, "ORGANIZER"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// The profile record the backend returns for an authenticated user.
///
/// `email_verified` rides along as plain data — the session layer does
/// not gate authentication on it; callers interpret it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend account id.
    pub id: UserId,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Login email.
    pub email: String,

    /// Account role.
    pub role: Role,

    /// Whether the account's email has been confirmed.
    #[serde(default)]
    pub email_verified: bool,
}

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Registration request body.
///
/// The backend creates the account and signs the new user in within the
/// same call, so a successful registration carries a [`User`] back just
/// like a login does.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// The `{success, data, message}` envelope every auth endpoint responds
/// with.
///
/// A resolved-but-unsuccessful response (`success: false`) is a distinct
/// outcome from a transport failure: the request completed, the server
/// just said no. `message` is the human-readable reason when the server
/// provides one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// An envelope carrying a successful payload. Test/mocking helper.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// An envelope reporting failure with a reason. Test/mocking helper.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Payload of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::Organizer).unwrap(),
            "\"ORGANIZER\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"PLAYER\"").unwrap(),
            Role::Player
        );
    }

    #[test]
    fn test_user_id_transparent_wire_format() {
        let id: UserId = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(id, UserId("1".into()));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1\"");
    }

    #[test]
    fn test_user_decodes_camel_case_fields() {
        let json = r#"{
            "id": "42",
            "name": "Alice Chen",
            "email": "alice@example.com",
            "role": "ORGANIZER",
            "emailVerified": true
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, UserId("42".into()));
        assert_eq!(user.name.as_deref(), Some("Alice Chen"));
        assert_eq!(user.role, Role::Organizer);
        assert!(user.email_verified);
    }

    #[test]
    fn test_user_missing_optional_fields_default() {
        // Some backend responses omit `name` and `emailVerified`.
        let json = r#"{
            "id": "7",
            "email": "bob@example.com",
            "role": "PLAYER"
        }"#;

        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.name.is_none());
        assert!(!user.email_verified);
    }

    #[test]
    fn test_api_response_decodes_success_envelope() {
        let json = r#"{
            "success": true,
            "data": {
                "user": {
                    "id": "1",
                    "email": "test@example.com",
                    "role": "ORGANIZER"
                }
            }
        }"#;

        let resp: ApiResponse<AuthPayload> =
            serde_json::from_str(json).unwrap();

        assert!(resp.success);
        let user = resp.data.unwrap().user;
        assert_eq!(user.role, Role::Organizer);
        assert!(resp.message.is_none());
    }

    #[test]
    fn test_api_response_decodes_failure_envelope() {
        let json = r#"{"success": false, "message": "Invalid credentials"}"#;

        let resp: ApiResponse<AuthPayload> =
            serde_json::from_str(json).unwrap();

        assert!(!resp.success);
        assert!(resp.data.is_none());
        assert_eq!(resp.message.as_deref(), Some("Invalid credentials"));
    }
}
