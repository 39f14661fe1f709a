//! Error types for the API layer.

/// Errors that can come out of a remote auth call.
///
/// The session store flattens all of these into its `error` string, but
/// the distinction matters for logging and for any caller that wants to
/// react to a specific failure mode.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered and said no. `message` is the server's own
    /// wording when the response body carried one.
    #[error("{message}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Human-readable reason, best-effort extracted from the body.
        message: String,
    },

    /// The request never completed (DNS, TLS, connection reset, timeout).
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the JSON we expected.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns the server-authored failure message, if this error
    /// carries one.
    ///
    /// Used by the session store's message extraction: a `Rejected`
    /// error's message is what the user should see verbatim; every
    /// other variant falls back to the error's `Display` output.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } if !message.is_empty() => {
                Some(message)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_displays_server_message() {
        let err = ApiError::Rejected {
            status: 401,
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.to_string(), "Invalid credentials");
        assert_eq!(err.user_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_transport_has_no_user_message() {
        let err = ApiError::Transport("connection refused".into());
        assert!(err.user_message().is_none());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_rejected_with_empty_message_has_no_user_message() {
        let err = ApiError::Rejected {
            status: 500,
            message: String::new(),
        };
        assert!(err.user_message().is_none());
    }
}
