//! Failures surfaced to callers of [`crate::ApiClient`].

use orderdesk_auth::AuthError;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A credential source or the session's storage failed.
    #[error("session storage error: {0}")]
    Auth(#[from] AuthError),

    #[error("credential cannot be sent in an Authorization header")]
    InvalidCredential,

    #[error("failed to encode request body: {0}")]
    Encode(String),

    /// No response was received.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A response was received with a non-success status.
    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Status code of the response, when one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_api_errors_carry_a_status() {
        let api = ClientError::Api {
            status: StatusCode::UNAUTHORIZED,
            body: "{}".to_string(),
        };
        assert_eq!(api.status(), Some(StatusCode::UNAUTHORIZED));
        assert!(api.is_unauthorized());

        let auth = ClientError::Auth(AuthError::unavailable("offline"));
        assert_eq!(auth.status(), None);
        assert!(!auth.is_unauthorized());
        assert!(!ClientError::InvalidCredential.is_unauthorized());
    }

    #[test]
    fn other_statuses_are_not_unauthorized() {
        let err = ClientError::Api {
            status: StatusCode::FORBIDDEN,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "API error (403 Forbidden): ");
    }
}
