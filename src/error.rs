//! Error types
//!
//! Every fallible operation in the crate returns [`Error`]. The first four
//! variants are the library's own taxonomy; the rest wrap failures of the
//! transport, JSON decoding, and config file loading.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Required configuration (usually credentials) is missing or malformed
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The remote API answered with an unexpected status, or with the
    /// expected status but a body that is not a usable authorization
    #[error("GitHub API {reason} (status {status}, expected {expected}): {body}")]
    Remote {
        status: u16,
        expected: u16,
        reason: String,
        body: String,
    },

    /// Operation called on an object in the wrong lifecycle state
    #[error("invalid state: {0}")]
    State(String),

    /// Caller-supplied input violates a contract
    #[error("validation error: {0}")]
    Validation(String),

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    pub fn is_state(&self) -> bool {
        matches!(self, Error::State(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Status code of a [`Error::Remote`] failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Response body of a [`Error::Remote`] failure
    pub fn body(&self) -> Option<&str> {
        match self {
            Error::Remote { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_exposes_status_and_body() {
        let err = Error::Remote {
            status: 401,
            expected: 200,
            reason: "returned an unexpected status".to_string(),
            body: r#"{"message":"Bad credentials"}"#.to_string(),
        };
        assert!(err.is_remote());
        assert_eq!(err.status(), Some(401));
        assert_eq!(err.body(), Some(r#"{"message":"Bad credentials"}"#));
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("expected 200"));
        assert!(err.to_string().contains("unexpected status"));
    }

    #[test]
    fn test_predicates_are_exclusive() {
        let err = Error::State("not saved".to_string());
        assert!(err.is_state());
        assert!(!err.is_remote());
        assert!(!err.is_validation());
        assert!(!err.is_configuration());
        assert_eq!(err.status(), None);
    }
}
