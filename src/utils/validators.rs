//! Input validation utilities
//!
//! Centralized checks for request paths, API base URLs, bearer tokens and
//! authorization records decoded from the API.

use crate::Error;
use crate::github::types::AuthorizationRecord;
use reqwest::Url;
use reqwest::header::HeaderValue;

/// Enumeration of possible validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Request path is empty
    EmptyPath,
    /// Request path is not relative to the API base
    NotRelativePath(String),
    /// API base URL is not an absolute http(s) URL
    InvalidApiUrl(String),
    /// Bearer token is empty
    EmptyToken,
    /// Bearer token contains characters not allowed in a header
    InvalidToken,
    /// Authorization record has no usable id
    MissingAuthorizationId,
    /// Authorization record has no resource URL
    MissingAuthorizationUrl,
    /// Authorization record URL is not absolute
    InvalidAuthorizationUrl(String),
    /// Freshly created authorization record carries no token
    MissingAuthorizationToken,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyPath => write!(f, "Request path cannot be empty"),
            ValidationError::NotRelativePath(path) => {
                write!(f, "Request path must start with '/': '{}'", path)
            }
            ValidationError::InvalidApiUrl(url) => {
                write!(f, "API URL must be an absolute http(s) URL: '{}'", url)
            }
            ValidationError::EmptyToken => write!(f, "Bearer token cannot be empty"),
            ValidationError::InvalidToken => {
                write!(f, "Bearer token contains characters not allowed in a header")
            }
            ValidationError::MissingAuthorizationId => {
                write!(f, "Authorization record is missing a positive id")
            }
            ValidationError::MissingAuthorizationUrl => {
                write!(f, "Authorization record is missing its url")
            }
            ValidationError::InvalidAuthorizationUrl(url) => {
                write!(f, "Authorization record has invalid url: '{}'", url)
            }
            ValidationError::MissingAuthorizationToken => {
                write!(f, "Created authorization record is missing its token")
            }
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::Validation(error.to_string())
    }
}

/// A request path must be relative to the API base, i.e. start with `/`
pub fn validate_api_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if !path.starts_with('/') {
        return Err(ValidationError::NotRelativePath(path.to_string()));
    }
    Ok(())
}

pub fn validate_api_url(url: &str) -> Result<(), ValidationError> {
    if is_absolute_http_url(url) {
        Ok(())
    } else {
        Err(ValidationError::InvalidApiUrl(url.to_string()))
    }
}

pub fn validate_token(token: &str) -> Result<(), ValidationError> {
    if token.is_empty() {
        return Err(ValidationError::EmptyToken);
    }
    HeaderValue::from_str(token).map_err(|_| ValidationError::InvalidToken)?;
    Ok(())
}

/// Check a decoded record describes a saved authorization
pub fn validate_record(record: &AuthorizationRecord) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !matches!(record.id, Some(id) if id > 0) {
        errors.push(ValidationError::MissingAuthorizationId);
    }

    match record.url.as_deref() {
        None | Some("") => errors.push(ValidationError::MissingAuthorizationUrl),
        Some(url) if !is_absolute_http_url(url) => {
            errors.push(ValidationError::InvalidAuthorizationUrl(url.to_string()))
        }
        Some(_) => {}
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Check a record returned by a create call: saved, and carrying the token
///
/// GitHub reveals the token only on creation, so unlike fetched or updated
/// records a created one without a token is unusable.
pub fn validate_created_record(record: &AuthorizationRecord) -> Result<(), Vec<ValidationError>> {
    let mut errors = validate_record(record).err().unwrap_or_default();

    if record.token.as_deref().is_none_or(str::is_empty) {
        errors.push(ValidationError::MissingAuthorizationToken);
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn is_absolute_http_url(url: &str) -> bool {
    matches!(Url::parse(url), Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host())
}

/// Join multiple validation errors into one message
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_api_path_accepts_relative_paths() {
        assert!(validate_api_path("/user").is_ok());
        assert!(validate_api_path("/user/repos?per_page=5").is_ok());
        assert!(validate_api_path("/").is_ok());
    }

    #[test]
    fn test_validate_api_path_rejects_everything_else() {
        for path in [
            "https://example.com/user",
            "http://api.github.com/user",
            "user",
            "user/repos",
            " /user",
        ] {
            assert_eq!(
                validate_api_path(path),
                Err(ValidationError::NotRelativePath(path.to_string())),
                "{} should be rejected",
                path
            );
        }
        assert_eq!(validate_api_path(""), Err(ValidationError::EmptyPath));
    }

    #[test]
    fn test_validate_api_url() {
        assert!(validate_api_url("https://api.github.com").is_ok());
        assert!(validate_api_url("http://127.0.0.1:8080").is_ok());
        assert!(validate_api_url("api.github.com").is_err());
        assert!(validate_api_url("ftp://api.github.com").is_err());
        assert!(validate_api_url("").is_err());
    }

    #[test]
    fn test_validate_token() {
        assert!(validate_token("ghu_abc123").is_ok());
        assert_eq!(validate_token(""), Err(ValidationError::EmptyToken));
        assert_eq!(validate_token("bad\ntoken"), Err(ValidationError::InvalidToken));
    }

    #[test]
    fn test_validate_record_complete() {
        let record = AuthorizationRecord {
            id: Some(1),
            url: Some("https://api.github.com/authorizations/1".to_string()),
            ..Default::default()
        };
        assert!(validate_record(&record).is_ok());
    }

    #[test]
    fn test_validate_record_collects_all_errors() {
        let errors = validate_record(&AuthorizationRecord::default()).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingAuthorizationId,
                ValidationError::MissingAuthorizationUrl
            ]
        );

        let record = AuthorizationRecord {
            id: Some(0),
            url: Some("/authorizations/0".to_string()),
            ..Default::default()
        };
        let errors = validate_record(&record).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(join_errors(&errors).contains("invalid url"));
    }

    #[test]
    fn test_validate_created_record_requires_token() {
        let mut record = AuthorizationRecord {
            id: Some(42),
            url: Some("https://api.github.com/authorizations/42".to_string()),
            ..Default::default()
        };
        assert!(validate_record(&record).is_ok());
        assert_eq!(
            validate_created_record(&record),
            Err(vec![ValidationError::MissingAuthorizationToken])
        );

        record.token = Some(String::new());
        assert_eq!(
            validate_created_record(&record),
            Err(vec![ValidationError::MissingAuthorizationToken])
        );

        record.token = Some("ghu_abc".to_string());
        assert!(validate_created_record(&record).is_ok());
    }
}
