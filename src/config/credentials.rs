//! Basic-auth credentials for authorization management

use crate::constants::env;
use crate::{Error, Result};
use std::fmt;

/// Username/password pair used only against the authorizations endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials from explicit values
    ///
    /// # Arguments
    /// * `username` - GitHub login
    /// * `password` - Account password, sent only to the authorizations endpoint
    ///
    /// # Example
    /// ```rust
    /// use gh_oauth::Credentials;
    ///
    /// let credentials = Credentials::new("octocat", "password");
    /// assert_eq!(credentials.username(), "octocat");
    /// ```
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `GH_USER` and `GH_PASSWORD`
    ///
    /// # Errors
    /// Returns a configuration error naming the first variable that is
    /// missing or empty.
    pub fn from_env() -> Result<Self> {
        let username = read_var(env::USER)?;
        let password = read_var(env::PASSWORD)?;
        Ok(Self { username, password })
    }

    /// Prefer explicit credentials, otherwise fall back to the environment
    pub fn resolve(explicit: Option<Credentials>) -> Result<Self> {
        match explicit {
            Some(credentials) => Ok(credentials),
            None => Self::from_env(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

fn read_var(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(Error::Configuration(format!(
            "{} is not set; pass credentials explicitly or export {} and {}",
            name,
            env::USER,
            env::PASSWORD
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_credentials_win() {
        let credentials = Credentials::resolve(Some(Credentials::new("octocat", "secret"))).unwrap();
        assert_eq!(credentials.username(), "octocat");
        assert_eq!(credentials.password(), "secret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", Credentials::new("octocat", "hunter2"));
        assert!(rendered.contains("octocat"));
        assert!(!rendered.contains("hunter2"));
    }
}
