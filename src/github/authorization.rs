//! GitHub OAuth authorization records
//!
//! An [`Authorization`] starts either *unsaved* (only the creation intent:
//! scopes, note, note URL) or *saved* (fetched by id or created remotely).
//! Every remote response is decoded and validated before any local field
//! changes, so a failed call leaves the object as it was.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gh_oauth::{Authorization, ClientConfig, Credentials};
//!
//! # async fn example() -> gh_oauth::Result<()> {
//! let mut authorization = Authorization::builder()
//!     .scope("user")
//!     .note("Open Source IT!")
//!     .credentials(Credentials::new("octocat", "password"))
//!     .build()?;
//! authorization.save().await?;
//! assert!(authorization.is_saved());
//!
//! // Or load an existing one; credentials come from GH_USER / GH_PASSWORD
//! let existing = Authorization::fetch(850974, None, &ClientConfig::default()).await?;
//! println!("{:?}", existing.scopes());
//! # Ok(())
//! # }
//! ```

use super::api::AuthorizationsApi;
use super::types::{
    AuthorizationRecord, CreateAuthorizationPayload, OAuthApp, UpdateAuthorizationPayload,
};
use crate::config::{ClientConfig, Credentials};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use std::fmt;
use tracing::info;

pub struct Authorization {
    api: AuthorizationsApi,
    id: Option<u64>,
    url: Option<String>,
    token: Option<String>,
    hashed_token: Option<String>,
    token_last_eight: Option<String>,
    scopes: BTreeSet<String>,
    note: Option<String>,
    note_url: Option<String>,
    fingerprint: Option<String>,
    app: Option<OAuthApp>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

/// Builder for an unsaved authorization
#[derive(Debug, Default)]
pub struct AuthorizationBuilder {
    scopes: BTreeSet<String>,
    note: Option<String>,
    note_url: Option<String>,
    fingerprint: Option<String>,
    credentials: Option<Credentials>,
    config: Option<ClientConfig>,
}

impl AuthorizationBuilder {
    /// Replace the requested scopes
    pub fn scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single requested scope
    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scopes.insert(scope.into());
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn note_url(mut self, note_url: impl Into<String>) -> Self {
        self.note_url = Some(note_url.into());
        self
    }

    pub fn fingerprint(mut self, fingerprint: impl Into<String>) -> Self {
        self.fingerprint = Some(fingerprint.into());
        self
    }

    /// Basic credentials; when omitted they are read from the environment
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the unsaved authorization
    ///
    /// # Errors
    /// Returns a configuration error when no credentials were given and
    /// `GH_USER` / `GH_PASSWORD` are not set, or when the client settings
    /// are invalid.
    pub fn build(self) -> Result<Authorization> {
        let credentials = Credentials::resolve(self.credentials)?;
        let config = self.config.unwrap_or_default();
        let api = AuthorizationsApi::new(credentials, &config)?;

        Ok(Authorization {
            api,
            id: None,
            url: None,
            token: None,
            hashed_token: None,
            token_last_eight: None,
            scopes: self.scopes,
            note: self.note,
            note_url: self.note_url,
            fingerprint: self.fingerprint,
            app: None,
            created_at: None,
            updated_at: None,
        })
    }
}

impl Authorization {
    pub fn builder() -> AuthorizationBuilder {
        AuthorizationBuilder::default()
    }

    /// Fetch an existing authorization by id
    ///
    /// # Errors
    /// - Configuration error when credentials are neither given nor in the environment
    /// - Remote error when the API answers anything but 200
    pub async fn fetch(
        id: u64,
        credentials: Option<Credentials>,
        config: &ClientConfig,
    ) -> Result<Self> {
        let credentials = Credentials::resolve(credentials)?;
        let api = AuthorizationsApi::new(credentials, config)?;
        let record = api.get(id).await?;

        let mut authorization = Authorization {
            api,
            id: None,
            url: None,
            token: None,
            hashed_token: None,
            token_last_eight: None,
            scopes: BTreeSet::new(),
            note: None,
            note_url: None,
            fingerprint: None,
            app: None,
            created_at: None,
            updated_at: None,
        };
        authorization.apply_record(record);
        Ok(authorization)
    }

    /// True once the authorization exists remotely
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Create the authorization, or push local changes if it already exists
    ///
    /// Unsaved: `POST /authorizations` expecting 201, then `id`, `token` and
    /// `url` are filled from the response. Saved: `PATCH {url}` with the
    /// current scopes, note and note URL, expecting 200.
    pub async fn save(&mut self) -> Result<()> {
        match (self.id, self.url.clone()) {
            (Some(id), Some(url)) => {
                let payload = UpdateAuthorizationPayload {
                    scopes: &self.scopes,
                    note: self.note.as_deref(),
                    note_url: self.note_url.as_deref(),
                };
                let record = self.api.update(&url, &payload).await?;
                self.apply_record(record);
                info!(id, "updated authorization");
            }
            _ => {
                let payload = CreateAuthorizationPayload {
                    scopes: &self.scopes,
                    note: self.note.as_deref(),
                    note_url: self.note_url.as_deref(),
                    fingerprint: self.fingerprint.as_deref(),
                };
                let record = self.api.create(&payload).await?;
                self.apply_record(record);
                info!(id = self.id, "created authorization");
            }
        }
        Ok(())
    }

    /// Revoke the authorization remotely and forget its id and token
    ///
    /// # Errors
    /// - State error when the authorization was never saved
    /// - Remote error when the API answers anything but 204
    pub async fn delete(&mut self) -> Result<()> {
        let (id, url) = match (self.id, self.url.clone()) {
            (Some(id), Some(url)) => (id, url),
            _ => {
                return Err(Error::State(
                    "cannot delete an authorization that is not saved".to_string(),
                ));
            }
        };

        self.api.delete(&url).await?;

        self.id = None;
        self.url = None;
        self.token = None;
        self.hashed_token = None;
        self.token_last_eight = None;
        info!(id, "deleted authorization");
        Ok(())
    }

    fn apply_record(&mut self, record: AuthorizationRecord) {
        self.id = record.id;
        self.url = record.url;
        // GitHub only reveals the token on creation; keep the one we have
        if let Some(token) = record.token.filter(|token| !token.is_empty()) {
            self.token = Some(token);
        }
        self.hashed_token = record.hashed_token;
        self.token_last_eight = record.token_last_eight;
        self.scopes = record.scopes.unwrap_or_default();
        self.note = record.note;
        self.note_url = record.note_url;
        self.fingerprint = record.fingerprint;
        self.app = record.app;
        self.created_at = record.created_at;
        self.updated_at = record.updated_at;
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn hashed_token(&self) -> Option<&str> {
        self.hashed_token.as_deref()
    }

    pub fn token_last_eight(&self) -> Option<&str> {
        self.token_last_eight.as_deref()
    }

    pub fn scopes(&self) -> &BTreeSet<String> {
        &self.scopes
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn note_url(&self) -> Option<&str> {
        self.note_url.as_deref()
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref()
    }

    pub fn app(&self) -> Option<&OAuthApp> {
        self.app.as_ref()
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Login used for management calls
    pub fn username(&self) -> &str {
        self.api.credentials().username()
    }

    pub fn set_scopes<I, S>(&mut self, scopes: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
    }

    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    pub fn set_note_url(&mut self, note_url: Option<String>) {
        self.note_url = note_url;
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("id", &self.id)
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("token_last_eight", &self.token_last_eight)
            .field("scopes", &self.scopes)
            .field("note", &self.note)
            .field("note_url", &self.note_url)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}
