//! Wire types for the authorizations API
//!
//! [`AuthorizationRecord`] is the decoded JSON authorization object; the
//! payload structs are what gets sent on create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// OAuth application an authorization belongs to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OAuthApp {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub client_id: Option<String>,
}

/// Authorization object as returned by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizationRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub hashed_token: Option<String>,
    #[serde(default)]
    pub token_last_eight: Option<String>,
    #[serde(default)]
    pub scopes: Option<BTreeSet<String>>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub note_url: Option<String>,
    #[serde(default)]
    pub fingerprint: Option<String>,
    #[serde(default)]
    pub app: Option<OAuthApp>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /authorizations`
#[derive(Debug, Serialize)]
pub(crate) struct CreateAuthorizationPayload<'a> {
    pub scopes: &'a BTreeSet<String>,
    pub note: Option<&'a str>,
    pub note_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<&'a str>,
}

/// Body of `PATCH {url}`
#[derive(Debug, Serialize)]
pub(crate) struct UpdateAuthorizationPayload<'a> {
    pub scopes: &'a BTreeSet<String>,
    pub note: Option<&'a str>,
    pub note_url: Option<&'a str>,
}
