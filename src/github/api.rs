//! Basic-auth calls against the authorizations endpoint
//!
//! Each call checks for the exact status GitHub documents for it. Anything
//! else becomes [`Error::Remote`] carrying the status and raw body, as does
//! a body with the right status that fails record validation. Nothing is
//! retried.

use super::types::{AuthorizationRecord, CreateAuthorizationPayload, UpdateAuthorizationPayload};
use crate::config::{ClientConfig, Credentials};
use crate::constants::github::{ACCEPT_V3, AUTHORIZATIONS_PATH};
use crate::utils::validators::{self, ValidationError};
use crate::{Error, Result};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use tracing::debug;

/// Management session: HTTP client, API base and basic credentials
#[derive(Clone)]
pub(crate) struct AuthorizationsApi {
    client: Client,
    base: String,
    credentials: Credentials,
}

impl AuthorizationsApi {
    pub(crate) fn new(credentials: Credentials, config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: config.http_client()?,
            base: config.base().to_string(),
            credentials,
        })
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base, AUTHORIZATIONS_PATH)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!(%method, url, "authorizations request");
        self.client
            .request(method, url)
            .header("Accept", ACCEPT_V3)
            .basic_auth(
                self.credentials.username(),
                Some(self.credentials.password()),
            )
    }

    /// `GET /authorizations/{id}`, expecting 200
    pub(crate) async fn get(&self, id: u64) -> Result<AuthorizationRecord> {
        let url = format!("{}/{}", self.collection_url(), id);
        let response = self.request(Method::GET, &url).send().await?;
        expect_record(response, StatusCode::OK, validators::validate_record).await
    }

    /// `POST /authorizations`, expecting 201
    pub(crate) async fn create(
        &self,
        payload: &CreateAuthorizationPayload<'_>,
    ) -> Result<AuthorizationRecord> {
        let url = self.collection_url();
        let response = self.request(Method::POST, &url).json(payload).send().await?;
        expect_record(response, StatusCode::CREATED, validators::validate_created_record).await
    }

    /// `PATCH {url}`, expecting 200
    pub(crate) async fn update(
        &self,
        url: &str,
        payload: &UpdateAuthorizationPayload<'_>,
    ) -> Result<AuthorizationRecord> {
        let response = self.request(Method::PATCH, url).json(payload).send().await?;
        expect_record(response, StatusCode::OK, validators::validate_record).await
    }

    /// `DELETE {url}`, expecting 204
    pub(crate) async fn delete(&self, url: &str) -> Result<()> {
        let response = self.request(Method::DELETE, url).send().await?;
        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(unexpected_status(
                status,
                StatusCode::NO_CONTENT,
                response.text().await?,
            ));
        }
        Ok(())
    }
}

type RecordCheck = fn(&AuthorizationRecord) -> std::result::Result<(), Vec<ValidationError>>;

async fn expect_record(
    response: Response,
    expected: StatusCode,
    check: RecordCheck,
) -> Result<AuthorizationRecord> {
    let status = response.status();
    let body = response.text().await?;

    if status != expected {
        return Err(unexpected_status(status, expected, body));
    }

    let record: AuthorizationRecord = serde_json::from_str(&body)?;
    if let Err(errors) = check(&record) {
        return Err(Error::Remote {
            status: status.as_u16(),
            expected: expected.as_u16(),
            reason: format!(
                "returned an invalid authorization ({})",
                validators::join_errors(&errors)
            ),
            body,
        });
    }

    Ok(record)
}

fn unexpected_status(status: StatusCode, expected: StatusCode, body: String) -> Error {
    Error::Remote {
        status: status.as_u16(),
        expected: expected.as_u16(),
        reason: "returned an unexpected status".to_string(),
        body,
    }
}
