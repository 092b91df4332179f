//! Bearer-authorized GitHub API client
//!
//! [`AuthorizedClient`] pins the API base URL and runs every outgoing
//! request through a [`BearerStrategy`]. Paths must be relative (`/user`,
//! `/user/repos`); absolute URLs are refused so the token never leaves the
//! configured host. Responses come back untouched.
//!
//! ## Features
//!
//! - **Base URL pinning**: every path is joined onto the configured API root
//! - **Bearer placement**: token in the `Authorization` header or in `access_token`
//! - **Pass-through**: status, headers and body are whatever the server sent

use super::authorization::Authorization;
use super::bearer::{BearerPlacement, BearerStrategy};
use crate::config::ClientConfig;
use crate::utils::validators;
use crate::Result;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use tracing::debug;

/// HTTP client bound to one API base URL and one bearer token
///
/// ## Example
///
/// ```rust,no_run
/// use gh_oauth::{Authorization, AuthorizedClient, ClientConfig};
///
/// # async fn example() -> gh_oauth::Result<()> {
/// let authorization = Authorization::fetch(850974, None, &ClientConfig::default()).await?;
/// let client = AuthorizedClient::new(&authorization)?;
///
/// let response = client.get("/user/repos").await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizedClient {
    client: Client,
    base_url: String,
    strategy: BearerStrategy,
}

impl AuthorizedClient {
    /// Create a client with the token in the `Authorization` header and default settings
    ///
    /// # Arguments
    /// * `authorization` - A saved authorization whose token is known locally
    ///
    /// # Errors
    /// State error when the authorization is unsaved or has no token.
    pub fn new(authorization: &Authorization) -> Result<Self> {
        Self::with_placement(authorization, BearerPlacement::Header)
    }

    /// Create a client with a chosen token placement and default settings
    pub fn with_placement(authorization: &Authorization, placement: BearerPlacement) -> Result<Self> {
        Self::with_config(authorization, placement, &ClientConfig::default())
    }

    /// Create a client with a chosen token placement and explicit settings
    ///
    /// # Arguments
    /// * `authorization` - A saved authorization whose token is known locally
    /// * `placement` - Header or query parameter
    /// * `config` - API base URL, timeouts and user agent
    ///
    /// # Errors
    /// - State error when the authorization is unsaved or has no token
    /// - Configuration error when `config` is invalid
    pub fn with_config(
        authorization: &Authorization,
        placement: BearerPlacement,
        config: &ClientConfig,
    ) -> Result<Self> {
        let strategy = BearerStrategy::new(authorization, placement)?;
        Self::with_strategy(strategy, config)
    }

    /// Client around an existing strategy, e.g. one shared with another client
    pub fn with_strategy(strategy: BearerStrategy, config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            client: config.http_client()?,
            base_url: config.base().to_string(),
            strategy,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn strategy(&self) -> &BearerStrategy {
        &self.strategy
    }

    /// Start a request to `path` under the API base
    ///
    /// # Errors
    /// Validation error when `path` does not start with `/`.
    pub fn request(&self, method: Method, path: &str) -> Result<PendingRequest<'_>> {
        validators::validate_api_path(path)?;
        let url = format!("{}{}", self.base_url, path);
        Ok(PendingRequest {
            owner: self,
            method: method.clone(),
            path: path.split('?').next().unwrap_or(path).to_string(),
            builder: self.client.request(method, url),
        })
    }

    pub async fn get(&self, path: &str) -> Result<Response> {
        self.request(Method::GET, path)?.send().await
    }

    pub async fn delete(&self, path: &str) -> Result<Response> {
        self.request(Method::DELETE, path)?.send().await
    }
}

/// A request that has not been dispatched yet
pub struct PendingRequest<'a> {
    owner: &'a AuthorizedClient,
    method: Method,
    path: String,
    builder: RequestBuilder,
}

impl PendingRequest<'_> {
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.builder = self.builder.header(name, value);
        self
    }

    pub fn query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        self.builder = self.builder.query(query);
        self
    }

    pub fn json<T: Serialize + ?Sized>(mut self, json: &T) -> Self {
        self.builder = self.builder.json(json);
        self
    }

    pub fn body(mut self, body: impl Into<reqwest::Body>) -> Self {
        self.builder = self.builder.body(body);
        self
    }

    /// Attach the bearer token and dispatch; the response is returned as-is
    pub async fn send(self) -> Result<Response> {
        let request = self.owner.strategy.apply(self.builder.build()?);
        debug!(method = %self.method, path = %self.path, "dispatching authorized request");
        let response = self.owner.client.execute(request).await?;
        Ok(response)
    }
}
