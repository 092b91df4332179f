//! Central constants for the gh-oauth library

use std::time::Duration;

/// Default values for GitHub API access
pub mod github {
    /// GitHub API base URL
    pub const API_BASE: &str = "https://api.github.com";

    /// Collection path for OAuth authorizations
    pub const AUTHORIZATIONS_PATH: &str = "/authorizations";

    /// Media type sent with authorization management calls
    pub const ACCEPT_V3: &str = "application/vnd.github.v3+json";

    /// Default User-Agent header for API requests
    pub const DEFAULT_USER_AGENT: &str = concat!("gh-oauth/", env!("CARGO_PKG_VERSION"));

    /// Query parameter carrying the bearer token
    pub const TOKEN_QUERY_PARAM: &str = "access_token";
}

/// Environment variable names
pub mod env {
    /// Basic-auth username for authorization management
    pub const USER: &str = "GH_USER";

    /// Basic-auth password for authorization management
    pub const PASSWORD: &str = "GH_PASSWORD";

    /// Override for the API base URL
    pub const API_URL: &str = "GH_API_URL";

    /// Connect timeout in whole seconds
    pub const CONNECT_TIMEOUT_SECS: &str = "GH_CONNECT_TIMEOUT_SECS";

    /// Overall request timeout in whole seconds
    pub const TIMEOUT_SECS: &str = "GH_TIMEOUT_SECS";
}

/// Default connect timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default overall request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
