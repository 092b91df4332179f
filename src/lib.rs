//! gh-oauth - GitHub OAuth authorizations and bearer-authorized API access
//!
//! Manage OAuth authorization records with basic credentials, then talk to
//! the API with the resulting token attached as a header or query parameter.

pub mod config;
pub mod constants;
pub mod error;
pub mod github;
pub mod utils;

pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;

// Re-export commonly used types
pub use config::{ClientConfig, Credentials};
pub use github::{
    Authorization, AuthorizationBuilder, AuthorizedClient, BearerPlacement, BearerStrategy,
};
