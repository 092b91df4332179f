//! GitHub OAuth integration module
//!
//! ## Architecture
//!
//! - [`types`]: wire types for the authorizations API
//! - `api`: basic-auth calls against `/authorizations` (crate-private)
//! - [`authorization`]: the [`Authorization`] lifecycle (create, fetch, update, delete)
//! - [`bearer`]: attaching a bearer token to outgoing requests
//! - [`client`]: [`AuthorizedClient`], a base-URL-pinned client applying a bearer strategy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gh_oauth::github::{Authorization, AuthorizedClient, BearerPlacement};
//! use gh_oauth::{ClientConfig, Credentials};
//!
//! # async fn example() -> gh_oauth::Result<()> {
//! let mut authorization = Authorization::builder()
//!     .scopes(["user", "public_repo"])
//!     .note("release tooling")
//!     .credentials(Credentials::new("octocat", "password"))
//!     .build()?;
//! authorization.save().await?;
//!
//! let client = AuthorizedClient::with_config(
//!     &authorization,
//!     BearerPlacement::Query,
//!     &ClientConfig::default(),
//! )?;
//! let user = client.get("/user").await?;
//! println!("{}", user.status());
//! # Ok(())
//! # }
//! ```

pub(crate) mod api;
pub mod authorization;
pub mod bearer;
pub mod client;
pub mod types;

pub use authorization::{Authorization, AuthorizationBuilder};
pub use bearer::{BearerPlacement, BearerStrategy};
pub use client::{AuthorizedClient, PendingRequest};
pub use types::{AuthorizationRecord, OAuthApp};
