//! Bearer token attachment
//!
//! A [`BearerStrategy`] rewrites an outgoing [`reqwest::Request`] so GitHub
//! recognizes the token: either as an `Authorization: Bearer` header or as
//! an `access_token` query parameter. Header placement never touches the
//! URL; query placement never touches the headers.

use super::authorization::Authorization;
use crate::constants::github::TOKEN_QUERY_PARAM;
use crate::utils::validators::{self, ValidationError};
use crate::{Error, Result};
use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};
use std::fmt;
use std::sync::Arc;

/// Where the token goes on the request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BearerPlacement {
    /// `Authorization: Bearer <token>`
    #[default]
    Header,
    /// `?access_token=<token>`
    Query,
}

/// A cheaply clonable token plus its placement
#[derive(Clone)]
pub struct BearerStrategy {
    token: Arc<str>,
    header: HeaderValue,
    placement: BearerPlacement,
}

impl BearerStrategy {
    /// Capture the token of a saved authorization
    ///
    /// # Errors
    /// State error when the authorization is unsaved or its token is not
    /// known locally (GitHub only returns it on creation).
    pub fn new(authorization: &Authorization, placement: BearerPlacement) -> Result<Self> {
        if !authorization.is_saved() {
            return Err(Error::State(
                "bearer strategy requires a saved authorization".to_string(),
            ));
        }
        let token = authorization.token().ok_or_else(|| {
            Error::State("saved authorization has no token available locally".to_string())
        })?;
        Self::from_token(token, placement)
    }

    /// Wrap a raw token obtained elsewhere
    ///
    /// # Errors
    /// Validation error when the token is empty or cannot be carried in a
    /// header.
    pub fn from_token(token: &str, placement: BearerPlacement) -> Result<Self> {
        validators::validate_token(token)?;
        let mut header = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ValidationError::InvalidToken)?;
        header.set_sensitive(true);
        Ok(Self {
            token: token.into(),
            header,
            placement,
        })
    }

    pub fn placement(&self) -> BearerPlacement {
        self.placement
    }

    /// Attach the token to `request`; method and body are left alone
    ///
    /// Query placement keeps every other query segment byte for byte and
    /// replaces an existing `access_token` segment.
    pub fn apply(&self, mut request: Request) -> Request {
        match self.placement {
            BearerPlacement::Header => {
                request
                    .headers_mut()
                    .insert(AUTHORIZATION, self.header.clone());
            }
            BearerPlacement::Query => {
                let url = request.url_mut();
                let kept = url.query().map(|query| {
                    query
                        .split('&')
                        .filter(|segment| !segment.is_empty() && !is_token_segment(segment))
                        .collect::<Vec<_>>()
                        .join("&")
                });
                url.set_query(kept.as_deref().filter(|query| !query.is_empty()));
                url.query_pairs_mut()
                    .append_pair(TOKEN_QUERY_PARAM, &self.token);
            }
        }
        request
    }
}

fn is_token_segment(segment: &str) -> bool {
    segment.split('=').next() == Some(TOKEN_QUERY_PARAM)
}

impl fmt::Debug for BearerStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerStrategy")
            .field("token", &"<redacted>")
            .field("placement", &self.placement)
            .finish()
    }
}
