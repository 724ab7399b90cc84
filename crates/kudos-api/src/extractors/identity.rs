//! Identity extractor
//!
//! Authentication is owned by an upstream gateway; by the time a request
//! reaches this service the caller's identity has already been verified and
//! arrives as an opaque `x-user-id` header. The extractor only parses it - a
//! missing or malformed header is a 401, never a verification step.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use kudos_core::Snowflake;

use crate::response::ApiError;

/// Header carrying the already-verified user id
pub const IDENTITY_HEADER: &str = "x-user-id";

/// Verified caller identity
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    /// User ID supplied by the upstream gateway
    pub user_id: Snowflake,
}

impl Identity {
    /// Create a new Identity
    pub fn new(user_id: Snowflake) -> Self {
        Self { user_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or(ApiError::MissingIdentity)?;

        let raw = header.to_str().map_err(|_| ApiError::InvalidIdentity)?;

        let user_id = raw.parse::<Snowflake>().map_err(|e| {
            tracing::warn!(error = %e, "Unparseable identity header");
            ApiError::InvalidIdentity
        })?;

        Ok(Identity::new(user_id))
    }
}
