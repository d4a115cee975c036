/*
 * Responsibility
 * - the bearer credential as handlers see it
 * - never rejects: an absent token is a normal state (anonymous reads), and
 *   whether it was required is the policy layer's call
 */
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::services::auth::bearer_token;

#[derive(Debug, Clone)]
pub struct MaybeBearer(pub Option<String>);

impl<S> FromRequestParts<S> for MaybeBearer
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bearer_token(&parts.headers).map(str::to_string)))
    }
}
