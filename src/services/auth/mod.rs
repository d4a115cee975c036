/*
 * Responsibility
 * - bearer credential extraction from request headers (pure, no I/O)
 * - authorization gates live in policy.rs
 *
 * Absence of a token is a normal result here (anonymous reads), not an
 * error; the policy layer decides whether the operation needed one.
 */
use axum::http::{HeaderMap, header};

pub mod policy;

/// Pull the bearer token out of the Authorization header. Header lookup is
/// case-insensitive; the value must match `Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    if token.is_empty() { None } else { Some(token) }
}
