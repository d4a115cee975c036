/*
 * Responsibility
 * - per-operation authorization gates (the "who may do what" table)
 *   - writes: token required, identity resolved once per request
 *   - reads:  token optional, anonymous accessor as fallback
 * - gates run strictly before the repository call they guard, so a rejected
 *   request never touches a table
 *
 * Deletion is gated on "authenticated" only, not on ownership; ownership
 * fields are stamped on create and not consulted here.
 */
use std::sync::Arc;

use crate::error::AppError;
use crate::services::store::{AccessorFactory, Identity, StoreClient};

/// Gate for mutating operations: the caller must present a token the store
/// can resolve to an identity. Identity is never cached across requests.
pub async fn require_identity(
    factory: &dyn AccessorFactory,
    token: Option<&str>,
) -> Result<(Arc<dyn StoreClient>, Identity), AppError> {
    let Some(token) = token else {
        tracing::warn!("write request without bearer token");
        return Err(AppError::Authentication);
    };

    let accessor = factory.scoped(token).map_err(|e| {
        tracing::error!(error = %e, "could not build scoped accessor");
        AppError::from(e)
    })?;

    let identity = accessor.resolve_identity().await.map_err(|e| {
        tracing::warn!(error = %e, "identity resolution failed");
        AppError::from(e)
    })?;

    Ok((accessor, identity))
}

/// Accessor for read operations: scoped when a token is present, otherwise
/// the shared anonymous one.
pub fn read_accessor(
    factory: &dyn AccessorFactory,
    token: Option<&str>,
) -> Result<Arc<dyn StoreClient>, AppError> {
    let accessor = match token {
        Some(token) => factory.scoped(token),
        None => factory.anonymous(),
    };

    accessor.map_err(|e| {
        tracing::error!(error = %e, "could not build read accessor");
        AppError::from(e)
    })
}
