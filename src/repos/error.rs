/*
 * Responsibility
 * - the meaning a repo conveys upward
 */
use thiserror::Error;

use crate::services::store::StoreError;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("store error")]
    Store(#[from] StoreError),
}
