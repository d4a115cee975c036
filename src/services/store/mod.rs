/*
 * Responsibility
 * - the contract toward the external store: row-oriented insert/select/delete
 *   plus credential → identity resolution
 * - accessor factory: one anonymous default accessor, fresh token-scoped
 *   accessors per request
 *
 * The store's storage engine and identity verification are opaque to this
 * crate. Everything above this module speaks Filter/Order/Value rows.
 */
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

pub mod http;
#[cfg(test)]
pub mod testing;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store is not configured")]
    Unconfigured,

    #[error("credential rejected: {0}")]
    Auth(String),

    #[error("store returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("store transport error")]
    Transport(#[from] reqwest::Error),

    #[error("store payload decode error")]
    Decode(#[from] serde_json::Error),
}

/// The caller the store resolved a credential to. Stamped onto rows as
/// `user_id` / `author_email` on every write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
}

/// Equality filter on one column.
#[derive(Debug, Clone)]
pub struct Filter {
    pub column: &'static str,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self {
            column,
            value: value.into(),
        }
    }
}

/// Single-column ordering.
#[derive(Debug, Clone, Copy)]
pub struct Order {
    pub column: &'static str,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub fn desc(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// One handle to the store, carrying a fixed credential context (either the
/// anonymous key or one caller's bearer token).
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Insert one record; returns the persisted row including the
    /// store-assigned id.
    async fn insert(&self, table: &str, record: Value) -> Result<Value, StoreError>;

    /// Select rows matching all filters, optionally ordered by one column.
    async fn select(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<Order>,
    ) -> Result<Vec<Value>, StoreError>;

    /// Delete rows matching all filters; returns the affected-row count.
    /// Zero affected rows is a success, not an error.
    async fn delete(&self, table: &str, filters: &[Filter]) -> Result<u64, StoreError>;

    /// Ask the store who the credential this accessor carries belongs to.
    async fn resolve_identity(&self) -> Result<Identity, StoreError>;
}

impl std::fmt::Debug for dyn StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StoreClient")
    }
}

/// Produces accessors. Both methods fail with `StoreError::Unconfigured`
/// when no connection target was available at process start.
pub trait AccessorFactory: Send + Sync {
    /// The process-wide default accessor (anonymous key). Built once,
    /// read-only, shared across requests.
    fn anonymous(&self) -> Result<Arc<dyn StoreClient>, StoreError>;

    /// A fresh accessor scoped to one caller's token. Never cached; tokens
    /// are short-lived and must not leak across requests.
    fn scoped(&self, token: &str) -> Result<Arc<dyn StoreClient>, StoreError>;
}
