/*
 * Responsibility
 * - memos CRUD over the store accessor
 * - content validation, created_at stamping, ownership stamping
 * - sole boundary turning store failures into RepoError for this table
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::services::store::{Filter, Identity, Order, StoreClient, StoreError};

pub const TABLE: &str = "memos";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoRow {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    // Absent on rows written before auth was mandatory.
    pub user_id: Option<Uuid>,
    pub author_email: Option<String>,
}

fn decode(row: serde_json::Value) -> Result<MemoRow, RepoError> {
    serde_json::from_value(row).map_err(|e| {
        tracing::error!(error = %e, "memo row decode failed");
        RepoError::Store(StoreError::Decode(e))
    })
}

pub async fn create(
    store: &dyn StoreClient,
    content: &str,
    identity: &Identity,
) -> Result<MemoRow, RepoError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(RepoError::Validation("content is required"));
    }

    // created_at is stamped here, not by the store; ownership comes from the
    // resolved identity, never from the request body.
    let record = json!({
        "content": content,
        "created_at": Utc::now(),
        "user_id": identity.id,
        "author_email": identity.email,
    });

    let row = store.insert(TABLE, record).await.map_err(|e| {
        tracing::error!(error = %e, "memo insert failed");
        RepoError::Store(e)
    })?;

    decode(row)
}

/// All memos, newest first. An empty table is an empty vec, not an error.
pub async fn list(store: &dyn StoreClient) -> Result<Vec<MemoRow>, RepoError> {
    let rows = store
        .select(TABLE, &[], Some(Order::desc("created_at")))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "memo select failed");
            RepoError::Store(e)
        })?;

    rows.into_iter().map(decode).collect()
}

pub async fn exists(store: &dyn StoreClient, id: i64) -> Result<bool, RepoError> {
    let rows = store
        .select(TABLE, &[Filter::eq("id", id)], None)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "memo existence check failed");
            RepoError::Store(e)
        })?;

    Ok(!rows.is_empty())
}

/// Idempotent: deleting an id that no longer exists is still a success.
pub async fn delete(store: &dyn StoreClient, id: i64) -> Result<(), RepoError> {
    store
        .delete(TABLE, &[Filter::eq("id", id)])
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "memo delete failed");
            RepoError::Store(e)
        })?;

    Ok(())
}
