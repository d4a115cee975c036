/*
 * Responsibility
 * - comments CRUD over the store accessor
 * - the store enforces no foreign key, so the memo-existence check before
 *   insert happens here and is mandatory
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::repos::error::RepoError;
use crate::repos::memo_repo;
use crate::services::store::{Filter, Identity, Order, StoreClient, StoreError};

pub const TABLE: &str = "comments";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRow {
    pub id: i64,
    pub memo_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
    pub author_email: Option<String>,
}

fn decode(row: serde_json::Value) -> Result<CommentRow, RepoError> {
    serde_json::from_value(row).map_err(|e| {
        tracing::error!(error = %e, "comment row decode failed");
        RepoError::Store(StoreError::Decode(e))
    })
}

pub async fn create(
    store: &dyn StoreClient,
    memo_id: i64,
    content: &str,
    identity: &Identity,
) -> Result<CommentRow, RepoError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(RepoError::Validation("content is required"));
    }

    // A failed check counts as an invalid reference too; nothing is inserted
    // unless the memo is positively known to exist.
    match memo_repo::exists(store, memo_id).await {
        Ok(true) => {}
        Ok(false) | Err(_) => return Err(RepoError::Validation("invalid memo id")),
    }

    let record = json!({
        "memo_id": memo_id,
        "content": content,
        "created_at": Utc::now(),
        "user_id": identity.id,
        "author_email": identity.email,
    });

    let row = store.insert(TABLE, record).await.map_err(|e| {
        tracing::error!(error = %e, "comment insert failed");
        RepoError::Store(e)
    })?;

    decode(row)
}

/// Comments for one memo, oldest first (conversational order — the
/// opposite of memo listing).
pub async fn list(store: &dyn StoreClient, memo_id: i64) -> Result<Vec<CommentRow>, RepoError> {
    let rows = store
        .select(
            TABLE,
            &[Filter::eq("memo_id", memo_id)],
            Some(Order::asc("created_at")),
        )
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "comment select failed");
            RepoError::Store(e)
        })?;

    rows.into_iter().map(decode).collect()
}

/// Idempotent, same as memo deletion.
pub async fn delete(store: &dyn StoreClient, id: i64) -> Result<(), RepoError> {
    store
        .delete(TABLE, &[Filter::eq("id", id)])
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "comment delete failed");
            RepoError::Store(e)
        })?;

    Ok(())
}
