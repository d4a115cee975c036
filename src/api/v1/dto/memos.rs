/*
 * Responsibility
 * - memo request/response DTOs
 * - validate() for shape checks; the repo re-checks what it must anyway
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::memo_repo::MemoRow;

#[derive(Debug, Deserialize)]
pub struct CreateMemoRequest {
    pub content: String,
}

impl CreateMemoRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.content.trim().is_empty() {
            return Err("content is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MemoResponse {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
    pub author_email: Option<String>,
}

impl From<MemoRow> for MemoResponse {
    fn from(row: MemoRow) -> Self {
        Self {
            id: row.id,
            content: row.content,
            created_at: row.created_at,
            user_id: row.user_id,
            author_email: row.author_email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MemoCreatedResponse {
    pub success: bool,
    pub memo: MemoResponse,
}

#[derive(Debug, Serialize)]
pub struct MemoListResponse {
    pub memos: Vec<MemoResponse>,
}
