/*
 * Responsibility
 * - comment request/response DTOs
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repos::comment_repo::CommentRow;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
}

impl CreateCommentRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.content.trim().is_empty() {
            return Err("content is required");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub memo_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<Uuid>,
    pub author_email: Option<String>,
}

impl From<CommentRow> for CommentResponse {
    fn from(row: CommentRow) -> Self {
        Self {
            id: row.id,
            memo_id: row.memo_id,
            content: row.content,
            created_at: row.created_at,
            user_id: row.user_id,
            author_email: row.author_email,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CommentCreatedResponse {
    pub success: bool,
    pub comment: CommentResponse,
}

#[derive(Debug, Serialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}
