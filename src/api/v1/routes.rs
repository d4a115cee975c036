/*
 * Responsibility
 * - v1 URL structure
 * - auth is per-route (reads are anonymous), so there is no blanket bearer
 *   middleware; handlers consult the policy layer themselves
 */
use axum::{
    Router,
    routing::{delete, get},
};

use crate::state::AppState;

use crate::api::v1::handlers::{
    comments::{create_comment, delete_comment, list_comments},
    health::health,
    memos::{create_memo, delete_memo, list_memos},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/memos", get(list_memos).post(create_memo))
        .route("/memos/{memo_id}", delete(delete_memo))
        .route(
            "/memos/{memo_id}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/comments/{comment_id}", delete(delete_comment))
}
