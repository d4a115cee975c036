/*
 * Responsibility
 * - comment handlers under /memos/{memo_id}/comments and /comments/{id}
 * - the target-memo existence check lives in the repo, not here
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::DeleteResponse,
        dto::comments::{CommentCreatedResponse, CommentListResponse, CreateCommentRequest},
        extractors::MaybeBearer,
    },
    error::AppError,
    repos::comment_repo,
    services::auth::policy,
    state::AppState,
};

pub async fn list_comments(
    State(state): State<AppState>,
    MaybeBearer(token): MaybeBearer,
    Path(memo_id): Path<i64>,
) -> Result<Json<CommentListResponse>, AppError> {
    let accessor = policy::read_accessor(&*state.store, token.as_deref())?;
    let rows = comment_repo::list(&*accessor, memo_id).await?;

    Ok(Json(CommentListResponse {
        comments: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn create_comment(
    State(state): State<AppState>,
    MaybeBearer(token): MaybeBearer,
    Path(memo_id): Path<i64>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentCreatedResponse>), AppError> {
    let (accessor, identity) = policy::require_identity(&*state.store, token.as_deref()).await?;

    req.validate().map_err(AppError::validation)?;

    let row = comment_repo::create(&*accessor, memo_id, &req.content, &identity).await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentCreatedResponse {
            success: true,
            comment: row.into(),
        }),
    ))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    MaybeBearer(token): MaybeBearer,
    Path(comment_id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let (accessor, _identity) = policy::require_identity(&*state.store, token.as_deref()).await?;

    comment_repo::delete(&*accessor, comment_id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "comment deleted",
    }))
}
