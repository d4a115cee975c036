/*
 * Responsibility
 * - /memos handlers: token extraction → policy gate → repo call → envelope
 * - reads take the anonymous accessor when no token is present; writes
 *   resolve identity first and stamp it onto the row
 */
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::DeleteResponse,
        dto::memos::{CreateMemoRequest, MemoCreatedResponse, MemoListResponse},
        extractors::MaybeBearer,
    },
    error::AppError,
    repos::memo_repo,
    services::auth::policy,
    state::AppState,
};

pub async fn list_memos(
    State(state): State<AppState>,
    MaybeBearer(token): MaybeBearer,
) -> Result<Json<MemoListResponse>, AppError> {
    let accessor = policy::read_accessor(&*state.store, token.as_deref())?;
    let rows = memo_repo::list(&*accessor).await?;

    Ok(Json(MemoListResponse {
        memos: rows.into_iter().map(Into::into).collect(),
    }))
}

pub async fn create_memo(
    State(state): State<AppState>,
    MaybeBearer(token): MaybeBearer,
    Json(req): Json<CreateMemoRequest>,
) -> Result<(StatusCode, Json<MemoCreatedResponse>), AppError> {
    let (accessor, identity) = policy::require_identity(&*state.store, token.as_deref()).await?;

    req.validate().map_err(AppError::validation)?;

    let row = memo_repo::create(&*accessor, &req.content, &identity).await?;

    Ok((
        StatusCode::CREATED,
        Json(MemoCreatedResponse {
            success: true,
            memo: row.into(),
        }),
    ))
}

pub async fn delete_memo(
    State(state): State<AppState>,
    MaybeBearer(token): MaybeBearer,
    Path(memo_id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    // Any authenticated caller may delete by id; ownership is recorded on
    // create but not checked here.
    let (accessor, _identity) = policy::require_identity(&*state.store, token.as_deref()).await?;

    memo_repo::delete(&*accessor, memo_id).await?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "memo deleted",
    }))
}
