/*
 * Responsibility
 * - application-wide AppError definition (configuration / auth / validation / upstream)
 * - IntoResponse implementation (HTTP status + {"error": message} JSON body)
 * - uniform conversion from RepoError / StoreError so handlers never see raw
 *   store errors
 *
 * The body carries a human-readable message only; store-native error text is
 * logged where it occurs and never reaches the client.
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::repos::error::RepoError;
use crate::services::store::StoreError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage backend is not configured")]
    Configuration,

    #[error("authentication required")]
    Authentication,

    #[error("{0}")]
    Validation(String),

    #[error("storage backend request failed")]
    Upstream,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Authentication => StatusCode::UNAUTHORIZED,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unconfigured => AppError::Configuration,
            StoreError::Auth(_) => AppError::Authentication,
            StoreError::Upstream { .. } | StoreError::Transport(_) | StoreError::Decode(_) => {
                AppError::Upstream
            }
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Validation(message) => AppError::Validation(message.to_string()),
            RepoError::Store(e) => e.into(),
        }
    }
}
