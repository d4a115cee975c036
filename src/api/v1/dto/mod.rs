/*
 * Responsibility
 * - request/response DTOs shared across v1
 */
use serde::Serialize;

pub mod comments;
pub mod memos;

/// Body for successful deletes. Returned whether or not the id still
/// existed (deletes are idempotent).
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}
