/*
 * Responsibility
 * - liveness probe; touches nothing, not even the store
 */
pub async fn health() -> &'static str {
    "ok"
}
