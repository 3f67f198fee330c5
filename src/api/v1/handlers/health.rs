/*
 * Responsibility
 * - GET /health (疎通用)
 * - 認証 guard を通さない route の確認用
 */
use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
