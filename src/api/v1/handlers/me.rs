/*
 * Responsibility
 * - GET /me: 認証済み主体をそのまま返す
 * - GET /admin: role guard の内側から同じ情報を返す
 */
use axum::Json;

use crate::api::v1::dto::identity::IdentityResponse;
use crate::api::v1::extractors::AuthCtxExtractor;

pub async fn me(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<IdentityResponse> {
    Json(ctx.into())
}

pub async fn admin(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<IdentityResponse> {
    tracing::info!(user_id = ctx.user_id, role = %ctx.role, "admin endpoint accessed");
    Json(ctx.into())
}
