/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health は guard なし、/me は認証、/admin は認証 + role を route 単位で適用
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{
    health::health,
    me::{admin, me},
};
use crate::middleware::auth::{access, role};
use crate::state::AppState;

pub fn routes(state: AppState, admin_roles: &[String]) -> Router<AppState> {
    let authenticated = access::apply(Router::new().route("/me", get(me)), state.clone());

    let admin_only = role::apply(
        Router::new().route("/admin", get(admin)),
        state,
        admin_roles.iter().cloned(),
    );

    Router::new()
        .route("/health", get(health))
        .merge(authenticated)
        .merge(admin_only)
}
