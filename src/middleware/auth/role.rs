//! 認証 + role allow-list による認可 (Stage 2)

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AuthError;
use crate::middleware::auth::access::authenticate;
use crate::services::auth::{Identity, RoleSet};
use crate::state::AppState;

#[derive(Clone)]
struct RoleGuard {
    state: AppState,
    allowed: Arc<RoleSet>,
}

/// router 配下の route に「認証済み かつ role ∈ roles」を要求する。
///
/// ```ignore
/// let admin = Router::new().route("/admin", get(admin));
/// let admin = middleware::auth::role::apply(admin, state.clone(), ["admin"]);
/// ```
pub fn apply<I, S>(router: Router<AppState>, state: AppState, roles: I) -> Router<AppState>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let guard = RoleGuard {
        state,
        allowed: Arc::new(RoleSet::new(roles)),
    };

    router.route_layer(middleware::from_fn_with_state(guard, role_middleware))
}

/// Stage 2: 認証済み Identity の role が allow-list に含まれるか。
pub fn authorize(allowed: &RoleSet, identity: &Identity) -> Result<(), AuthError> {
    if allowed.contains(&identity.role) {
        return Ok(());
    }

    tracing::warn!(
        user_id = identity.subject_id,
        role = %identity.role,
        "role not permitted"
    );
    Err(AuthError::RoleDenied)
}

async fn role_middleware(
    State(guard): State<RoleGuard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticate(&guard.state.codec, req.uri(), req.headers())?;
    authorize(&guard.allowed, &identity)?;

    req.extensions_mut().insert(AuthCtx::from(identity));

    Ok(next.run(req).await)
}
