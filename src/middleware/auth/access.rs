//! access token 検証 → AuthCtx を extensions に入れる (Stage 1)
//!
//! - token の取り出しは `token_source`、署名/claims 検証は `TokenCodec` に任せる
//! - 失敗時は AuthError をそのまま返し、downstream の handler は呼ばれない

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{HeaderMap, Request, Uri},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AuthError;
use crate::middleware::auth::token_source::extract_token;
use crate::services::auth::{Identity, TokenCodec, TokenStatus};
use crate::state::AppState;

/// router 配下の route に認証を掛ける。
///
/// 例：
/// ```ignore
/// let me = Router::new().route("/me", get(me));
/// let me = middleware::auth::access::apply(me, state.clone());
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // route_layer: マッチしない path (404) には guard を掛けない
    router.route_layer(middleware::from_fn_with_state(state, access_middleware))
}

/// Stage 1: token を取り出して検証し、Identity を返す。
pub fn authenticate(
    codec: &TokenCodec,
    uri: &Uri,
    headers: &HeaderMap,
) -> Result<Identity, AuthError> {
    let token = extract_token(uri, headers).inspect_err(|_| {
        tracing::debug!("authorization token not specified");
    })?;

    match codec.decode(&token) {
        Ok(TokenStatus::Valid(identity)) => Ok(identity),
        Ok(TokenStatus::Invalid(reason)) => {
            tracing::warn!(%reason, "access token rejected");
            Err(AuthError::InvalidToken(reason))
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to parse access token");
            Err(AuthError::Malformed(err))
        }
    }
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let identity = authenticate(&state.codec, req.uri(), req.headers())?;

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(AuthCtx::from(identity));

    Ok(next.run(req).await)
}
