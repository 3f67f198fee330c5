use axum::extract::FromRequestParts;
use axum::http::{Extensions, request::Parts};

use crate::error::AuthError;

use super::AuthCtx;

/// guard が extensions に入れた AuthCtx を取り出す
/// guard を通っていない場合は ContextMissing
pub fn auth_ctx(extensions: &Extensions) -> Result<AuthCtx, AuthError> {
    extensions
        .get::<AuthCtx>()
        .cloned()
        .ok_or(AuthError::ContextMissing)
}

/// Handler で、 AuthCtx を受け取るための extractor
/// middleware が AuthCtx を request.extensions() に insert 済みである前提
/// 見つからない場合は 500 を返す（ミドルウェア未設定 = 実装ミス）
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        auth_ctx(&parts.extensions)
            .map(AuthCtxExtractor)
            .inspect_err(|_| tracing::error!("auth context requested without auth middleware"))
    }
}
