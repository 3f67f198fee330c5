use serde::Serialize;

use crate::api::v1::extractors::AuthCtx;

/// Body of `GET /me` and `GET /admin`.
#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
    pub user_id: u32,
    pub role: String,
}

impl From<AuthCtx> for IdentityResponse {
    fn from(ctx: AuthCtx) -> Self {
        Self {
            user_id: ctx.user_id,
            role: ctx.role,
        }
    }
}
