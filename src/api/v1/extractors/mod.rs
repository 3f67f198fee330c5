pub mod auth_ctx;

pub use auth_ctx::{AuthCtx, AuthCtxExtractor, auth_ctx};
