/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 認証済みリクエストのコンテキスト（AuthCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 * - auth_ctx (extensions から直接取り出す accessor)
 */

mod core;
mod types;

pub use self::core::{AuthCtxExtractor, auth_ctx};
pub use types::AuthCtx;
