/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - codec: 署名鍵を閉じ込めた TokenCodec (起動後は read-only)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::auth::TokenCodec;

#[derive(Clone, Debug)]
pub struct AppState {
    pub codec: Arc<TokenCodec>,
}

impl AppState {
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }
}
