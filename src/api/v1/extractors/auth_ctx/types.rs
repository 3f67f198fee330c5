/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 */

use crate::services::auth::Identity;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` は token の `user_id` claim
/// - `role` は単一の role ラベル (認可は role guard 側でチェック済み)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthCtx {
    pub user_id: u32,
    pub role: String,
}

impl From<Identity> for AuthCtx {
    fn from(identity: Identity) -> Self {
        Self {
            user_id: identity.subject_id,
            role: identity.role,
        }
    }
}
