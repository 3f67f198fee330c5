/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth: 認証 (access) / 認可 (role) guard
 * - http: request-id / trace / timeout
 */
pub mod auth;
pub mod http;
