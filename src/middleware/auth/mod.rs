//! 認証/認可 guard
//!
//! - `access`: token を検証して AuthCtx を extensions に入れる (Stage 1)
//! - `role`: Stage 1 に加えて role の allow-list を確認する (Stage 2)
//! - `token_source`: query / Authorization header から token を取り出す

pub mod access;
pub mod role;
pub mod token_source;

pub use access::authenticate;
pub use role::authorize;
pub use token_source::extract_token;
