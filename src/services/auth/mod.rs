pub mod identity;
pub mod roles;
pub mod token_codec;

pub use identity::{Identity, InvalidReason, TokenStatus};
pub use roles::RoleSet;
pub use token_codec::TokenCodec;
