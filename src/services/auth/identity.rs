use thiserror::Error;

/// Subject and role carried by a token that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject_id: u32,
    pub role: String,
}

/// Why a well-formed token was rejected.
///
/// Only used for logging; clients always see the same message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("signature mismatch")]
    Signature,
    #[error("token expired")]
    Expired,
    #[error("token not yet valid")]
    Immature,
    #[error("missing or malformed '{0}' claim")]
    Claim(&'static str),
    #[error("claim validation failed")]
    Rejected,
}

/// Outcome of decoding a token that could be parsed.
///
/// Structural failures never reach this type; `TokenCodec::decode` returns
/// them as `Err` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenStatus {
    Valid(Identity),
    Invalid(InvalidReason),
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn identity(self) -> Option<Identity> {
        match self {
            Self::Valid(identity) => Some(identity),
            Self::Invalid(_) => None,
        }
    }
}
