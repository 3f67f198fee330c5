use chrono::{Duration, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::ConfigError;
use crate::services::auth::identity::{Identity, InvalidReason, TokenStatus};

/// Lifetime of every issued token.
pub const TOKEN_TTL_MINUTES: i64 = 10;

const CLAIM_USER_ID: &str = "user_id";
const CLAIM_ROLE: &str = "role";

#[derive(Debug, Serialize)]
struct IssuedClaims<'a> {
    user_id: u32,
    role: &'a str,
    exp: i64,
}

/// HS512 token issuer/verifier bound to a single shared secret.
///
/// - Issues tokens with `HS512` only.
/// - Accepts any HMAC variant on decode; other algorithm families are a parse error.
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenCodec")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenCodec {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, ConfigError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(ConfigError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS512);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_aud = false;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issue a token for `(subject_id, role)` valid for [`TOKEN_TTL_MINUTES`].
    pub fn encode(&self, subject_id: u32, role: &str) -> Result<String, JwtError> {
        let exp = (Utc::now() + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp();

        let claims = IssuedClaims {
            user_id: subject_id,
            role,
            exp,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS512), &claims, &self.encoding_key)
    }

    /// Verify a token and extract its identity.
    ///
    /// - `Err(_)`: the token could not be parsed (structure, encoding, non-HMAC `alg`).
    /// - `Ok(TokenStatus::Invalid(_))`: parsed, but signature/expiry/claims were rejected.
    /// - `Ok(TokenStatus::Valid(_))`: everything checks out.
    pub fn decode(&self, token: &str) -> Result<TokenStatus, JwtError> {
        // Decode into a plain map so that a wrong-typed `user_id`/`role` is a
        // claim rejection rather than a JSON error.
        let data = match jsonwebtoken::decode::<Map<String, Value>>(
            token,
            &self.decoding_key,
            &self.validation,
        ) {
            Ok(data) => data,
            Err(err) => {
                return match rejection_reason(err.kind()) {
                    Some(reason) => Ok(TokenStatus::Invalid(reason)),
                    None => Err(err),
                };
            }
        };

        Ok(match identity_from_claims(&data.claims) {
            Ok(identity) => TokenStatus::Valid(identity),
            Err(reason) => TokenStatus::Invalid(reason),
        })
    }
}

// Errors raised after the token was parsed. Everything else is structural.
fn rejection_reason(kind: &ErrorKind) -> Option<InvalidReason> {
    match kind {
        ErrorKind::InvalidSignature => Some(InvalidReason::Signature),
        ErrorKind::ExpiredSignature => Some(InvalidReason::Expired),
        ErrorKind::ImmatureSignature => Some(InvalidReason::Immature),
        ErrorKind::MissingRequiredClaim(_) => Some(InvalidReason::Claim("exp")),
        ErrorKind::InvalidIssuer | ErrorKind::InvalidAudience => Some(InvalidReason::Rejected),
        _ => None,
    }
}

fn identity_from_claims(claims: &Map<String, Value>) -> Result<Identity, InvalidReason> {
    let subject_id = claims
        .get(CLAIM_USER_ID)
        .and_then(parse_subject_id)
        .ok_or(InvalidReason::Claim(CLAIM_USER_ID))?;

    let role = claims
        .get(CLAIM_ROLE)
        .and_then(Value::as_str)
        .ok_or(InvalidReason::Claim(CLAIM_ROLE))?;

    Ok(Identity {
        subject_id,
        role: role.to_string(),
    })
}

// `user_id` is a JSON number; fractional values are rounded (ties to even).
fn parse_subject_id(value: &Value) -> Option<u32> {
    let Value::Number(n) = value else {
        return None;
    };

    if let Some(v) = n.as_u64() {
        return u32::try_from(v).ok();
    }

    let rounded = n.as_f64()?.round_ties_even();
    if rounded.is_finite() && rounded >= 0.0 && rounded <= f64::from(u32::MAX) {
        Some(rounded as u32)
    } else {
        None
    }
}
