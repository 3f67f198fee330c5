use axum::http::{HeaderMap, Uri, header};

use crate::error::AuthError;

/// Query parameter checked before the `Authorization` header.
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Pull the raw token out of a request.
///
/// 1. `?token=<token>` (first occurrence, non-empty)
/// 2. `Authorization: Bearer <token>` (exactly two space-separated parts)
pub fn extract_token(uri: &Uri, headers: &HeaderMap) -> Result<String, AuthError> {
    if let Some(token) = from_query(uri) {
        return Ok(token);
    }

    from_authorization(headers).ok_or(AuthError::MissingToken)
}

fn from_query(uri: &Uri) -> Option<String> {
    let query = uri.query()?;

    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == TOKEN_QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

fn from_authorization(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;

    let mut parts = value.split(' ');
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    if !scheme.eq_ignore_ascii_case("Bearer") || token.is_empty() {
        return None;
    }

    Some(token.to_string())
}
