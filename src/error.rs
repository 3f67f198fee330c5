/*
 * Responsibility
 * - 認証/認可で発生するエラー (AuthError) の定義
 * - IntoResponse 実装 (HTTP status / {"Info": ...} の JSON body)
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::InvalidReason;

/// Rejection body: a single `Info` field with a fixed message.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    #[serde(rename = "Info")]
    pub info: String,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization token not specified")]
    MissingToken,

    // パースできないトークンはサーバー側の失敗として扱う (500)
    #[error("Failed to parse authorization token")]
    Malformed(#[source] jsonwebtoken::errors::Error),

    #[error("Access denied, token invalid")]
    InvalidToken(InvalidReason),

    #[error("Access denied, check with your IT department")]
    RoleDenied,

    #[error("token info not set, make sure authentication middleware is used")]
    ContextMissing,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingToken => StatusCode::BAD_REQUEST,
            AuthError::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::InvalidToken(_) | AuthError::RoleDenied => StatusCode::UNAUTHORIZED,
            AuthError::ContextMissing => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = InfoResponse {
            info: self.to_string(),
        };

        (self.status(), Json(body)).into_response()
    }
}
