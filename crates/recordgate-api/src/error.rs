use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use recordgate_db::DbError;
use recordgate_types::api::MessageBody;
use thiserror::Error;

use crate::token::TokenError;

/// Every failure a handler or the auth gate can return. Rendered as
/// `{"msg": ...}` with a fixed, short message; details only go to the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Token is missing!")]
    MissingToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token is invalid")]
    InvalidToken,

    #[error("User not found")]
    UserNotFound,

    /// Same answer for unknown users and wrong passwords.
    #[error("Bad username or password")]
    BadCredentials,

    #[error("Missing body")]
    MissingBody,

    #[error("Missing form field: {0}")]
    MissingField(&'static str),

    /// A record could not be written. The transaction has already been rolled back.
    #[error("Failed to store record")]
    Persistence(#[source] DbError),

    #[error(transparent)]
    Database(#[from] DbError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingToken
            | ApiError::ExpiredToken
            | ApiError::InvalidToken
            | ApiError::UserNotFound
            | ApiError::BadCredentials => StatusCode::UNAUTHORIZED,
            ApiError::MissingBody | ApiError::MissingField(_) => StatusCode::BAD_REQUEST,
            ApiError::Persistence(_) | ApiError::Database(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message safe to show to the caller.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Database(_) | ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => ApiError::ExpiredToken,
            TokenError::Invalid => ApiError::InvalidToken,
            TokenError::Signing(e) => ApiError::Internal(anyhow::Error::new(e).context("sign token")),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Persistence(e) => tracing::error!("Record write failed: {:#}", e),
            ApiError::Database(e) => tracing::error!("Database error: {:#}", e),
            ApiError::Internal(e) => tracing::error!("Internal error: {:#}", e),
            other => tracing::info!("Request rejected: {}", other),
        }

        (self.status_code(), Json(MessageBody::new(self.user_message()))).into_response()
    }
}
