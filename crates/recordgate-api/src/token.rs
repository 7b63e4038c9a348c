//! Signed, short-lived bearer tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use recordgate_types::api::Claims;
use thiserror::Error;
use tracing::debug;

/// How long an issued token is accepted, in minutes.
pub const TOKEN_TTL_MINUTES: i64 = 5;

#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature verified but `now >= exp`.
    #[error("token expired")]
    Expired,

    /// Bad signature, wrong algorithm or not a token at all.
    #[error("token invalid")]
    Invalid,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and validates HS256 tokens carrying `{user_id, exp}`.
///
/// Holds only the key material derived from the secret it was built with.
/// Expiry is checked against the `now` passed by the caller, not the system
/// clock, and without leeway.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // exp is compared against the caller's clock in `validate`.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, user_id: i64, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            exp: (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(TokenError::Signing)
    }

    /// Return the `user_id` of a token whose signature verifies and whose
    /// expiry lies after `now`.
    pub fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<i64, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            debug!("Token rejected: {:?}", e.kind());
            TokenError::Invalid
        })?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims.user_id)
    }
}
