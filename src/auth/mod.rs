use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config;

pub mod password;

/// Claims carried by a session token. Only the user identifier and handle
/// are stored; never credential material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub handle: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(user_id: i64, handle: String) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.token_expiry_hours;
        let exp = (now + Duration::hours(expiry_hours as i64)).timestamp();

        Self { sub: user_id, handle, exp, iat: now.timestamp() }
    }

    /// Seconds until expiry, as reported to clients at login time.
    pub fn expires_in(&self) -> i64 {
        self.exp - self.iat
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token generation error: {0}")]
    Generation(String),

    #[error("Invalid or expired token")]
    Invalid,

    #[error("Signing secret not configured")]
    MissingSecret,
}

pub fn generate_token(claims: &Claims) -> Result<String, TokenError> {
    let secret = &config::config().security.secret_key;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    encode(&Header::default(), claims, &EncodingKey::from_secret(secret.as_bytes()))
        .map_err(|e| TokenError::Generation(e.to_string()))
}

pub fn validate_token(token: &str) -> Result<Claims, TokenError> {
    let secret = &config::config().security.secret_key;

    if secret.is_empty() {
        return Err(TokenError::MissingSecret);
    }

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &Validation::default())
        .map(|data| data.claims)
        .map_err(|_| TokenError::Invalid)
}
