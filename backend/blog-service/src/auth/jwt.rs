use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, TokenData, Validation};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 24;
const JWT_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims: standard fields plus the username, so handlers can build
/// profile redirects without a user lookup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Username of the subject
    pub username: String,
}

/// Token response returned by the login endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

static JWT_ENCODING_KEY: OnceCell<EncodingKey> = OnceCell::new();
static JWT_DECODING_KEY: OnceCell<DecodingKey> = OnceCell::new();

/// Install the signing secret. Idempotent so test binaries can initialize
/// from multiple entry points.
pub fn initialize_jwt_secret(secret: &str) {
    let _ = JWT_ENCODING_KEY.set(EncodingKey::from_secret(secret.as_bytes()));
    let _ = JWT_DECODING_KEY.set(DecodingKey::from_secret(secret.as_bytes()));
}

/// Issue an access token for a user
pub fn generate_access_token(user_id: Uuid, username: &str) -> Result<TokenResponse> {
    let key = JWT_ENCODING_KEY
        .get()
        .ok_or_else(|| AppError::Internal("JWT keys not initialized".to_string()))?;

    let now = Utc::now();
    let expires_in = Duration::hours(ACCESS_TOKEN_EXPIRY_HOURS);
    let claims = Claims {
        sub: user_id.to_string(),
        iat: now.timestamp(),
        exp: (now + expires_in).timestamp(),
        username: username.to_string(),
    };

    let access_token = encode(&Header::new(JWT_ALGORITHM), &claims, key)
        .map_err(|e| AppError::Internal(format!("token encoding failed: {}", e)))?;

    Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in: expires_in.num_seconds(),
    })
}

/// Validate a bearer token and return its claims
pub fn validate_token(token: &str) -> Result<TokenData<Claims>> {
    let key = JWT_DECODING_KEY
        .get()
        .ok_or_else(|| AppError::Internal("JWT keys not initialized".to_string()))?;

    decode::<Claims>(token, key, &Validation::new(JWT_ALGORITHM))
        .map_err(|e| AppError::Unauthorized(format!("invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        initialize_jwt_secret("unit-test-secret");

        let user_id = Uuid::new_v4();
        let token = generate_access_token(user_id, "leo").unwrap();
        assert_eq!(token.token_type, "bearer");

        let data = validate_token(&token.access_token).unwrap();
        assert_eq!(data.claims.sub, user_id.to_string());
        assert_eq!(data.claims.username, "leo");
    }

    #[test]
    fn garbage_token_is_rejected() {
        initialize_jwt_secret("unit-test-secret");
        assert!(validate_token("not-a-token").is_err());
    }
}
