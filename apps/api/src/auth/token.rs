use chrono::{Duration, Utc};
use jsonwebtoken::{errors::ErrorKind, decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Token expired. Please log in again.")]
    Expired,

    #[error("Invalid token. Please log in again.")]
    Invalid,

    #[error("Token encoding failed: {0}")]
    Encode(jsonwebtoken::errors::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies HS256 session tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding_key).map_err(TokenError::Encode)
    }

    /// Verifies the signature and expiry, returning the user id.
    pub fn verify(&self, token: &str) -> Result<i64, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            },
        )?;
        data.claims.sub.parse().map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret-key-for-jwt-validation", Duration::hours(1))
    }

    #[test]
    fn test_issue_then_verify_returns_user_id() {
        let tokens = service();
        let token = tokens.issue(42).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        assert!(matches!(
            service().verify("malformed.token.format"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let token = service().issue(7).unwrap();
        let other = TokenService::new("another-secret", Duration::hours(1));
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_expired_token_is_reported_as_expired() {
        // Past the default 60s validation leeway.
        let tokens = TokenService::new("test-secret-key-for-jwt-validation", Duration::hours(-1));
        let token = tokens.issue(7).unwrap();
        let err = tokens.verify(&token).unwrap_err();
        assert!(matches!(err, TokenError::Expired));
        assert_eq!(err.to_string(), "Token expired. Please log in again.");
    }
}
