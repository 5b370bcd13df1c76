use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPIRATION_SECONDS: u64 = 3600;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

struct Inner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    expiration_seconds: i64,
}

/// HS256 signing and verification keys, built once and shared.
#[derive(Clone)]
pub struct JwtKeys(Arc<Inner>);

impl JwtKeys {
    pub fn new(secret: &str, expiration_seconds: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self(Arc::new(Inner {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiration_seconds: i64::try_from(expiration_seconds).unwrap_or(i64::MAX),
        }))
    }

    pub fn issue(&self, user_id: i64) -> laptop_review_shared::Result<String> {
        self.issue_at(user_id, laptop_review_shared::now())
    }

    fn issue_at(&self, user_id: i64, iat: i64) -> laptop_review_shared::Result<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp: iat.saturating_add(self.0.expiration_seconds),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.0.encoding,
        )?)
    }

    /// Returns the user id carried by a valid token.
    pub fn verify(&self, token: &str) -> laptop_review_shared::Result<i64> {
        let claims = decode::<Claims>(token, &self.0.decoding, &self.0.validation)
            .map(|data| data.claims)
            .ok();

        match claims.and_then(|c| c.sub.parse::<i64>().ok()) {
            Some(user_id) => Ok(user_id),
            None => laptop_review_shared::unauthorized!("invalid or expired token"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret_key_minimum_32_characters_long";

    #[test]
    fn test_issue_and_verify() {
        let keys = JwtKeys::new(SECRET, DEFAULT_EXPIRATION_SECONDS);
        let token = keys.issue(42).unwrap();

        assert_eq!(keys.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_wrong_secret_fails_verification() {
        let token = JwtKeys::new(SECRET, 60).issue(1).unwrap();
        let other = JwtKeys::new("another_secret_key_minimum_32_characters", 60);

        let err = other.verify(&token).unwrap_err();
        assert_eq!(err.to_string(), "invalid or expired token");
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = JwtKeys::new(SECRET, 60);
        let token = keys
            .issue_at(1, laptop_review_shared::now() - 3600)
            .unwrap();

        assert!(matches!(
            keys.verify(&token),
            Err(laptop_review_shared::Error::Unauthorized(_))
        ));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let keys = JwtKeys::new(SECRET, 60);
        let mut token = keys.issue(7).unwrap();
        token.push('x');

        assert!(keys.verify(&token).is_err());
        assert!(keys.verify("not.a.token").is_err());
        assert!(keys.verify("").is_err());
    }

    #[test]
    fn test_non_numeric_subject_is_rejected() {
        let keys = JwtKeys::new(SECRET, 60);
        let now = laptop_review_shared::now();
        let claims = Claims {
            sub: "admin".to_owned(),
            iat: now,
            exp: now + 60,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(keys.verify(&token).is_err());
    }
}
