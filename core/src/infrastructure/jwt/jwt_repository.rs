use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, error};

use crate::domain::{
    authentication::{entities::JwtClaim, ports::TokenRepository},
    common::{AuthConfig, entities::app_errors::CoreError},
};

/// HS256 tokens signed with the configured shared secret.
#[derive(Clone)]
pub struct JwtTokenRepository {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: i64,
}

impl JwtTokenRepository {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl_seconds: config.token_ttl_seconds,
        }
    }
}

impl TokenRepository for JwtTokenRepository {
    fn sign(&self, claims: JwtClaim) -> Result<String, CoreError> {
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    fn verify(&self, token: String) -> Result<JwtClaim, CoreError> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<JwtClaim>(&token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                CoreError::InvalidToken
            })
    }

    fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::user::entities::UserType;

    fn repository(secret: &str) -> JwtTokenRepository {
        JwtTokenRepository::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_seconds: 600,
        })
    }

    fn claims(issued_at: i64, ttl: i64) -> JwtClaim {
        JwtClaim {
            sub: Uuid::new_v4(),
            user_type: UserType::Patient,
            iat: issued_at,
            exp: issued_at + ttl,
        }
    }

    #[test]
    fn test_signed_token_verifies() {
        let repository = repository("clinic-secret");
        let claims = claims(Utc::now().timestamp(), 600);

        let token = repository.sign(claims.clone()).unwrap();

        assert_eq!(repository.verify(token), Ok(claims));
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = repository("one")
            .sign(claims(Utc::now().timestamp(), 600))
            .unwrap();

        assert_eq!(repository("two").verify(token), Err(CoreError::InvalidToken));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let repository = repository("clinic-secret");
        let token = repository
            .sign(claims(Utc::now().timestamp() - 7200, 600))
            .unwrap();

        assert_eq!(repository.verify(token), Err(CoreError::InvalidToken));
    }
}
