use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::entities::{User, UserType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    pub sub: Uuid,
    pub user_type: UserType,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(user: &User, issued_at: i64, ttl_seconds: i64) -> Self {
        Self {
            sub: user.id,
            user_type: user.user_type,
            iat: issued_at,
            exp: issued_at + ttl_seconds,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthToken {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}
