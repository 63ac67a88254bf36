use std::future::Future;

use crate::domain::{
    authentication::{
        entities::{AuthToken, JwtClaim},
        value_objects::{AuthorizeRequestInput, Identity, LoginInput, RegisterAdminInput},
    },
    common::entities::app_errors::CoreError,
    user::entities::User,
};

#[cfg_attr(test, mockall::automock)]
pub trait TokenRepository: Send + Sync {
    fn sign(&self, claims: JwtClaim) -> Result<String, CoreError>;

    fn verify(&self, token: String) -> Result<JwtClaim, CoreError>;

    fn ttl_seconds(&self) -> i64;
}

pub trait AuthService: Send + Sync {
    fn register_admin(
        &self,
        input: RegisterAdminInput,
    ) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<AuthToken, CoreError>> + Send;

    fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
