use chrono::Utc;
use tracing::{info, warn};

use crate::domain::{
    authentication::{
        entities::{AuthToken, JwtClaim},
        ports::{AuthService, TokenRepository},
        value_objects::{AuthorizeRequestInput, Identity, LoginInput, RegisterAdminInput},
    },
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    patient::ports::PatientProfileRepository,
    prediction::ports::{LLMClient, PredictionRepository},
    symptom::ports::SymptomRepository,
    user::{
        entities::{User, UserType},
        ports::UserRepository,
        value_objects::CreateUserRequest,
    },
};

impl<U, PP, S, PR, H, T, HC, LLM> AuthService for Service<U, PP, S, PR, H, T, HC, LLM>
where
    U: UserRepository,
    PP: PatientProfileRepository,
    S: SymptomRepository,
    PR: PredictionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn register_admin(&self, input: RegisterAdminInput) -> Result<User, CoreError> {
        if input.password.is_empty() {
            return Err(CoreError::Invalid("password is required".to_string()));
        }

        if input.password != input.password_confirmation {
            return Err(CoreError::Invalid("passwords do not match".to_string()));
        }

        if self
            .user_repository
            .get_by_username(input.username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let user = self
            .user_repository
            .create_user(User::new(CreateUserRequest {
                username: input.username,
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
                phone_number: input.phone_number,
                age: input.age,
                gender: String::new(),
                date_of_birth: input.date_of_birth,
                user_type: UserType::Admin,
                password_hash,
            }))
            .await?;

        info!(user_id = %user.id, "admin {} registered", user.username);

        Ok(user)
    }

    async fn login(&self, input: LoginInput) -> Result<AuthToken, CoreError> {
        let user = self
            .user_repository
            .get_by_username(input.username.clone())
            .await?
            .ok_or_else(|| {
                warn!("login attempt for unknown user {}", input.username);
                CoreError::InvalidCredentials
            })?;

        let valid = self
            .hasher_repository
            .verify_password(input.password, user.password_hash.clone())
            .await?;

        if !valid {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(CoreError::InvalidCredentials);
        }

        let ttl = self.token_repository.ttl_seconds();
        let claims = JwtClaim::new(&user, Utc::now().timestamp(), ttl);
        let access_token = self.token_repository.sign(claims)?;

        info!(user_id = %user.id, "user {} logged in", user.username);

        Ok(AuthToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: ttl,
            user,
        })
    }

    async fn authorize_request(&self, input: AuthorizeRequestInput) -> Result<Identity, CoreError> {
        let claims = self.token_repository.verify(input.token)?;

        let user = self
            .user_repository
            .get_by_id(claims.sub)
            .await?
            .ok_or(CoreError::InvalidToken)?;

        Ok(Identity::new(user))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::common::test_utils::{ServiceMocks, admin_user, patient_user, ready};

    fn admin_registration(confirmation: &str) -> RegisterAdminInput {
        RegisterAdminInput {
            username: "dr.house".to_string(),
            email: Some("house@clinic.test".to_string()),
            first_name: "Gregory".to_string(),
            last_name: "House".to_string(),
            phone_number: "0700000001".to_string(),
            age: Some(50),
            date_of_birth: None,
            password: "vicodin".to_string(),
            password_confirmation: confirmation.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_admin_hashes_password() {
        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_username()
            .returning(|_| ready(Ok(None)));
        mocks
            .hasher_repository
            .expect_hash_password()
            .with(eq("vicodin".to_string()))
            .returning(|_| ready(Ok("argon2-hash".to_string())));
        mocks
            .user_repository
            .expect_create_user()
            .times(1)
            .returning(|user| ready(Ok(user)));

        let user = mocks
            .into_service()
            .register_admin(admin_registration("vicodin"))
            .await
            .unwrap();

        assert_eq!(user.user_type, UserType::Admin);
        assert_eq!(user.password_hash, "argon2-hash");
        assert_eq!(user.gender, "other");
    }

    #[tokio::test]
    async fn test_register_admin_rejects_mismatched_passwords() {
        let mut mocks = ServiceMocks::new();
        mocks.user_repository.expect_create_user().times(0);

        let result = mocks
            .into_service()
            .register_admin(admin_registration("something-else"))
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_login_issues_bearer_token() {
        let user = patient_user();
        let user_id = user.id;

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_username()
            .returning(move |_| ready(Ok(Some(user.clone()))));
        mocks
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| ready(Ok(true)));
        mocks
            .token_repository
            .expect_ttl_seconds()
            .return_const(3600_i64);
        mocks
            .token_repository
            .expect_sign()
            .withf(move |claims| claims.sub == user_id && claims.exp - claims.iat == 3600)
            .returning(|_| Ok("signed.jwt.token".to_string()));

        let token = mocks
            .into_service()
            .login(LoginInput {
                username: "patient".to_string(),
                password: "secret".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(token.access_token, "signed.jwt.token");
        assert_eq!(token.token_type, "Bearer");
        assert_eq!(token.expires_in, 3600);
        assert_eq!(token.user.id, user_id);
    }

    #[tokio::test]
    async fn test_login_with_wrong_password_is_rejected() {
        let user = admin_user();

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_username()
            .returning(move |_| ready(Ok(Some(user.clone()))));
        mocks
            .hasher_repository
            .expect_verify_password()
            .returning(|_, _| ready(Ok(false)));
        mocks.token_repository.expect_sign().times(0);

        let result = mocks
            .into_service()
            .login(LoginInput {
                username: "doctor".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_login_for_unknown_user_is_rejected() {
        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_username()
            .returning(|_| ready(Ok(None)));
        mocks.hasher_repository.expect_verify_password().times(0);

        let result = mocks
            .into_service()
            .login(LoginInput {
                username: "ghost".to_string(),
                password: "secret".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_authorize_request_resolves_identity() {
        let user = admin_user();
        let user_id = user.id;
        let claims = JwtClaim::new(&user, 0, 60);

        let mut mocks = ServiceMocks::new();
        mocks
            .token_repository
            .expect_verify()
            .with(eq("token".to_string()))
            .returning(move |_| Ok(claims.clone()));
        mocks
            .user_repository
            .expect_get_by_id()
            .with(eq(user_id))
            .returning(move |_| ready(Ok(Some(user.clone()))));

        let identity = mocks
            .into_service()
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(identity.id(), user_id);
        assert_eq!(identity.user_type(), UserType::Admin);
    }

    #[tokio::test]
    async fn test_authorize_request_for_deleted_user_is_invalid() {
        let claims = JwtClaim::new(&patient_user(), 0, 60);

        let mut mocks = ServiceMocks::new();
        mocks
            .token_repository
            .expect_verify()
            .returning(move |_| Ok(claims.clone()));
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(|_| ready(Ok(None)));

        let result = mocks
            .into_service()
            .authorize_request(AuthorizeRequestInput {
                token: "token".to_string(),
            })
            .await;

        assert_eq!(result, Err(CoreError::InvalidToken));
    }
}
