use crate::domain::{
    authentication::ports::TokenRepository,
    common::{entities::app_errors::CoreError, services::Service},
    crypto::ports::HasherRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    patient::ports::PatientProfileRepository,
    prediction::ports::{LLMClient, PredictionRepository},
    symptom::ports::SymptomRepository,
    user::ports::UserRepository,
};

impl<U, PP, S, PR, H, T, HC, LLM> HealthCheckService for Service<U, PP, S, PR, H, T, HC, LLM>
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }

    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_utils::{ServiceMocks, ready};

    #[tokio::test]
    async fn test_health_reports_ping_time() {
        let mut mocks = ServiceMocks::new();
        mocks
            .health_check_repository
            .expect_health()
            .returning(|| ready(Ok(3)));

        assert_eq!(mocks.into_service().health().await, Ok(3));
    }

    #[tokio::test]
    async fn test_readiness_propagates_database_failure() {
        let mut mocks = ServiceMocks::new();
        mocks
            .health_check_repository
            .expect_readness()
            .returning(|| ready(Err(CoreError::StorageError("connection refused".into()))));

        assert!(matches!(
            mocks.into_service().readness().await,
            Err(CoreError::StorageError(_))
        ));
    }
}
