use tracing::info;

use crate::{
    domain::{
        common::{ClinicConfig, services::Service},
        prediction::ports::{LLMClient, LLMReadiness},
    },
    infrastructure::{
        crypto::argon2_hasher::Argon2HasherRepository,
        db::postgres::Postgres,
        health::repositories::health_check_repository::PostgresHealthCheckRepository,
        jwt::jwt_repository::JwtTokenRepository,
        llm::AnyLLMClient,
        patient::repositories::patient_profile_repository::PostgresPatientProfileRepository,
        prediction::repositories::prediction_repository::PostgresPredictionRepository,
        symptom::repositories::symptom_repository::PostgresSymptomRepository,
        user::repositories::user_repository::PostgresUserRepository,
    },
};

pub type ClinicService = Service<
    PostgresUserRepository,
    PostgresPatientProfileRepository,
    PostgresSymptomRepository,
    PostgresPredictionRepository,
    Argon2HasherRepository,
    JwtTokenRepository,
    PostgresHealthCheckRepository,
    AnyLLMClient,
>;

/// Wires the Postgres adapters, the password hasher, the token signer and
/// the build's AI client into one service.
pub async fn create_service(config: ClinicConfig) -> Result<ClinicService, anyhow::Error> {
    let postgres = Postgres::new(&config.database).await?;
    let db = postgres.get_db();

    let llm_client = AnyLLMClient::from_config(&config.llm);
    match llm_client.readiness() {
        LLMReadiness::Ready => info!(model = %config.llm.gemini_model, "AI client ready"),
        LLMReadiness::MissingCredential => {
            info!("GEMINI_API_KEY not set, predictions will record configuration errors")
        }
        LLMReadiness::Unavailable => {
            info!("built without an AI client, predictions will record missing-module errors")
        }
    }

    Ok(Service::new(
        PostgresUserRepository::new(db.clone()),
        PostgresPatientProfileRepository::new(db.clone()),
        PostgresSymptomRepository::new(db.clone()),
        PostgresPredictionRepository::new(db.clone()),
        Argon2HasherRepository::new(),
        JwtTokenRepository::new(&config.auth),
        PostgresHealthCheckRepository::new(db),
        llm_client,
    ))
}
