use crate::domain::{
    authentication::ports::TokenRepository, common::policies::ClinicPolicy,
    crypto::ports::HasherRepository, health::ports::HealthCheckRepository,
    patient::ports::PatientProfileRepository,
    prediction::ports::{LLMClient, PredictionRepository},
    symptom::ports::SymptomRepository, user::ports::UserRepository,
};

/// Aggregate of every port the clinic use cases need. Each domain module
/// implements its service trait on this type.
#[derive(Clone)]
pub struct Service<U, PP, S, PR, H, T, HC, LLM>
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
    pub(crate) user_repository: U,
    pub(crate) patient_profile_repository: PP,
    pub(crate) symptom_repository: S,
    pub(crate) prediction_repository: PR,
    pub(crate) hasher_repository: H,
    pub(crate) token_repository: T,
    pub(crate) health_check_repository: HC,
    pub(crate) llm_client: LLM,
    pub(crate) policy: ClinicPolicy,
}

impl<U, PP, S, PR, H, T, HC, LLM> Service<U, PP, S, PR, H, T, HC, LLM>
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
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repository: U,
        patient_profile_repository: PP,
        symptom_repository: S,
        prediction_repository: PR,
        hasher_repository: H,
        token_repository: T,
        health_check_repository: HC,
        llm_client: LLM,
    ) -> Self {
        Self {
            user_repository,
            patient_profile_repository,
            symptom_repository,
            prediction_repository,
            hasher_repository,
            token_repository,
            health_check_repository,
            llm_client,
            policy: ClinicPolicy,
        }
    }
}
