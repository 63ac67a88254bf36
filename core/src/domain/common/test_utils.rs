use std::{future::Future, pin::Pin};

use uuid::Uuid;

use crate::domain::{
    authentication::ports::MockTokenRepository,
    common::services::Service,
    crypto::ports::MockHasherRepository,
    health::ports::MockHealthCheckRepository,
    patient::ports::MockPatientProfileRepository,
    prediction::{
        entities::{Prediction, PredictionResult},
        ports::{MockLLMClient, MockPredictionRepository},
    },
    symptom::{
        entities::{Severity, SymptomEntry},
        ports::MockSymptomRepository,
    },
    user::{
        entities::{User, UserType},
        ports::MockUserRepository,
        value_objects::CreateUserRequest,
    },
};

pub type TestService = Service<
    MockUserRepository,
    MockPatientProfileRepository,
    MockSymptomRepository,
    MockPredictionRepository,
    MockHasherRepository,
    MockTokenRepository,
    MockHealthCheckRepository,
    MockLLMClient,
>;

/// Wraps a value in the boxed future mockall expects from async ports.
pub fn ready<T: Send + 'static>(value: T) -> Pin<Box<dyn Future<Output = T> + Send>> {
    Box::pin(std::future::ready(value))
}

pub struct ServiceMocks {
    pub user_repository: MockUserRepository,
    pub patient_profile_repository: MockPatientProfileRepository,
    pub symptom_repository: MockSymptomRepository,
    pub prediction_repository: MockPredictionRepository,
    pub hasher_repository: MockHasherRepository,
    pub token_repository: MockTokenRepository,
    pub health_check_repository: MockHealthCheckRepository,
    pub llm_client: MockLLMClient,
}

impl ServiceMocks {
    pub fn new() -> Self {
        Self {
            user_repository: MockUserRepository::new(),
            patient_profile_repository: MockPatientProfileRepository::new(),
            symptom_repository: MockSymptomRepository::new(),
            prediction_repository: MockPredictionRepository::new(),
            hasher_repository: MockHasherRepository::new(),
            token_repository: MockTokenRepository::new(),
            health_check_repository: MockHealthCheckRepository::new(),
            llm_client: MockLLMClient::new(),
        }
    }

    pub fn into_service(self) -> TestService {
        Service::new(
            self.user_repository,
            self.patient_profile_repository,
            self.symptom_repository,
            self.prediction_repository,
            self.hasher_repository,
            self.token_repository,
            self.health_check_repository,
            self.llm_client,
        )
    }
}

fn user(username: &str, user_type: UserType) -> User {
    User::new(CreateUserRequest {
        username: username.to_string(),
        email: None,
        first_name: "Test".to_string(),
        last_name: username.to_string(),
        phone_number: "0700000000".to_string(),
        age: Some(41),
        gender: "male".to_string(),
        date_of_birth: None,
        user_type,
        password_hash: "hash".to_string(),
    })
}

pub fn admin_user() -> User {
    user("doctor", UserType::Admin)
}

pub fn patient_user() -> User {
    user("patient", UserType::Patient)
}

pub fn symptom_for(patient_id: Uuid, name: &str, severity: Severity, days: i32) -> SymptomEntry {
    SymptomEntry::new(
        patient_id,
        name.to_string(),
        severity,
        days,
        None,
        Uuid::new_v4(),
    )
    .expect("valid symptom")
}

pub fn prediction_for(patient_id: Uuid) -> Prediction {
    Prediction::new(
        patient_id,
        Uuid::new_v4(),
        PredictionResult {
            primary_diagnosis: "Migraine".to_string(),
            confidence_percentage: 70.0,
            ..PredictionResult::default()
        },
        Vec::new(),
        "{}".to_string(),
    )
}
