use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    prediction::{
        entities::Prediction,
        errors::LLMError,
        value_objects::{GeneratePredictionInput, GetPredictionInput, GetPredictionsInput},
    },
};

/// Repository trait for persisted predictions
#[cfg_attr(test, mockall::automock)]
pub trait PredictionRepository: Send + Sync {
    fn create_prediction(
        &self,
        prediction: Prediction,
    ) -> impl Future<Output = Result<Prediction, CoreError>> + Send;

    fn get_by_id(
        &self,
        prediction_id: Uuid,
    ) -> impl Future<Output = Result<Option<Prediction>, CoreError>> + Send;

    /// Newest predictions first.
    fn list_by_patient(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Prediction>, CoreError>> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LLMReadiness {
    Ready,
    MissingCredential,
    Unavailable,
}

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Checked before every call; only a `Ready` client is asked to generate.
    fn readiness(&self) -> LLMReadiness;

    fn generate(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, LLMError>> + Send;
}

/// Service trait for prediction use cases
pub trait PredictionService: Send + Sync {
    fn generate_prediction(
        &self,
        identity: Identity,
        input: GeneratePredictionInput,
    ) -> impl Future<Output = Result<Prediction, CoreError>> + Send;

    fn get_prediction(
        &self,
        identity: Identity,
        input: GetPredictionInput,
    ) -> impl Future<Output = Result<Prediction, CoreError>> + Send;

    fn get_predictions(
        &self,
        identity: Identity,
        input: GetPredictionsInput,
    ) -> impl Future<Output = Result<Vec<Prediction>, CoreError>> + Send;
}
