use thiserror::Error;

use crate::domain::prediction::entities::{PredictionResult, RiskLevel};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LLMError {
    #[error("AI credential is not configured")]
    MissingCredential,

    #[error("AI client is not available in this build")]
    Unavailable,

    #[error("{kind}: {message}")]
    Request { kind: String, message: String },
}

impl LLMError {
    pub fn request(kind: impl Into<String>, message: impl Into<String>) -> Self {
        LLMError::Request {
            kind: kind.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("no JSON found in response")]
    NoJsonFound,

    #[error("{0}")]
    Parse(String),
}

/// Every way the AI round-trip can fail. None of these reach the caller:
/// each one is turned into a sentinel result and stored like a real answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionFailure {
    #[error("configuration error: {0}")]
    Configuration(LLMError),

    #[error("dependency missing: {0}")]
    DependencyMissing(LLMError),

    #[error("AI request failed: {0}")]
    Api(LLMError),

    #[error("response format error: {0}")]
    ResponseFormat(#[from] ExtractionError),
}

impl From<LLMError> for PredictionFailure {
    fn from(error: LLMError) -> Self {
        match error {
            LLMError::MissingCredential => PredictionFailure::Configuration(error),
            LLMError::Unavailable => PredictionFailure::DependencyMissing(error),
            LLMError::Request { .. } => PredictionFailure::Api(error),
        }
    }
}

impl PredictionFailure {
    /// Result shaped like a real assessment whose fields explain the failure,
    /// paired with the text stored as the raw AI response.
    pub fn sentinel(&self) -> (PredictionResult, String) {
        match self {
            PredictionFailure::Configuration(_) => (
                sentinel_result(
                    "Configuration Error",
                    "Set GEMINI_API_KEY in the service environment".to_string(),
                    "Configure environment",
                    "Set API key",
                    "System Admin",
                    "After configuration",
                ),
                "API Key not configured".to_string(),
            ),
            PredictionFailure::DependencyMissing(_) => (
                sentinel_result(
                    "Module Missing",
                    "Rebuild the service with the `gemini` feature enabled".to_string(),
                    "Enable AI client",
                    "Rebuild service",
                    "System Admin",
                    "After installation",
                ),
                "Module not found".to_string(),
            ),
            PredictionFailure::Api(error) => (
                sentinel_result(
                    "Error",
                    format!("Error: {error}"),
                    "Check logs",
                    "Consult doctor",
                    "General Practitioner",
                    "ASAP",
                ),
                format!("Error: {}", request_message(error)),
            ),
            PredictionFailure::ResponseFormat(error) => (
                sentinel_result(
                    "Parse Error",
                    format!("Failed to parse response: {error}"),
                    "Try again",
                    "Contact support",
                    "Technical Support",
                    "After fixing",
                ),
                format!("Parse Error: {error}"),
            ),
        }
    }
}

fn request_message(error: &LLMError) -> String {
    match error {
        LLMError::Request { message, .. } => message.clone(),
        other => other.to_string(),
    }
}

fn sentinel_result(
    diagnosis: &str,
    explanation: String,
    test: &str,
    lifestyle: &str,
    referral: &str,
    when_to_seek_care: &str,
) -> PredictionResult {
    PredictionResult {
        primary_diagnosis: diagnosis.to_string(),
        confidence_percentage: 0.0,
        risk_level: RiskLevel::Medium,
        explanation,
        recommended_tests: vec![test.to_string()],
        lifestyle_recommendations: vec![lifestyle.to_string()],
        specialist_referral: referral.to_string(),
        when_to_seek_care: when_to_seek_care.to_string(),
    }
}
