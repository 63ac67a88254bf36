use tracing::{error, info, warn};

use crate::domain::prediction::{
    entities::PredictionResult,
    errors::{LLMError, PredictionFailure},
    extractor::extract_json_payload,
    ports::{LLMClient, LLMReadiness},
    prompt::prediction_response_schema,
    recorder::normalize_payload,
};

/// What the AI round-trip produced. A failed round-trip still carries a
/// result: the sentinel describing the failure.
#[derive(Debug, Clone, PartialEq)]
pub struct AiOutcome {
    pub result: PredictionResult,
    pub raw_response: String,
    pub failure: Option<PredictionFailure>,
}

impl AiOutcome {
    fn failed(failure: PredictionFailure) -> Self {
        let (result, raw_response) = failure.sentinel();

        Self {
            result,
            raw_response,
            failure: Some(failure),
        }
    }
}

/// Sends the prompt to the model and turns the reply into a result.
/// Never fails: every error becomes a sentinel outcome.
pub async fn consult_ai<L: LLMClient>(client: &L, prompt: String) -> AiOutcome {
    match client.readiness() {
        LLMReadiness::Ready => {}
        LLMReadiness::MissingCredential => {
            warn!("AI credential missing, storing configuration sentinel");
            return AiOutcome::failed(LLMError::MissingCredential.into());
        }
        LLMReadiness::Unavailable => {
            warn!("AI client not built in, storing module sentinel");
            return AiOutcome::failed(LLMError::Unavailable.into());
        }
    }

    let reply = match client.generate(prompt, prediction_response_schema()).await {
        Ok(reply) => reply,
        Err(e) => {
            error!("AI request failed: {}", e);
            return AiOutcome::failed(e.into());
        }
    };

    match extract_json_payload(&reply) {
        Ok(payload) => {
            let result = normalize_payload(&payload.fields);
            info!(
                diagnosis = %result.primary_diagnosis,
                confidence = result.confidence_percentage,
                risk = result.risk_level.as_str(),
                "AI assessment parsed"
            );

            AiOutcome {
                result,
                raw_response: payload.candidate,
                failure: None,
            }
        }
        Err(e) => {
            warn!("AI reply could not be parsed: {}", e);
            AiOutcome::failed(e.into())
        }
    }
}
