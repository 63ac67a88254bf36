use crate::domain::prediction::{
    errors::LLMError,
    ports::{LLMClient, LLMReadiness},
};

/// Stand-in for builds compiled without an AI backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableLLMClient;

impl LLMClient for UnavailableLLMClient {
    fn readiness(&self) -> LLMReadiness {
        LLMReadiness::Unavailable
    }

    async fn generate(
        &self,
        _prompt: String,
        _response_schema: serde_json::Value,
    ) -> Result<String, LLMError> {
        Err(LLMError::Unavailable)
    }
}
