#[cfg(feature = "gemini")]
pub mod gemini_client;
pub mod unavailable_client;

use crate::domain::{
    common::LLMConfig,
    prediction::{
        errors::LLMError,
        ports::{LLMClient, LLMReadiness},
    },
};

#[cfg(feature = "gemini")]
use gemini_client::GeminiLLMClient;
use unavailable_client::UnavailableLLMClient;

/// The AI client picked at build time.
#[derive(Debug, Clone)]
pub enum AnyLLMClient {
    #[cfg(feature = "gemini")]
    Gemini(GeminiLLMClient),
    Unavailable(UnavailableLLMClient),
}

impl AnyLLMClient {
    #[cfg(feature = "gemini")]
    pub fn from_config(config: &LLMConfig) -> Self {
        AnyLLMClient::Gemini(GeminiLLMClient::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            config.gemini_base_url.clone(),
        ))
    }

    #[cfg(not(feature = "gemini"))]
    pub fn from_config(_config: &LLMConfig) -> Self {
        AnyLLMClient::Unavailable(UnavailableLLMClient)
    }
}

impl LLMClient for AnyLLMClient {
    fn readiness(&self) -> LLMReadiness {
        match self {
            #[cfg(feature = "gemini")]
            AnyLLMClient::Gemini(client) => client.readiness(),
            AnyLLMClient::Unavailable(client) => client.readiness(),
        }
    }

    async fn generate(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, LLMError> {
        match self {
            #[cfg(feature = "gemini")]
            AnyLLMClient::Gemini(client) => client.generate(prompt, response_schema).await,
            AnyLLMClient::Unavailable(client) => client.generate(prompt, response_schema).await,
        }
    }
}
