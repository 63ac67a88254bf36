use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::domain::prediction::{
    errors::LLMError,
    ports::{LLMClient, LLMReadiness},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: Option<String>,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ContentResponse,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    #[serde(default)]
    text: String,
}

impl GeminiLLMClient {
    pub fn new(api_key: Option<String>, model_name: String, base_url: String) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn endpoint(&self, api_key: &str) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model_name, api_key
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, LLMError> {
        let api_key = self.api_key.as_deref().ok_or(LLMError::MissingCredential)?;

        let response = self
            .client
            .post(self.endpoint(api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                let kind = if e.is_timeout() {
                    "Timeout"
                } else if e.is_connect() {
                    "ConnectionError"
                } else {
                    "RequestError"
                };
                LLMError::request(kind, e.without_url().to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, error_text);
            return Err(LLMError::request(
                "HttpStatus",
                format!("{} - {}", status, error_text),
            ));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to decode Gemini response: {}", e);
            LLMError::request("DecodeError", e.to_string())
        })?;

        let text = gemini_response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| LLMError::request("EmptyResponse", "no candidates returned"))?;

        debug!(chars = text.len(), "Gemini reply received");

        Ok(text)
    }
}

impl LLMClient for GeminiLLMClient {
    fn readiness(&self) -> LLMReadiness {
        match self.api_key {
            Some(_) => LLMReadiness::Ready,
            None => LLMReadiness::MissingCredential,
        }
    }

    async fn generate(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, LLMError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        self.call_gemini_api(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_key_counts_as_missing() {
        let client = GeminiLLMClient::new(
            Some("  ".to_string()),
            "gemini-1.5-pro-latest".to_string(),
            "https://example.test/v1beta".to_string(),
        );

        assert_eq!(client.readiness(), LLMReadiness::MissingCredential);
    }

    #[test]
    fn test_endpoint_includes_model_and_key() {
        let client = GeminiLLMClient::new(
            Some("k".to_string()),
            "gemini-1.5-pro-latest".to_string(),
            "https://example.test/v1beta/".to_string(),
        );

        assert_eq!(client.readiness(), LLMReadiness::Ready);
        assert_eq!(
            client.endpoint("k"),
            "https://example.test/v1beta/models/gemini-1.5-pro-latest:generateContent?key=k"
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_sends_nothing() {
        let client = GeminiLLMClient::new(
            None,
            "gemini-1.5-pro-latest".to_string(),
            "http://127.0.0.1:9".to_string(),
        );

        assert_eq!(
            client.generate("p".to_string(), serde_json::json!({})).await,
            Err(LLMError::MissingCredential)
        );
    }
}
