//! OpenAI provider implementation
//!
//! Speaks the chat-completions API. The system prompt, when present,
//! rides as a leading system message.

use super::*;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// OpenAI chat-completions provider
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    client: Client,
    config: ProviderConfig,
}

impl OpenAIProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

impl LlmProvider for OpenAIProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system_prompt) = request.system_prompt {
            messages.push(OpenAIMessage { role: "system".into(), content: system_prompt });
        }
        messages.push(OpenAIMessage { role: "user".into(), content: request.prompt });

        let api_request = OpenAIRequest {
            model: self.config.model.clone(),
            messages,
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut req = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .json(&api_request);

        if let Some(api_key) = &self.config.api_key {
            if !api_key.is_empty() {
                req = req.header("Authorization", format!("Bearer {}", api_key));
            }
        }

        for (key, value) in &self.config.headers {
            req = req.header(key, value);
        }

        let response = req
            .send()
            .await
            .map_err(|e| error::network_error(e.to_string()).with_operation("openai::complete"))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();

            if status == 429 {
                return Err(error::rate_limited(text).with_operation("openai::complete"));
            } else if status == 401 {
                return Err(error::authentication_error(text).with_operation("openai::complete"));
            }

            return Err(error::api_error(status, text).with_operation("openai::complete"));
        }

        let api_response: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| error::parse_error(e.to_string()).with_operation("openai::complete"))?;

        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| error::parse_error("No choices in response").with_operation("openai::complete"))?;

        Ok(choice.message.content)
    }
}

// ============================================================================
// OpenAI API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct OpenAIRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIMessage,
}
