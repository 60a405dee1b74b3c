//! Anthropic Claude provider implementation
//!
//! Speaks the messages API. The system prompt rides in the dedicated
//! `system` field, sent as an empty string when absent.

use super::*;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Anthropic Claude provider
#[derive(Debug, Clone)]
pub struct AnthropicProvider {
    client: Client,
    config: ProviderConfig,
}

impl AnthropicProvider {
    pub fn new(config: ProviderConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

impl LlmProvider for AnthropicProvider {
    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.config.model
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        // A key is required here, unlike OpenAI where anonymous requests
        // are left to the API to reject.
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                error::authentication_error("ANTHROPIC_API_KEY is not set")
                    .with_operation("anthropic::complete")
            })?;

        let api_request = AnthropicRequest {
            model: self.config.model.clone(),
            system: request.system_prompt.unwrap_or_default(),
            messages: vec![AnthropicMessage { role: "user".into(), content: request.prompt }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut req = self
            .client
            .post(format!("{}/messages", self.config.base_url))
            .header("x-api-key", api_key)
            .header("content-type", "application/json")
            .json(&api_request);

        for (key, value) in &self.config.headers {
            req = req.header(key, value);
        }

        let response = req
            .send()
            .await
            .map_err(|e| error::network_error(e.to_string()).with_operation("anthropic::complete"))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();

            if status == 429 {
                return Err(error::rate_limited(text).with_operation("anthropic::complete"));
            } else if status == 401 {
                return Err(error::authentication_error(text).with_operation("anthropic::complete"));
            }

            return Err(error::api_error(status, text).with_operation("anthropic::complete"));
        }

        let api_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| error::parse_error(e.to_string()).with_operation("anthropic::complete"))?;

        let block = api_response
            .content
            .into_iter()
            .next()
            .ok_or_else(|| error::parse_error("No content in response").with_operation("anthropic::complete"))?;

        let ContentBlock::Text { text } = block;
        Ok(text)
    }
}

// ============================================================================
// Anthropic API Types
// ============================================================================

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    system: String,
    messages: Vec<AnthropicMessage>,
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let api_request = AnthropicRequest {
            model: "claude-2".into(),
            system: String::new(),
            messages: vec![AnthropicMessage { role: "user".into(), content: "hello".into() }],
            temperature: 0.5,
            max_tokens: 4000,
        };
        let encoded = serde_json::to_value(&api_request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "model": "claude-2",
                "system": "",
                "messages": [{ "role": "user", "content": "hello" }],
                "temperature": 0.5,
                "max_tokens": 4000,
            })
        );
    }

    #[test]
    fn test_response_parses_text_block() {
        let payload = json!({
            "id": "msg_1",
            "model": "claude-2",
            "content": [{ "type": "text", "text": "hi there" }],
            "stop_reason": "end_turn",
        });
        let response: AnthropicResponse = serde_json::from_value(payload).unwrap();
        let ContentBlock::Text { text } = &response.content[0];
        assert_eq!(text, "hi there");
    }

    #[tokio::test]
    async fn test_missing_key_is_an_authentication_error() {
        let config = ProviderConfig::anthropic("claude-2").with_api_key("");
        let provider = AnthropicProvider::new(config);
        let err = provider.complete(CompletionRequest::new("hello")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    }
}
