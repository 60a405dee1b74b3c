//! # LLM Provider Interface
//!
//! Trait-based abstraction over the hosted completion backends.
//!
//! ## Design
//!
//! - `LlmProvider` defines the core interface; `generate` and
//!   `generate_code` are provided on top of one required `complete`
//! - Concrete implementations for the OpenAI chat-completions API and
//!   the Anthropic messages API
//! - `LlmClient` dispatches to a provider by model-name prefix, so the
//!   rest of the engine only ever sees one type
//! - One request, one reply: no streaming

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicProvider;
pub use openai::OpenAIProvider;

use crate::error::{self, Result};
use crate::spec::AgentSpec;
use std::collections::HashMap;

// =============================================================================
// Constants
// =============================================================================

/// Default sampling temperature for free-form generation.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default completion token budget.
pub const DEFAULT_MAX_TOKENS: usize = 4000;

/// Temperature for code generation, kept low for determinism.
pub const CODE_TEMPERATURE: f32 = 0.2;

// =============================================================================
// Request
// =============================================================================

/// Parameters for a single completion call.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub temperature: f32,
    pub max_tokens: usize,
}

impl CompletionRequest {
    /// Create a request with the default sampling parameters.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

// =============================================================================
// Provider trait
// =============================================================================

/// The main LLM provider trait.
#[allow(async_fn_in_trait)]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logs (e.g., "openai", "anthropic").
    fn name(&self) -> &str;

    /// The model requests are sent as.
    fn model(&self) -> &str;

    /// Send a completion request and return the reply text.
    async fn complete(&self, request: CompletionRequest) -> Result<String>;

    /// Prompt-to-text helper with the default sampling parameters.
    async fn generate(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String> {
        let mut request = CompletionRequest::new(prompt);
        if let Some(system_prompt) = system_prompt {
            request = request.with_system_prompt(system_prompt);
        }
        self.complete(request).await
    }

    /// Generate agent source code for a specification.
    async fn generate_code(&self, spec: &AgentSpec, language: &str) -> Result<String> {
        let system_prompt = format!(
            "You are an expert {language} developer specializing in LLM agents.\n\
             Your task is to generate clean, well-documented {language} code based on the provided specifications.\n\
             Follow best practices and include appropriate error handling.\n\
             Only output the code without any explanations or markdown formatting."
        );

        let spec_text = spec.render();
        let prompt = format!(
            "Generate {language} code for an LLM agent with the following specifications:\n\
             {spec}\n\n\
             The code should be complete and ready to run, including all necessary imports and class/function definitions.",
            spec = spec_text.trim_end(),
        );

        self.complete(
            CompletionRequest::new(prompt)
                .with_system_prompt(system_prompt)
                .with_temperature(CODE_TEMPERATURE),
        )
        .await
    }
}

// =============================================================================
// Provider configuration
// =============================================================================

/// Connection settings for a hosted backend.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub model: String,
    pub api_key: Option<String>,
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub timeout_secs: u64,
}

impl ProviderConfig {
    /// OpenAI settings with the key taken from `OPENAI_API_KEY`.
    pub fn openai(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: "https://api.openai.com/v1".to_string(),
            headers: HashMap::new(),
            timeout_secs: 120,
        }
    }

    /// Anthropic settings with the key taken from `ANTHROPIC_API_KEY`.
    pub fn anthropic(model: impl Into<String>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("anthropic-version".to_string(), "2023-06-01".to_string());

        Self {
            model: model.into(),
            api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            base_url: "https://api.anthropic.com/v1".to_string(),
            headers,
            timeout_secs: 120,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

// =============================================================================
// Prefix-dispatching client
// =============================================================================

/// Concrete provider resolved from a model-name prefix.
///
/// Models starting with `gpt` go to OpenAI and `claude` to Anthropic.
/// Anything else is rejected at construction time.
#[derive(Debug, Clone)]
pub enum LlmClient {
    OpenAI(OpenAIProvider),
    Anthropic(AnthropicProvider),
}

impl LlmClient {
    /// Resolve the provider for a model name.
    pub fn for_model(model: &str) -> Result<Self> {
        if model.starts_with("gpt") {
            Ok(LlmClient::OpenAI(OpenAIProvider::new(ProviderConfig::openai(model))))
        } else if model.starts_with("claude") {
            Ok(LlmClient::Anthropic(AnthropicProvider::new(ProviderConfig::anthropic(model))))
        } else {
            Err(error::unsupported_model(model).with_operation("LlmClient::for_model"))
        }
    }
}

impl LlmProvider for LlmClient {
    fn name(&self) -> &str {
        match self {
            LlmClient::OpenAI(provider) => provider.name(),
            LlmClient::Anthropic(provider) => provider.name(),
        }
    }

    fn model(&self) -> &str {
        match self {
            LlmClient::OpenAI(provider) => provider.model(),
            LlmClient::Anthropic(provider) => provider.model(),
        }
    }

    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        match self {
            LlmClient::OpenAI(provider) => provider.complete(request).await,
            LlmClient::Anthropic(provider) => provider.complete(request).await,
        }
    }
}
