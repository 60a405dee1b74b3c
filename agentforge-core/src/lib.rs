//! # agentforge-core
//!
//! Domain crate for the agent generation engine: everything between a raw
//! user specification and a post-processed block of agent source code.
//!
//! ## Core Concepts
//!
//! - **Specification**: A schemaless key/value mapping describing the agent
//!   the user wants. Any key may be absent; unknown keys ride along untouched.
//! - **Framework**: One of four fixed code-generation profiles. Each carries
//!   a static keyword table used for rule-based selection.
//! - **Selector**: Resolves a specification to a framework via explicit
//!   override, LLM classification, or weighted keyword scoring.
//! - **Adapter**: Per-framework strategy object holding the prompt template,
//!   text-splicing post-processor, and auxiliary file boilerplate.
//! - **Provider**: Trait-based LLM backends (OpenAI chat completions,
//!   Anthropic messages) behind a prefix-dispatching client.
//!
//! ## Design Philosophy
//!
//! - Selection is total: any specification resolves to a framework
//! - Post-processing is pure text splicing, idempotent by presence checks
//! - Backend errors propagate unmodified; shells decide how to present them

pub mod adapter;
pub mod error;
pub mod framework;
pub mod generator;
pub mod provider;
pub mod selector;
pub mod spec;

pub use adapter::{
    adapter_for, adapter_for_tag, FrameworkAdapter, LangChainAdapter, LlamaIndexAdapter,
    OpenAIAssistantsAdapter, SmallAgentsAdapter,
};
pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use framework::Framework;
pub use generator::CodeGenerator;
pub use provider::{
    AnthropicProvider, CompletionRequest, LlmClient, LlmProvider, OpenAIProvider, ProviderConfig,
};
pub use selector::FrameworkSelector;
pub use spec::AgentSpec;
