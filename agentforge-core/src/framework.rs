//! Framework profiles
//!
//! The four code-generation profiles and their static selection tables.
//! The enumeration order is load-bearing: rule-based scoring and the
//! classifier reply scan both resolve ties in this order.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four supported agent frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Framework {
    #[serde(rename = "llamaindex")]
    LlamaIndex,
    #[serde(rename = "langchain")]
    LangChain,
    #[serde(rename = "smallagents")]
    SmallAgents,
    #[serde(rename = "openai_assistants")]
    OpenAIAssistants,
}

impl Framework {
    /// All frameworks in the fixed enumeration order.
    pub const ALL: [Framework; 4] = [
        Framework::LlamaIndex,
        Framework::LangChain,
        Framework::SmallAgents,
        Framework::OpenAIAssistants,
    ];

    /// Returned when the classifier reply names no known framework.
    pub const FALLBACK: Framework = Framework::LangChain;

    /// Canonical lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::LlamaIndex => "llamaindex",
            Framework::LangChain => "langchain",
            Framework::SmallAgents => "smallagents",
            Framework::OpenAIAssistants => "openai_assistants",
        }
    }

    /// Human-facing name used in menus and prompts.
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::LlamaIndex => "LlamaIndex",
            Framework::LangChain => "LangChain",
            Framework::SmallAgents => "SmallAgents",
            Framework::OpenAIAssistants => "OpenAI Assistants",
        }
    }

    /// One-line strength summary used in menus, the classifier prompt,
    /// and the web catalog.
    pub fn tagline(&self) -> &'static str {
        match self {
            Framework::LlamaIndex => "Best for document retrieval and RAG applications",
            Framework::LangChain => "Best for workflow and chain-of-thought operations",
            Framework::SmallAgents => "Best for lightweight, specific-purpose agents",
            Framework::OpenAIAssistants => "Best for leveraging OpenAI's agent capabilities",
        }
    }

    /// Parse a framework tag, case-insensitively.
    pub fn parse(s: &str) -> Result<Framework> {
        match s.to_lowercase().as_str() {
            "llamaindex" => Ok(Framework::LlamaIndex),
            "langchain" => Ok(Framework::LangChain),
            "smallagents" => Ok(Framework::SmallAgents),
            "openai_assistants" => Ok(Framework::OpenAIAssistants),
            _ => Err(Error::unsupported_framework(s)),
        }
    }

    /// Capability keywords and their weights for rule-based scoring.
    ///
    /// A keyword scores when it appears as a substring of a declared
    /// capability (full weight) or of the use case (half weight).
    pub fn capability_weights(&self) -> &'static [(&'static str, f64)] {
        match self {
            Framework::LlamaIndex => &[
                ("document_retrieval", 0.9),
                ("rag", 0.95),
                ("indexing", 0.9),
                ("query_engine", 0.85),
                ("document_processing", 0.8),
            ],
            Framework::LangChain => &[
                ("workflow", 0.9),
                ("chain_of_thought", 0.95),
                ("tool_use", 0.85),
                ("memory", 0.8),
                ("agent_orchestration", 0.9),
            ],
            Framework::SmallAgents => &[
                ("lightweight", 0.95),
                ("specific_purpose", 0.9),
                ("efficiency", 0.85),
                ("simplicity", 0.9),
            ],
            Framework::OpenAIAssistants => &[
                ("openai_integration", 0.95),
                ("function_calling", 0.9),
                ("retrieval", 0.8),
                ("code_interpreter", 0.85),
                ("vision", 0.8),
            ],
        }
    }

    /// Domain keywords that earn a flat use-case bonus (once per
    /// framework, however many of them match).
    pub fn bonus_keywords(&self) -> &'static [&'static str] {
        match self {
            Framework::LlamaIndex => &["document", "retrieval", "rag"],
            Framework::LangChain => &["workflow", "chain", "orchestration"],
            Framework::SmallAgents => &["lightweight", "simple", "specific"],
            Framework::OpenAIAssistants => &["openai", "function_calling", "vision"],
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!(Framework::parse("llamaindex").unwrap(), Framework::LlamaIndex);
        assert_eq!(Framework::parse("langchain").unwrap(), Framework::LangChain);
        assert_eq!(Framework::parse("smallagents").unwrap(), Framework::SmallAgents);
        assert_eq!(
            Framework::parse("openai_assistants").unwrap(),
            Framework::OpenAIAssistants
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Framework::parse("LangChain").unwrap(), Framework::LangChain);
        assert_eq!(Framework::parse("LLAMAINDEX").unwrap(), Framework::LlamaIndex);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = Framework::parse("autogen").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFramework);
        assert_eq!(err.message(), "Unsupported framework: autogen");
    }

    #[test]
    fn test_display_matches_tag() {
        for framework in Framework::ALL {
            assert_eq!(framework.to_string(), framework.as_str());
        }
    }

    #[test]
    fn test_serde_uses_lowercase_tags() {
        let encoded = serde_json::to_string(&Framework::OpenAIAssistants).unwrap();
        assert_eq!(encoded, "\"openai_assistants\"");
        let decoded: Framework = serde_json::from_str("\"llamaindex\"").unwrap();
        assert_eq!(decoded, Framework::LlamaIndex);
    }

    #[test]
    fn test_every_framework_has_a_profile() {
        for framework in Framework::ALL {
            assert!(!framework.capability_weights().is_empty());
            assert!(!framework.bonus_keywords().is_empty());
            assert!(!framework.tagline().is_empty());
        }
    }
}
