//! LlamaIndex adapter
//!
//! Specializes in document retrieval and RAG applications.

use super::FrameworkAdapter;
use crate::framework::Framework;

/// Adapter for the LlamaIndex framework
#[derive(Debug)]
pub struct LlamaIndexAdapter;

impl FrameworkAdapter for LlamaIndexAdapter {
    fn framework(&self) -> Framework {
        Framework::LlamaIndex
    }

    fn prompt_template(&self) -> &'static str {
        r#"
Generate {language} code for an LLM agent using the LlamaIndex framework with the following specifications:

{specifications}

The code should include:
1. All necessary imports for LlamaIndex
2. Document loading and indexing functionality
3. Query engine setup
4. Response synthesis
5. Error handling and logging
6. Any additional functionality required by the specifications

Make sure the code follows LlamaIndex best practices and is well-documented.
"#
    }

    fn standard_imports(&self) -> &'static [&'static str] {
        &[
            "import os",
            "import logging",
            "from typing import List, Dict, Any, Optional",
            "from llama_index import VectorStoreIndex, SimpleDirectoryReader, ServiceContext",
            "from llama_index.llms import OpenAI",
            "from llama_index.embeddings import OpenAIEmbedding",
        ]
    }

    fn main_block(&self) -> &'static str {
        r#"

if __name__ == "__main__":
    try:
        # Initialize the agent
        agent = LlamaIndexAgent()
        
        # Example query
        response = agent.query("Your query here")
        print(f"Response: {response}")
    except Exception as e:
        logging.error(f"Error running agent: {e}")
"#
    }

    fn env_template(&self) -> &'static str {
        r#"# LlamaIndex Agent Environment Variables
OPENAI_API_KEY=your_openai_api_key_here
"#
    }

    fn requirements(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("llama-index", ">=0.8.0"),
            ("openai", ">=1.0.0"),
            ("python-dotenv", ">=1.0.0"),
        ]
    }

    fn readme(&self, spec_text: &str) -> String {
        format!(
            r#"# LlamaIndex Agent

This agent was generated using the LLM Agent Generation Engine.

## Setup

1. Copy `.env.template` to `.env` and add your API keys
2. Install the required packages: `pip install -r requirements.txt`
3. Run the agent: `python agent.py`

## Specifications

{spec_text}

## Framework

This agent uses the LlamaIndex framework, which is specialized for document retrieval and RAG applications.
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::AgentSpec;

    #[test]
    fn test_main_block_names_the_agent_class() {
        let adapter = LlamaIndexAdapter;
        let processed = adapter.post_process("", &AgentSpec::new());
        assert!(processed.contains("agent = LlamaIndexAgent()"));
        assert!(processed.contains("response = agent.query(\"Your query here\")"));
        assert!(processed.contains("print(f\"Response: {response}\")"));
    }

    #[test]
    fn test_requirements_pin_llama_index() {
        let adapter = LlamaIndexAdapter;
        assert_eq!(adapter.requirements()[0], ("llama-index", ">=0.8.0"));
    }
}
