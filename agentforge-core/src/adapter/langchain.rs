//! LangChain adapter
//!
//! Specializes in workflow and chain-of-thought operations.

use super::FrameworkAdapter;
use crate::framework::Framework;

/// Adapter for the LangChain framework
#[derive(Debug)]
pub struct LangChainAdapter;

impl FrameworkAdapter for LangChainAdapter {
    fn framework(&self) -> Framework {
        Framework::LangChain
    }

    fn prompt_template(&self) -> &'static str {
        r#"
Generate {language} code for an LLM agent using the LangChain framework with the following specifications:

{specifications}

The code should include:
1. All necessary imports for LangChain
2. Chain setup and configuration
3. Tool definitions if needed
4. Agent setup and execution logic
5. Memory components if required
6. Error handling and logging
7. Any additional functionality required by the specifications

Make sure the code follows LangChain best practices and is well-documented.
"#
    }

    fn standard_imports(&self) -> &'static [&'static str] {
        &[
            "import os",
            "import logging",
            "from typing import List, Dict, Any, Optional",
            "from langchain.llms import OpenAI",
            "from langchain.chains import LLMChain",
            "from langchain.prompts import PromptTemplate",
            "from langchain.memory import ConversationBufferMemory",
        ]
    }

    fn main_block(&self) -> &'static str {
        r#"

if __name__ == "__main__":
    try:
        # Initialize the agent
        agent = LangChainAgent()
        
        # Example query
        response = agent.run("Your query here")
        print(f"Response: {response}")
    except Exception as e:
        logging.error(f"Error running agent: {e}")
"#
    }

    fn env_template(&self) -> &'static str {
        r#"# LangChain Agent Environment Variables
OPENAI_API_KEY=your_openai_api_key_here
"#
    }

    fn requirements(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("langchain", ">=0.0.267"),
            ("openai", ">=1.0.0"),
            ("python-dotenv", ">=1.0.0"),
        ]
    }

    fn readme(&self, spec_text: &str) -> String {
        format!(
            r#"# LangChain Agent

This agent was generated using the LLM Agent Generation Engine.

## Setup

1. Copy `.env.template` to `.env` and add your API keys
2. Install the required packages: `pip install -r requirements.txt`
3. Run the agent: `python agent.py`

## Specifications

{spec_text}

## Framework

This agent uses the LangChain framework, which is specialized for workflow and chain-of-thought operations.
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
        let adapter = LangChainAdapter;
        let processed = adapter.post_process("", &AgentSpec::new());
        assert!(processed.contains("agent = LangChainAgent()"));
        assert!(processed.contains("response = agent.run(\"Your query here\")"));
    }

    #[test]
    fn test_memory_import_is_spliced_in() {
        let adapter = LangChainAdapter;
        let processed = adapter.post_process("chain = LLMChain()", &AgentSpec::new());
        assert!(processed.contains("from langchain.memory import ConversationBufferMemory"));
    }
}
