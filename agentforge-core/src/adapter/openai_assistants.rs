//! OpenAI Assistants adapter
//!
//! Specializes in leveraging OpenAI's agent capabilities. The entry-point
//! block is conversational: it chats rather than queries.

use super::FrameworkAdapter;
use crate::framework::Framework;

/// Adapter for the OpenAI Assistants API
#[derive(Debug)]
pub struct OpenAIAssistantsAdapter;

impl FrameworkAdapter for OpenAIAssistantsAdapter {
    fn framework(&self) -> Framework {
        Framework::OpenAIAssistants
    }

    fn prompt_template(&self) -> &'static str {
        r#"
Generate {language} code for an LLM agent using the OpenAI Assistants API with the following specifications:

{specifications}

The code should include:
1. All necessary imports for the OpenAI Assistants API
2. Assistant creation and configuration
3. Thread management
4. Message handling
5. Function calling setup if needed
6. Error handling and logging
7. Any additional functionality required by the specifications

Make sure the code follows OpenAI Assistants API best practices and is well-documented.
"#
    }

    fn standard_imports(&self) -> &'static [&'static str] {
        &[
            "import os",
            "import logging",
            "import time",
            "from typing import List, Dict, Any, Optional",
            "import openai",
            "from openai import OpenAI",
        ]
    }

    fn main_block(&self) -> &'static str {
        r#"

if __name__ == "__main__":
    try:
        # Initialize the agent
        agent = OpenAIAssistantAgent()
        
        # Example conversation
        response = agent.chat("Your message here")
        print(f"Assistant: {response}")
    except Exception as e:
        logging.error(f"Error running agent: {e}")
"#
    }

    fn env_template(&self) -> &'static str {
        r#"# OpenAI Assistants Agent Environment Variables
OPENAI_API_KEY=your_openai_api_key_here
"#
    }

    fn requirements(&self) -> &'static [(&'static str, &'static str)] {
        &[("openai", ">=1.0.0"), ("python-dotenv", ">=1.0.0")]
    }

    fn readme(&self, spec_text: &str) -> String {
        format!(
            r#"# OpenAI Assistants Agent

This agent was generated using the LLM Agent Generation Engine.

## Setup

1. Copy `.env.template` to `.env` and add your API keys
2. Install the required packages: `pip install -r requirements.txt`
3. Run the agent: `python agent.py`

## Specifications

{spec_text}

## Framework

This agent uses the OpenAI Assistants API, which is specialized for leveraging OpenAI's agent capabilities.
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::AgentSpec;

    #[test]
    fn test_main_block_is_conversational() {
        let adapter = OpenAIAssistantsAdapter;
        let processed = adapter.post_process("", &AgentSpec::new());
        assert!(processed.contains("agent = OpenAIAssistantAgent()"));
        assert!(processed.contains("response = agent.chat(\"Your message here\")"));
        assert!(processed.contains("print(f\"Assistant: {response}\")"));
    }

    #[test]
    fn test_bare_and_scoped_openai_imports_coexist() {
        let adapter = OpenAIAssistantsAdapter;
        let processed = adapter.post_process("client = OpenAI()", &AgentSpec::new());
        assert!(processed.contains("import openai\n"));
        assert!(processed.contains("from openai import OpenAI\n"));
    }

    #[test]
    fn test_requirements_have_no_framework_package() {
        let adapter = OpenAIAssistantsAdapter;
        let names: Vec<&str> = adapter.requirements().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["openai", "python-dotenv"]);
    }
}
