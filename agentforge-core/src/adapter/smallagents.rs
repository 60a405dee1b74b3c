//! SmallAgents adapter
//!
//! Specializes in lightweight, specific-purpose agents. Its environment
//! block binds a generic `API_KEY` instead of an OpenAI-specific one.

use super::FrameworkAdapter;
use crate::framework::Framework;

/// Adapter for the SmallAgents approach
#[derive(Debug)]
pub struct SmallAgentsAdapter;

impl FrameworkAdapter for SmallAgentsAdapter {
    fn framework(&self) -> Framework {
        Framework::SmallAgents
    }

    fn prompt_template(&self) -> &'static str {
        r#"
Generate {language} code for a lightweight LLM agent using the SmallAgents approach with the following specifications:

{specifications}

The code should include:
1. Minimal necessary imports
2. A focused agent class with a clear, specific purpose
3. Efficient prompt handling
4. Streamlined response processing
5. Error handling
6. Any additional functionality required by the specifications

Make sure the code is lightweight, efficient, and focused on a specific task.
"#
    }

    fn standard_imports(&self) -> &'static [&'static str] {
        &[
            "import os",
            "import logging",
            "from typing import Dict, Any, Optional",
            "import requests",
        ]
    }

    fn env_setup(&self) -> &'static str {
        r#"
# Load environment variables
from dotenv import load_dotenv
load_dotenv()

# Set up API keys
API_KEY = os.getenv("OPENAI_API_KEY")  # or other API key as needed
"#
    }

    fn main_block(&self) -> &'static str {
        r#"

if __name__ == "__main__":
    try:
        # Initialize the agent
        agent = SmallAgent()
        
        # Example query
        response = agent.process("Your query here")
        print(f"Response: {response}")
    except Exception as e:
        logging.error(f"Error running agent: {e}")
"#
    }

    fn env_template(&self) -> &'static str {
        r#"# SmallAgents Environment Variables
OPENAI_API_KEY=your_openai_api_key_here
# Add any other API keys needed for your specific agent
"#
    }

    fn requirements(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("requests", ">=2.31.0"),
            ("openai", ">=1.0.0"),
            ("python-dotenv", ">=1.0.0"),
        ]
    }

    fn readme(&self, spec_text: &str) -> String {
        format!(
            r#"# SmallAgent

This lightweight, focused agent was generated using the LLM Agent Generation Engine.

## Setup

1. Copy `.env.template` to `.env` and add your API keys
2. Install the required packages: `pip install -r requirements.txt`
3. Run the agent: `python agent.py`

## Specifications

{spec_text}

## Framework

This agent uses the SmallAgents approach, which is designed for lightweight, specific-purpose agents.
"#
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::AgentSpec;

    #[test]
    fn test_env_block_binds_generic_api_key() {
        let adapter = SmallAgentsAdapter;
        let processed = adapter.post_process("", &AgentSpec::new());
        assert!(processed.contains("API_KEY = os.getenv(\"OPENAI_API_KEY\")  # or other API key as needed"));
    }

    #[test]
    fn test_main_block_names_the_agent_class() {
        let adapter = SmallAgentsAdapter;
        let processed = adapter.post_process("", &AgentSpec::new());
        assert!(processed.contains("agent = SmallAgent()"));
        assert!(processed.contains("response = agent.process(\"Your query here\")"));
    }

    #[test]
    fn test_readme_title_is_singular() {
        let adapter = SmallAgentsAdapter;
        let readme = adapter.readme("name: helper");
        assert!(readme.starts_with("# SmallAgent\n"));
        assert!(readme.contains("This lightweight, focused agent"));
    }
}
