//! # AgentForge Engine
//!
//! The engine orchestrates the full generation pipeline:
//! 1. User provides a specification (wizard answers or web form fields)
//! 2. Selector resolves it to one of the four frameworks
//! 3. Generator drives the LLM and post-processes the returned code
//! 4. The result is saved as `agent.py` plus the adapter's auxiliary files
//!
//! The LLM writes the agent, the adapters make it runnable.

mod engine;

pub use engine::{save_agent, unique_output_dir, Engine, GeneratedAgent, AGENT_FILENAME};
