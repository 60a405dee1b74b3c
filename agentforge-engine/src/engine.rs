//! Engine implementation
//!
//! Composes the selector, adapter factory, and generator behind one
//! entry point, and owns persistence of generated agents.

use agentforge_core::adapter::adapter_for;
use agentforge_core::error::{self, Result};
use agentforge_core::{
    AgentSpec, CodeGenerator, Framework, FrameworkSelector, LlmClient, LlmProvider,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Filename the generated code is written to.
pub const AGENT_FILENAME: &str = "agent.py";

/// A generated agent: the selected framework, the post-processed code,
/// and the specification it was generated from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedAgent {
    pub framework: Framework,
    pub code: String,
    pub specifications: AgentSpec,
}

/// The agent generation engine.
pub struct Engine<P = LlmClient> {
    selector: FrameworkSelector<P>,
    generator: CodeGenerator<P>,
}

impl Engine<LlmClient> {
    /// Engine backed by the hosted provider for a model family
    /// ("gpt-4", "claude-2", ...).
    pub fn for_model(model: &str) -> Result<Self> {
        Ok(Self::with_provider(LlmClient::for_model(model)?))
    }
}

impl<P: LlmProvider + Clone> Engine<P> {
    /// Engine over an explicit provider. Selection and generation share it.
    pub fn with_provider(provider: P) -> Self {
        Self {
            selector: FrameworkSelector::new(provider.clone()),
            generator: CodeGenerator::new(provider),
        }
    }

    /// Generate an agent for the specification.
    pub async fn generate_agent(&self, spec: &AgentSpec) -> Result<GeneratedAgent> {
        let framework = self.selector.select(spec).await?;
        let adapter = adapter_for(framework);

        let code = self.generator.generate(spec, adapter.as_ref()).await?;
        info!(framework = %framework, "generated agent code");

        Ok(GeneratedAgent { framework, code, specifications: spec.clone() })
    }

    /// Save a generated agent into `output_dir`. See [`save_agent`].
    pub fn save_agent(&self, agent: &GeneratedAgent, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
        save_agent(agent, output_dir)
    }
}

/// Save a generated agent and its auxiliary files into `output_dir`.
///
/// Creates the directory when missing, writes the code as `agent.py`,
/// then delegates the framework's `.env.template`, `README.md`, and
/// `requirements.txt` to its adapter. Returns the output directory.
pub fn save_agent(agent: &GeneratedAgent, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();

    std::fs::create_dir_all(output_dir).map_err(|e| {
        error::io_error(format!("Failed to create {}: {}", output_dir.display(), e))
            .with_operation("engine::save_agent")
    })?;

    let code_path = output_dir.join(AGENT_FILENAME);
    std::fs::write(&code_path, &agent.code).map_err(|e| {
        error::io_error(format!("Failed to write {}: {}", code_path.display(), e))
            .with_operation("engine::save_agent")
    })?;

    let adapter = adapter_for(agent.framework);
    adapter.write_auxiliary_files(&agent.specifications, output_dir)?;

    info!(framework = %agent.framework, path = %output_dir.display(), "saved generated agent");
    Ok(output_dir.to_path_buf())
}

/// First free `{dir}_{i}` sibling of an existing directory.
///
/// Returns `dir` unchanged when nothing exists at it.
pub fn unique_output_dir(dir: impl AsRef<Path>) -> PathBuf {
    let dir = dir.as_ref();
    if !dir.exists() {
        return dir.to_path_buf();
    }

    let base = dir.as_os_str().to_string_lossy();
    let mut counter = 1;
    loop {
        let candidate = PathBuf::from(format!("{}_{}", base, counter));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentforge_core::CompletionRequest;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    #[derive(Clone)]
    struct StubProvider {
        reply: String,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn replying(reply: &str) -> Self {
            Self { reply: reply.to_string(), calls: Arc::new(AtomicUsize::new(0)) }
        }
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }

        async fn complete(&self, _request: CompletionRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.clone())
        }
    }

    fn spec_from(value: serde_json::Value) -> AgentSpec {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_generate_agent_carries_spec_and_framework() {
        let engine = Engine::with_provider(StubProvider::replying("class Helper:\n    pass"));
        let spec = spec_from(json!({
            "framework": "langchain",
            "name": "workflow helper",
        }));

        let agent = engine.generate_agent(&spec).await.unwrap();

        assert_eq!(agent.framework, Framework::LangChain);
        assert!(agent.code.contains("class Helper:"));
        assert!(agent.code.contains("agent = LangChainAgent()"));
        assert_eq!(agent.specifications, spec);
    }

    #[tokio::test]
    async fn test_save_agent_writes_exactly_four_files() {
        let engine = Engine::with_provider(StubProvider::replying("pass"));
        let spec = spec_from(json!({ "framework": "llamaindex", "name": "helper" }));
        let agent = engine.generate_agent(&spec).await.unwrap();

        let dir = TempDir::new().unwrap();
        let output = dir.path().join("agent");
        let saved = engine.save_agent(&agent, &output).unwrap();
        assert_eq!(saved, output);

        let mut names: Vec<String> = std::fs::read_dir(&output)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec![".env.template", "README.md", "agent.py", "requirements.txt"]);

        let code = std::fs::read_to_string(output.join(AGENT_FILENAME)).unwrap();
        assert_eq!(code, agent.code);
    }

    #[tokio::test]
    async fn test_save_agent_overwrites_existing_directory() {
        let agent = GeneratedAgent {
            framework: Framework::SmallAgents,
            code: "print('v2')".to_string(),
            specifications: AgentSpec::new(),
        };

        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(AGENT_FILENAME), "print('v1')").unwrap();

        save_agent(&agent, dir.path()).unwrap();
        let code = std::fs::read_to_string(dir.path().join(AGENT_FILENAME)).unwrap();
        assert_eq!(code, "print('v2')");
    }

    #[test]
    fn test_generated_agent_round_trips_as_json() {
        let agent = GeneratedAgent {
            framework: Framework::OpenAIAssistants,
            code: "pass".to_string(),
            specifications: spec_from(json!({ "name": "helper" })),
        };

        let encoded = serde_json::to_value(&agent).unwrap();
        assert_eq!(encoded["framework"], "openai_assistants");

        let decoded: GeneratedAgent = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded.framework, agent.framework);
        assert_eq!(decoded.code, agent.code);
    }

    #[test]
    fn test_unique_output_dir_skips_existing_suffixes() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("agent");
        assert_eq!(unique_output_dir(&base), base);

        std::fs::create_dir(&base).unwrap();
        std::fs::create_dir(dir.path().join("agent_1")).unwrap();
        assert_eq!(unique_output_dir(&base), dir.path().join("agent_2"));
    }
}
