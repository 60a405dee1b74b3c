//! # Framework Adapters
//!
//! One adapter per framework, each carrying the literal boilerplate its
//! framework needs: the generation prompt template, the standard import
//! lines, the environment/logging/entry-point blocks spliced into
//! generated code, and the auxiliary file templates.
//!
//! ## Design
//!
//! - Post-processing is pure text splicing guarded by substring presence
//!   checks; it never parses the code it touches, and applying it twice
//!   to complete text is a no-op
//! - Missing imports are each pushed on top of the accumulated text, so
//!   they end up in reverse list order
//! - The environment block lands above everything, entry-point and
//!   logging blocks below

pub mod langchain;
pub mod llamaindex;
pub mod openai_assistants;
pub mod smallagents;

pub use langchain::LangChainAdapter;
pub use llamaindex::LlamaIndexAdapter;
pub use openai_assistants::OpenAIAssistantsAdapter;
pub use smallagents::SmallAgentsAdapter;

use crate::error::{self, Result};
use crate::framework::Framework;
use crate::spec::AgentSpec;
use std::path::Path;

/// Environment-loading block shared by most adapters.
pub(crate) const ENV_SETUP: &str = r#"
# Load environment variables
from dotenv import load_dotenv
load_dotenv()

# Set up API keys
OPENAI_API_KEY = os.getenv("OPENAI_API_KEY")
"#;

/// Logging block appended when `logging.basicConfig` is absent.
pub(crate) const LOGGING_SETUP: &str = r#"
# Set up logging
logging.basicConfig(level=logging.INFO)
logger = logging.getLogger(__name__)
"#;

/// Per-framework boilerplate and post-processing.
pub trait FrameworkAdapter: Send + Sync + std::fmt::Debug {
    /// The framework this adapter serves.
    fn framework(&self) -> Framework;

    /// Prompt template with `{language}` and `{specifications}` slots.
    fn prompt_template(&self) -> &'static str;

    /// Import lines every generated file for this framework must carry.
    fn standard_imports(&self) -> &'static [&'static str];

    /// Environment-loading block prepended when no env access is present.
    fn env_setup(&self) -> &'static str {
        ENV_SETUP
    }

    /// Entry-point block appended when no `__main__` guard is present.
    fn main_block(&self) -> &'static str;

    /// Contents of the generated `.env.template`.
    fn env_template(&self) -> &'static str;

    /// Package pins for the generated `requirements.txt`.
    fn requirements(&self) -> &'static [(&'static str, &'static str)];

    /// README body, with the flattened specification text interpolated.
    fn readme(&self, spec_text: &str) -> String;

    /// Splice the framework's standard boilerplate into generated code.
    fn post_process(&self, code: &str, _spec: &AgentSpec) -> String {
        let mut code = code.to_string();

        for import in self.standard_imports() {
            if !code.contains(import) {
                code = format!("{}\n{}", import, code);
            }
        }

        if !code.contains("os.environ.get") && !code.contains("os.getenv") {
            code = format!("{}\n{}", self.env_setup(), code);
        }

        if !code.contains("logging.basicConfig") {
            code = format!("{}\n{}", code, LOGGING_SETUP);
        }

        if !code.contains("__main__") {
            code = format!("{}\n{}", code, self.main_block());
        }

        code
    }

    /// Write `.env.template`, `README.md`, and `requirements.txt`.
    fn write_auxiliary_files(&self, spec: &AgentSpec, output_dir: &Path) -> Result<()> {
        let spec_text = spec.render();

        write_text(&output_dir.join(".env.template"), self.env_template())?;
        write_text(&output_dir.join("README.md"), &self.readme(spec_text.trim_end()))?;
        write_text(
            &output_dir.join("requirements.txt"),
            &requirements_manifest(self.requirements()),
        )?;

        Ok(())
    }
}

/// Resolve the adapter for a framework.
pub fn adapter_for(framework: Framework) -> Box<dyn FrameworkAdapter> {
    match framework {
        Framework::LlamaIndex => Box::new(LlamaIndexAdapter),
        Framework::LangChain => Box::new(LangChainAdapter),
        Framework::SmallAgents => Box::new(SmallAgentsAdapter),
        Framework::OpenAIAssistants => Box::new(OpenAIAssistantsAdapter),
    }
}

/// Resolve an adapter from a framework tag string.
///
/// Errors with `Unsupported framework: {tag}` outside the known four.
pub fn adapter_for_tag(tag: &str) -> Result<Box<dyn FrameworkAdapter>> {
    Ok(adapter_for(Framework::parse(tag)?))
}

/// Render requirement pins as one `name{constraint}` line per package.
fn requirements_manifest(pins: &[(&str, &str)]) -> String {
    let mut manifest = String::new();
    for (package, constraint) in pins {
        manifest.push_str(package);
        manifest.push_str(constraint);
        manifest.push('\n');
    }
    manifest
}

fn write_text(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|e| {
        error::io_error(format!("Failed to write {}: {}", path.display(), e))
            .with_operation("adapter::write_auxiliary_files")
    })
}
