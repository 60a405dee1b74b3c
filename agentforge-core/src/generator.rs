//! Code generation
//!
//! Assembles the framework prompt, drives the provider's code-generation
//! entry point, and hands the raw result to the adapter for
//! post-processing. No retries and no validation of the returned text.

use crate::adapter::FrameworkAdapter;
use crate::error::Result;
use crate::framework::Framework;
use crate::provider::LlmProvider;
use crate::spec::AgentSpec;
use tracing::debug;

/// Generates agent code from a specification and a framework adapter.
pub struct CodeGenerator<P> {
    provider: P,
}

impl<P: LlmProvider> CodeGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Generate post-processed agent code for the specification.
    pub async fn generate(&self, spec: &AgentSpec, adapter: &dyn FrameworkAdapter) -> Result<String> {
        let language = spec.language();
        let prompt = render_template(adapter.prompt_template(), adapter.framework(), spec, language);
        debug!(framework = %adapter.framework(), "assembled generation prompt:\n{}", prompt);

        let code = self.provider.generate_code(spec, language).await?;

        Ok(adapter.post_process(&code, spec))
    }
}

/// Fill a prompt template's `{specifications}`, `{framework}`, and
/// `{language}` slots. Slots a template does not carry are left alone.
fn render_template(template: &str, framework: Framework, spec: &AgentSpec, language: &str) -> String {
    template
        .replace("{specifications}", &spec.render())
        .replace("{framework}", framework.as_str())
        .replace("{language}", language)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{adapter_for, LlamaIndexAdapter};
    use crate::provider::CompletionRequest;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    /// Provider stub that records requests and replies with canned code.
    #[derive(Clone)]
    struct StubProvider {
        reply: String,
        requests: Arc<Mutex<Vec<CompletionRequest>>>,
    }

    impl StubProvider {
        fn replying(reply: &str) -> Self {
            Self { reply: reply.to_string(), requests: Arc::default() }
        }

        fn last_request(&self) -> CompletionRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    impl LlmProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        fn model(&self) -> &str {
            "stub-model"
        }

        async fn complete(&self, request: CompletionRequest) -> Result<String> {
            self.requests.lock().unwrap().push(request);
            Ok(self.reply.clone())
        }
    }

    fn spec_from(value: serde_json::Value) -> AgentSpec {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_generated_code_is_post_processed() {
        let stub = StubProvider::replying("class ResearchAgent:\n    pass");
        let generator = CodeGenerator::new(stub);
        let spec = spec_from(json!({ "name": "research helper" }));

        let code = generator.generate(&spec, &LlamaIndexAdapter).await.unwrap();

        assert!(code.contains("class ResearchAgent:"));
        assert!(code.contains("from dotenv import load_dotenv"));
        assert!(code.contains("if __name__ == \"__main__\":"));
    }

    #[tokio::test]
    async fn test_code_request_uses_low_temperature() {
        let stub = StubProvider::replying("pass");
        let generator = CodeGenerator::new(stub.clone());
        let spec = spec_from(json!({ "name": "helper", "use_case": "summarize docs" }));

        generator.generate(&spec, &LlamaIndexAdapter).await.unwrap();

        let request = stub.last_request();
        assert_eq!(request.temperature, 0.2);
        assert!(request.prompt.contains("name: helper"));
        assert!(request.prompt.contains("use_case: summarize docs"));
        let system = request.system_prompt.unwrap();
        assert!(system.contains("expert python developer"));
    }

    #[tokio::test]
    async fn test_language_defaults_to_python() {
        let stub = StubProvider::replying("pass");
        let generator = CodeGenerator::new(stub.clone());

        generator.generate(&AgentSpec::new(), &LlamaIndexAdapter).await.unwrap();

        let request = stub.last_request();
        assert!(request.prompt.starts_with("Generate python code"));
    }

    #[tokio::test]
    async fn test_every_adapter_template_renders() {
        for framework in Framework::ALL {
            let adapter = adapter_for(framework);
            let spec = spec_from(json!({ "language": "javascript", "name": "helper" }));
            let rendered =
                render_template(adapter.prompt_template(), framework, &spec, spec.language());

            assert!(rendered.contains("Generate javascript code"));
            assert!(rendered.contains("name: helper"));
            assert!(!rendered.contains("{specifications}"));
            assert!(!rendered.contains("{language}"));
        }
    }
}
