//! Framework selection
//!
//! Resolves a specification to a framework in three stages: an explicit
//! recognized override always wins, complex specifications are classified
//! by the model, and everything else goes through weighted keyword
//! scoring. The decision itself is total; only a classifier transport
//! failure can surface as an error.

use crate::error::Result;
use crate::framework::Framework;
use crate::provider::{CompletionRequest, LlmProvider};
use crate::spec::AgentSpec;
use tracing::debug;

/// Flat bonus added once per framework when any of its domain keywords
/// appear in the use case.
const USE_CASE_BONUS: f64 = 2.0;

/// Multiplier applied to capability keywords found in the use case.
const USE_CASE_WEIGHT: f64 = 0.5;

/// Classifier sampling temperature, kept low for stable answers.
const CLASSIFIER_TEMPERATURE: f32 = 0.1;

/// Selects the most appropriate framework for a specification.
pub struct FrameworkSelector<P> {
    provider: P,
}

impl<P: LlmProvider> FrameworkSelector<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Select a framework for the specification.
    pub async fn select(&self, spec: &AgentSpec) -> Result<Framework> {
        // An unrecognized override falls through to the automatic paths.
        if let Some(requested) = spec.framework_override() {
            if let Ok(framework) = Framework::parse(requested) {
                debug!(framework = %framework, "using explicit framework override");
                return Ok(framework);
            }
        }

        if is_complex(spec) {
            return self.classify_with_llm(spec).await;
        }

        Ok(rule_based_selection(spec))
    }

    /// Ask the model to pick a framework for a complex specification.
    async fn classify_with_llm(&self, spec: &AgentSpec) -> Result<Framework> {
        let request = CompletionRequest::new(classifier_prompt(spec))
            .with_system_prompt(classifier_system_prompt())
            .with_temperature(CLASSIFIER_TEMPERATURE);
        let response = self.provider.complete(request).await?;

        let response = response.trim().to_lowercase();
        for framework in Framework::ALL {
            if response.contains(framework.as_str()) {
                debug!(framework = %framework, "classifier selected framework");
                return Ok(framework);
            }
        }

        debug!(fallback = %Framework::FALLBACK, "classifier reply named no framework");
        Ok(Framework::FALLBACK)
    }
}

/// A specification is complex when it lists more than three capabilities
/// or carries custom requirements.
fn is_complex(spec: &AgentSpec) -> bool {
    spec.capability_count() > 3 || spec.has_custom_requirements()
}

/// Weighted keyword scoring over capabilities and use case.
///
/// Each framework keyword scores its full weight per declared capability
/// it appears in and half weight when it appears in the use case; domain
/// keywords add a flat bonus. Ties resolve to the first framework in
/// enumeration order, so an empty specification scores all zeroes and
/// still selects one.
fn rule_based_selection(spec: &AgentSpec) -> Framework {
    let mut scores = [0.0f64; Framework::ALL.len()];

    for capability in spec.capabilities() {
        let capability = capability.to_lowercase();
        for (i, framework) in Framework::ALL.iter().enumerate() {
            for (keyword, weight) in framework.capability_weights() {
                if capability.contains(keyword) {
                    scores[i] += weight;
                }
            }
        }
    }

    let use_case = spec.use_case().to_lowercase();
    for (i, framework) in Framework::ALL.iter().enumerate() {
        for (keyword, weight) in framework.capability_weights() {
            if use_case.contains(keyword) {
                scores[i] += weight * USE_CASE_WEIGHT;
            }
        }
        if framework.bonus_keywords().iter().any(|keyword| use_case.contains(keyword)) {
            scores[i] += USE_CASE_BONUS;
        }
    }

    let mut selected = Framework::ALL[0];
    let mut best = scores[0];
    for (i, framework) in Framework::ALL.iter().enumerate().skip(1) {
        if scores[i] > best {
            selected = *framework;
            best = scores[i];
        }
    }

    debug!(?scores, selected = %selected, "rule-based framework selection");
    selected
}

fn classifier_system_prompt() -> String {
    let mut prompt = String::from(
        "You are an expert in LLM agent frameworks. Your task is to analyze the\n\
         provided specifications and recommend the most appropriate framework from the following options:\n",
    );
    for framework in Framework::ALL {
        prompt.push_str(&format!("- {}: {}\n", framework.display_name(), framework.tagline()));
    }
    prompt.push_str(
        "\nRespond with ONLY the name of the recommended framework in lowercase, with no additional text.",
    );
    prompt
}

fn classifier_prompt(spec: &AgentSpec) -> String {
    let spec_text = spec.render();
    format!(
        "Based on the following agent specifications, which framework would be most appropriate?\n\n\
         Specifications:\n{}\n\n\
         Consider the strengths and weaknesses of each framework and choose the one that best aligns with these requirements.",
        spec_text.trim_end(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider stub with a canned reply and a call counter.
    #[derive(Clone)]
    struct StubProvider {
        reply: String,
        calls: Arc<AtomicUsize>,
    }

    impl StubProvider {
        fn replying(reply: &str) -> Self {
            Self { reply: reply.to_string(), calls: Arc::new(AtomicUsize::new(0)) }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
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
    async fn test_explicit_override_wins() {
        let stub = StubProvider::replying("llamaindex");
        let selector = FrameworkSelector::new(stub.clone());
        let spec = spec_from(json!({
            "framework": "openai_assistants",
            "use_case": "document retrieval rag",
        }));

        let selected = selector.select(&spec).await.unwrap();
        assert_eq!(selected, Framework::OpenAIAssistants);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_override_is_case_insensitive() {
        let selector = FrameworkSelector::new(StubProvider::replying(""));
        let spec = spec_from(json!({ "framework": "LangChain" }));
        assert_eq!(selector.select(&spec).await.unwrap(), Framework::LangChain);
    }

    #[tokio::test]
    async fn test_unrecognized_override_falls_through_to_rules() {
        let stub = StubProvider::replying("");
        let selector = FrameworkSelector::new(stub.clone());
        let spec = spec_from(json!({
            "framework": "autogen",
            "use_case": "document retrieval rag",
        }));

        let selected = selector.select(&spec).await.unwrap();
        assert_eq!(selected, Framework::LlamaIndex);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_many_capabilities_consult_the_classifier() {
        let stub = StubProvider::replying("smallagents");
        let selector = FrameworkSelector::new(stub.clone());
        let spec = spec_from(json!({
            "capabilities": ["a", "b", "c", "d"],
        }));

        let selected = selector.select(&spec).await.unwrap();
        assert_eq!(selected, Framework::SmallAgents);
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_three_capabilities_stay_rule_based() {
        let stub = StubProvider::replying("smallagents");
        let selector = FrameworkSelector::new(stub.clone());
        let spec = spec_from(json!({
            "capabilities": ["rag", "indexing", "query_engine"],
        }));

        let selected = selector.select(&spec).await.unwrap();
        assert_eq!(selected, Framework::LlamaIndex);
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test]
    async fn test_custom_requirements_consult_the_classifier() {
        let stub = StubProvider::replying("I would recommend LangChain for this workload.");
        let selector = FrameworkSelector::new(stub.clone());
        let spec = spec_from(json!({
            "custom_requirements": "must integrate with an existing queue",
        }));

        let selected = selector.select(&spec).await.unwrap();
        assert_eq!(selected, Framework::LangChain);
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_classifier_reply_scan_prefers_enumeration_order() {
        let stub = StubProvider::replying("either llamaindex or langchain would work");
        let selector = FrameworkSelector::new(stub);
        let spec = spec_from(json!({ "custom_requirements": "anything" }));

        assert_eq!(selector.select(&spec).await.unwrap(), Framework::LlamaIndex);
    }

    #[tokio::test]
    async fn test_unparseable_classifier_reply_falls_back() {
        let stub = StubProvider::replying("none of these fit");
        let selector = FrameworkSelector::new(stub);
        let spec = spec_from(json!({ "custom_requirements": "anything" }));

        assert_eq!(selector.select(&spec).await.unwrap(), Framework::FALLBACK);
    }

    #[tokio::test]
    async fn test_rag_use_case_selects_llamaindex() {
        let selector = FrameworkSelector::new(StubProvider::replying(""));
        let spec = spec_from(json!({ "use_case": "document retrieval rag" }));

        assert_eq!(selector.select(&spec).await.unwrap(), Framework::LlamaIndex);
    }

    #[tokio::test]
    async fn test_lightweight_use_case_selects_smallagents() {
        let selector = FrameworkSelector::new(StubProvider::replying(""));
        let spec = spec_from(json!({ "use_case": "a simple lightweight helper" }));

        assert_eq!(selector.select(&spec).await.unwrap(), Framework::SmallAgents);
    }

    #[tokio::test]
    async fn test_empty_spec_selects_first_framework() {
        let selector = FrameworkSelector::new(StubProvider::replying(""));
        let spec = AgentSpec::new();

        let selected = selector.select(&spec).await.unwrap();
        assert_eq!(selected, Framework::LlamaIndex);
    }

    #[test]
    fn test_capability_keywords_score_by_substring() {
        let spec = spec_from(json!({
            "capabilities": ["chain_of_thought reasoning", "workflow orchestration"],
        }));
        assert_eq!(rule_based_selection(&spec), Framework::LangChain);
    }

    #[test]
    fn test_classifier_system_prompt_lists_all_frameworks() {
        let prompt = classifier_system_prompt();
        for framework in Framework::ALL {
            assert!(prompt.contains(framework.display_name()));
            assert!(prompt.contains(framework.tagline()));
        }
        assert!(prompt.ends_with("with no additional text."));
    }
}
