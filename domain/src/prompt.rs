//! Prompt text for the documentation agent

/// Fixed prompt fragments handed to the reasoning backend
pub struct AgentPrompt;

impl AgentPrompt {
    /// System prompt describing the documentation tools and how to chain them
    pub fn system() -> &'static str {
        r#"You are an API documentation assistant. You answer questions about HTTP APIs by consulting OpenAPI specifications through tools.

Available tools:
- load_spec: fetch an OpenAPI specification from a URL and cache its endpoints under a provider name
- search_spec: search the cached endpoints of a provider by keyword, optionally filtered by HTTP method
- get_endpoint_detail: retrieve the full documentation for one endpoint by its id
- list_loaded_providers: list the providers whose specifications are currently cached

Workflow:
1. If the question names a provider that is not loaded yet, call load_spec first.
2. Use search_spec to find candidate endpoints, then get_endpoint_detail for the ones that matter.
3. Base your answer only on the documentation the tools return. Quote paths, methods and parameter names exactly.
4. If the documentation does not cover the question, say so instead of guessing.

Keep answers concise and concrete. Prefer showing the endpoint (method and path) plus the parameters the caller needs."#
    }

    /// Prefix a provider hint onto a query so the model consults the right spec
    pub fn with_provider_hint(query: &str, provider: &str) -> String {
        format!("[Provider: {}] {}", provider, query)
    }

    /// Canned answer returned when no reasoning backend is configured
    pub fn fallback_answer(query: &str) -> String {
        format!(
            r#"I received your question but no reasoning backend is configured, so I cannot research an answer right now.

Your question was: "{}"

To enable answers:
1. Set your OPENAI_API_KEY environment variable (or the key variable named in your config)
2. Optionally point [backend].base_url at a compatible server
3. Run the query again

The documentation tools (load_spec, search_spec, get_endpoint_detail, list_loaded_providers) still work; only the reasoning step is unavailable."#,
            query
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_names_every_tool() {
        let prompt = AgentPrompt::system();
        for tool in [
            "load_spec",
            "search_spec",
            "get_endpoint_detail",
            "list_loaded_providers",
        ] {
            assert!(prompt.contains(tool), "missing {tool}");
        }
    }

    #[test]
    fn fallback_quotes_the_question() {
        let answer = AgentPrompt::fallback_answer("how do I list pets?");
        assert!(answer.contains("\"how do I list pets?\""));
        assert!(answer.contains("OPENAI_API_KEY"));
    }

    #[test]
    fn provider_hint_keeps_the_question() {
        let hinted = AgentPrompt::with_provider_hint("how do I list pets?", "petstore");
        assert_eq!(hinted, "[Provider: petstore] how do I list pets?");
    }
}
