//! MCP prompt system.
//!
//! Prompts are reusable guides the client can pull into a conversation.

use crate::{McpError, McpResult};
use std::sync::Arc;

mod flux_examples;
mod line_protocol;

pub use flux_examples::FluxQueryExamplesPrompt;
pub use line_protocol::LineProtocolGuidePrompt;

/// MCP prompt template.
pub trait McpPrompt: Send + Sync {
    /// Prompt name as exposed to the client
    fn name(&self) -> &'static str;

    /// Prompt description for LLM
    fn description(&self) -> &'static str;

    /// Prompt text
    fn render(&self) -> String;
}

/// Registry for MCP prompts.
#[derive(Clone, Default)]
pub struct PromptRegistry {
    prompts: Arc<Vec<Arc<dyn McpPrompt>>>,
}

impl PromptRegistry {
    /// Creates an empty prompt registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the InfluxDB guides.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(FluxQueryExamplesPrompt));
        registry.register(Arc::new(LineProtocolGuidePrompt));
        registry
    }

    /// Registers a prompt.
    pub fn register(&mut self, prompt: Arc<dyn McpPrompt>) {
        Arc::make_mut(&mut self.prompts).push(prompt);
    }

    /// Lists all prompts.
    pub fn list(&self) -> Vec<Arc<dyn McpPrompt>> {
        self.prompts.as_ref().clone()
    }

    /// Renders a prompt by name.
    pub fn render(&self, name: &str) -> McpResult<String> {
        self.prompts
            .iter()
            .find(|prompt| prompt.name() == name)
            .map(|prompt| prompt.render())
            .ok_or_else(|| McpError::PromptNotFound(name.to_string()))
    }
}
