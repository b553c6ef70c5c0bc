use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::bedrock::BedrockClient;

#[async_trait]
pub trait ModelProvider: Send + Sync {
    /// Invoke the model with a rendered prompt and return the summary text.
    /// An answer without any text block is the empty string, not an error.
    async fn summarize(&self, prompt: &str) -> Result<String>;
}

/// Build a model provider from runtime settings.
pub fn build_model_provider(settings: &Settings) -> Result<Arc<dyn ModelProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "bedrock" => Ok(Arc::new(BedrockClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: bedrock",
            other
        ),
    }
}
