//! Generative model access
//!
//! Handles summary generation over the model service's invoke API.

mod bedrock;
mod client;

pub use bedrock::BedrockClient;
pub use client::{build_model_provider, ModelProvider};
