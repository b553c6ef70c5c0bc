use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::ModelProvider;

/// Model service client speaking the invoke API: the model id rides in the
/// URL path, the message list and inference configuration in the JSON body.
pub struct BedrockClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model_id: String,
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

impl BedrockClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self {
            http: Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()
                .context("Failed to build model service HTTP client")?,
            endpoint: settings.llm.endpoint.trim().trim_end_matches('/').to_string(),
            api_key: settings.llm.api_key.trim().to_string(),
            model_id: settings.llm.model_id.trim().to_string(),
            max_tokens: settings.llm.max_tokens,
            temperature: settings.llm.temperature,
            top_p: settings.llm.top_p,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/model/{}/invoke", self.endpoint, self.model_id)
    }
}

#[async_trait]
impl ModelProvider for BedrockClient {
    async fn summarize(&self, prompt: &str) -> Result<String> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "Model API key is missing. Set llm.api_key in config or RECAP_BEDROCK_API_KEY."
            );
        }

        let body = InvokeModelRequest {
            messages: vec![Message {
                role: "user".to_string(),
                content: vec![RequestContentBlock {
                    text: prompt.to_string(),
                }],
            }],
            inference_config: InferenceConfig {
                max_tokens: self.max_tokens,
                temperature: self.temperature,
                top_p: self.top_p,
            },
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "*/*")
            .json(&body)
            .send()
            .await
            .context("Model invocation request failed")?;

        let response = response
            .error_for_status()
            .context("Model service returned an error status")?;

        let payload: InvokeModelResponse = response
            .json()
            .await
            .context("Failed to parse model response")?;

        Ok(extract_summary(&payload))
    }
}

/// First content block carrying text; a reply without one is an empty
/// summary, not an error.
fn extract_summary(response: &InvokeModelResponse) -> String {
    response
        .output
        .message
        .content
        .iter()
        .find_map(|block| block.text.clone())
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InvokeModelRequest {
    messages: Vec<Message>,
    inference_config: InferenceConfig,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: Vec<RequestContentBlock>,
}

#[derive(Debug, Serialize)]
struct RequestContentBlock {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InferenceConfig {
    max_tokens: u32,
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct InvokeModelResponse {
    output: ModelOutput,
}

#[derive(Debug, Deserialize)]
struct ModelOutput {
    message: ModelMessage,
}

#[derive(Debug, Deserialize)]
struct ModelMessage {
    #[serde(default)]
    content: Vec<ResponseContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ResponseContentBlock {
    text: Option<String>,
}
