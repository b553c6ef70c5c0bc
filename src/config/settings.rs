//! Pipeline settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Object storage settings
    #[serde(default)]
    pub storage: StorageSettings,

    /// Speech-to-text job settings
    #[serde(default)]
    pub transcription: TranscriptionSettings,

    /// Generative model settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Prompt template settings
    #[serde(default)]
    pub prompt: PromptSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Storage backend (s3, fs)
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    /// Endpoint for S3-compatible storage (empty = provider default)
    #[serde(default)]
    pub endpoint: String,

    /// Region for S3-compatible storage
    #[serde(default = "default_region")]
    pub region: String,

    /// Access key id (empty = anonymous / ambient credentials)
    #[serde(default)]
    pub access_key_id: String,

    /// Secret access key
    #[serde(default)]
    pub secret_access_key: String,

    /// Root directory for the fs backend; each bucket is a subdirectory
    #[serde(default = "default_fs_root")]
    pub fs_root: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptionSettings {
    /// Speech service endpoint
    #[serde(default = "default_transcribe_endpoint")]
    pub endpoint: String,

    /// Destination bucket for transcript JSON output.
    /// Overridden by RECAP_TRANSCRIPT_BUCKET; must be set before a
    /// transcription job can be submitted.
    #[serde(default)]
    pub output_bucket: String,

    /// Language of the uploaded audio
    #[serde(default = "default_language_code")]
    pub language_code: String,

    /// Container format of the uploaded audio
    #[serde(default = "default_media_format")]
    pub media_format: String,

    /// Maximum number of speakers to distinguish
    #[serde(default = "default_max_speakers")]
    pub max_speakers: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model provider (bedrock)
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// Inference endpoint
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// API key. Overridden by RECAP_BEDROCK_API_KEY.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier
    #[serde(default = "default_model_id")]
    pub model_id: String,

    /// Maximum tokens in the model response
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default)]
    pub temperature: f32,

    /// Nucleus sampling mass
    #[serde(default = "default_top_p")]
    pub top_p: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptSettings {
    /// Path to the prompt template, resolved at render time
    #[serde(default = "default_template_path")]
    pub template_path: PathBuf,
}

// Default value functions

fn default_storage_backend() -> String {
    "s3".to_string()
}

fn default_region() -> String {
    "us-west-2".to_string()
}

fn default_fs_root() -> PathBuf {
    ProjectDirs::from("com", "recap", "recap")
        .map(|dirs| dirs.data_dir().join("objects"))
        .unwrap_or_else(|| PathBuf::from("~/.local/share/recap/objects"))
}

fn default_transcribe_endpoint() -> String {
    "https://transcribe.us-west-2.amazonaws.com".to_string()
}

fn default_language_code() -> String {
    "en-US".to_string()
}

fn default_media_format() -> String {
    "mp3".to_string()
}

fn default_max_speakers() -> u32 {
    2
}

fn default_llm_provider() -> String {
    "bedrock".to_string()
}

fn default_llm_endpoint() -> String {
    "https://bedrock-runtime.us-west-2.amazonaws.com".to_string()
}

fn default_model_id() -> String {
    "us.amazon.nova-lite-v1:0".to_string()
}

fn default_max_tokens() -> u32 {
    2048
}

fn default_top_p() -> f32 {
    0.9
}

fn default_template_path() -> PathBuf {
    PathBuf::from("prompt_template.txt")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            endpoint: String::new(),
            region: default_region(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            fs_root: default_fs_root(),
        }
    }
}

impl Default for TranscriptionSettings {
    fn default() -> Self {
        Self {
            endpoint: default_transcribe_endpoint(),
            output_bucket: String::new(),
            language_code: default_language_code(),
            media_format: default_media_format(),
            max_speakers: default_max_speakers(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            endpoint: default_llm_endpoint(),
            api_key: String::new(),
            model_id: default_model_id(),
            max_tokens: default_max_tokens(),
            temperature: 0.0,
            top_p: default_top_p(),
        }
    }
}

impl Default for PromptSettings {
    fn default() -> Self {
        Self {
            template_path: default_template_path(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageSettings::default(),
            transcription: TranscriptionSettings::default(),
            llm: LlmSettings::default(),
            prompt: PromptSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(bucket) = std::env::var("RECAP_TRANSCRIPT_BUCKET") {
            if !bucket.trim().is_empty() {
                self.transcription.output_bucket = bucket;
            }
        }
        if self.llm.api_key.trim().is_empty() {
            if let Ok(key) = std::env::var("RECAP_BEDROCK_API_KEY") {
                if !key.trim().is_empty() {
                    self.llm.api_key = key;
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "recap", "recap")
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }
}
