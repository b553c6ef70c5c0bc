//! Configuration module for recap
//!
//! Handles loading and managing pipeline settings from TOML files.

mod settings;

pub use settings::{
    LlmSettings, PromptSettings, Settings, StorageSettings, TranscriptionSettings,
};
