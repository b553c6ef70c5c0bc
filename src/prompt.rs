//! Prompt construction for transcript summarization
//!
//! The prompt is produced from a plain-text template file with
//! `{{ transcript }}` and `{{ topics }}` placeholders. The template is read
//! fresh on every invocation so edits take effect without redeploying.

use std::path::Path;

use thiserror::Error;

/// Topics the summary must address.
pub const TOPICS: [&str; 3] = ["charges", "location", "availability"];

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read prompt template {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("template parse error: {0}")]
    Parse(String),
}

/// A loaded prompt template.
pub struct PromptTemplate {
    source: String,
}

impl PromptTemplate {
    /// Load a template from a file.
    pub fn load(path: &Path) -> Result<Self, TemplateError> {
        let source = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { source })
    }

    pub fn from_source(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Substitute the dialogue and topic list into the template.
    ///
    /// The dialogue is inserted verbatim, no escaping. Topics render as a
    /// comma-separated list. Unknown or unclosed placeholders are parse
    /// errors.
    pub fn render(&self, transcript: &str, topics: &[&str]) -> Result<String, TemplateError> {
        let mut output = String::with_capacity(self.source.len() + transcript.len());
        let mut rest = self.source.as_str();

        while let Some(start) = rest.find("{{") {
            output.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| TemplateError::Parse("unclosed '{{' placeholder".to_string()))?;

            match after[..end].trim() {
                "transcript" => output.push_str(transcript),
                "topics" => output.push_str(&topics.join(", ")),
                other => {
                    return Err(TemplateError::Parse(format!(
                        "unknown placeholder '{other}'"
                    )))
                }
            }
            rest = &after[end + 2..];
        }
        output.push_str(rest);

        Ok(output)
    }
}

/// Load the template at `path` and render the summary prompt for `dialogue`
/// with the fixed topic list.
pub fn build_summary_prompt(path: &Path, dialogue: &str) -> Result<String, TemplateError> {
    PromptTemplate::load(path)?.render(dialogue, &TOPICS)
}
