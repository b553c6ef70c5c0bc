//! Re-flow word-level transcript items into speaker-labeled dialogue

use crate::transcript::{ItemKind, TranscriptDocument, TranscriptError};

/// Format a transcript document as dialogue text.
///
/// Walks the items in order with a current-speaker cursor: a new speaker
/// label starts a `"\n<label>: "` segment, punctuation attaches to the
/// preceding word, and every item contributes its content plus a single
/// trailing space. Items without a speaker label stay with the current
/// speaker.
pub fn format_dialogue(document: &TranscriptDocument) -> Result<String, TranscriptError> {
    let mut output = String::new();
    let mut current_speaker: Option<&str> = None;

    for (index, item) in document.results.items.iter().enumerate() {
        let content = item
            .content()
            .ok_or(TranscriptError::MalformedItem { index })?;

        if let Some(label) = item.speaker_label.as_deref() {
            if current_speaker != Some(label) {
                current_speaker = Some(label);
                output.push('\n');
                output.push_str(label);
                output.push_str(": ");
            }
        }

        if item.kind == ItemKind::Punctuation && output.ends_with(' ') {
            output.pop();
        }

        output.push_str(content);
        output.push(' ');
    }

    Ok(output)
}
