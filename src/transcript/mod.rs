//! Transcript document model and dialogue formatting
//!
//! Consumes the word-level JSON the speech service writes to storage and
//! re-flows it into speaker-labeled dialogue text.

mod document;
mod formatter;

pub use document::{
    Alternative, ItemKind, TranscriptDocument, TranscriptError, TranscriptItem, TranscriptResults,
};
pub use formatter::format_dialogue;
