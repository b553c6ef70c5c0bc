//! The two storage-notification handlers
//!
//! Each handler is constructed once with its service handles and then
//! invoked per event. Invocations are independent and hold no state across
//! calls; concurrent invocations for distinct objects may overlap freely.
//! A handler never returns an `Err` - every outcome, including a caught
//! upstream failure, is a [`crate::event::HandlerResponse`].

mod summarize;
mod transcribe;

pub use summarize::{SummarizationHandler, RESULT_KEY, TRANSCRIPT_SUFFIX};
pub use transcribe::{TranscriptionHandler, AUDIO_OBJECT_KEY};
