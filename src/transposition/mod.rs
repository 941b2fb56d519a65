//! Transposition
//!
//! Semitone shifts between absolute keys and conversion to and from
//! Nashville numbers, for single chords and whole documents.

pub mod transpose;
pub mod nashville;
pub mod document;

pub use transpose::{transpose_chord, transpose_note};
pub use nashville::{chord_to_nashville, nashville_to_chord};
pub use document::{detect_key, transpose_document, transpose_document_by_name, TransposeOutcome};
