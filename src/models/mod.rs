//! Models module for the chord sheet engine
//!
//! This module contains the music theory value types (pitches, notes,
//! chords, keys) and the document structure built from them.

pub mod pitch;
pub mod note;
pub mod chord;
pub mod key;
pub mod line;
pub mod document;

// Re-export commonly used types
pub use pitch::{Accidental, Letter};
pub use note::{DegreeNote, LetterNote, Note};
pub use chord::{is_valid_chord, Chord, DegreeChord, LetterChord};
pub use key::{is_valid_key, MusicalKey};
pub use line::{IndexedSegment, Line, LineSegment, RawChordLine};
pub use document::{Block, ChordProBlock, Document, Frontmatter, MarkdownBlock};
