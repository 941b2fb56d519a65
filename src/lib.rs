//! Chord Sheet Notation WASM Module
//!
//! Parses ChordPro-flavored chord sheets into a document tree, serializes
//! them back byte for byte, transposes chords (including Nashville numbers)
//! and upgrades chords-above-lyrics text to inline bracket chords.

pub mod config;
pub mod errors;
pub mod models;
pub mod parse;
pub mod transposition;
pub mod converters;
pub mod api;

// Re-export commonly used types
pub use config::NotationConfig;
pub use errors::{ChordFormatError, KeyFormatError, NoteFormatError, TransposeError};
pub use models::*;
pub use parse::{parse, parse_with};
pub use transposition::{
    chord_to_nashville, detect_key, nashville_to_chord, transpose_chord, transpose_document,
    transpose_document_by_name, transpose_note, TransposeOutcome,
};
pub use converters::{
    combine, convert_legacy_chord_lines, convert_legacy_chord_lines_with, convert_lines,
    is_chord_line, is_chord_line_with,
};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    {
        if let Err(e) = console_log::init_with_level(log::Level::Debug) {
            wasm_warn!("Logger already initialized: {}", e);
        }
    }

    log::info!("Chord sheet WASM module initialized");
}
