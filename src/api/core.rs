//! Core API functions exported to JavaScript
//!
//! Everything is text in, text or plain data out. The host owns the files;
//! no document state is kept between calls.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{js_error, notation_config, serialize};
use crate::api::types::{ConvertResult, TransposeResult};
use crate::converters::{convert_legacy_chord_lines_with, is_chord_line_with};
use crate::models::{is_valid_chord, is_valid_key};
use crate::parse::parse_with;
use crate::transposition::{detect_key, transpose_document_by_name};
use crate::{wasm_error, wasm_info, wasm_log};

// ============================================================================
// Parsing
// ============================================================================

/// Parse text into the document tree (blocks, lines, segments)
#[wasm_bindgen(js_name = parseDocument)]
pub fn parse_document(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config = notation_config(config)?;
    let doc = parse_with(text, &config);
    wasm_log!("parseDocument: {} blocks", doc.blocks().len());
    serialize(&doc, "Failed to serialize document")
}

/// Parse text and return the document tree as pretty-printed JSON
#[wasm_bindgen(js_name = documentToJson)]
pub fn document_to_json(text: &str, config: JsValue) -> Result<String, JsValue> {
    let config = notation_config(config)?;
    let doc = parse_with(text, &config);
    serde_json::to_string_pretty(&doc).map_err(|e| {
        wasm_error!("JSON serialization error: {}", e);
        JsValue::from_str(&format!("JSON serialization error: {}", e))
    })
}

/// Parse and serialize again
#[wasm_bindgen(js_name = formatDocument)]
pub fn format_document(text: &str, config: JsValue) -> Result<String, JsValue> {
    let config = notation_config(config)?;
    Ok(parse_with(text, &config).to_string())
}

// ============================================================================
// Transposition
// ============================================================================

/// Transpose every chord to `to`.
///
/// `from` defaults to the frontmatter key. Returns `{ outcome, text }`;
/// bad key names and notation mismatches are thrown.
#[wasm_bindgen(js_name = transposeText)]
pub fn transpose_text(
    text: &str,
    from: Option<String>,
    to: &str,
    config: JsValue,
) -> Result<JsValue, JsValue> {
    wasm_info!("transposeText called: from={:?}, to={}", from, to);

    let config = notation_config(config)?;
    let mut doc = parse_with(text, &config);
    let outcome = transpose_document_by_name(&mut doc, from.as_deref(), to).map_err(js_error)?;

    wasm_info!("transposeText completed: {:?}", outcome);
    serialize(
        &TransposeResult {
            outcome,
            text: doc.to_string(),
        },
        "Failed to serialize transpose result",
    )
}

/// Key declared in the frontmatter, if any
#[wasm_bindgen(js_name = detectKey)]
pub fn detect_key_js(text: &str, config: JsValue) -> Result<Option<String>, JsValue> {
    let config = notation_config(config)?;
    Ok(detect_key(&parse_with(text, &config)).map(|key| key.to_string()))
}

// ============================================================================
// Legacy conversion
// ============================================================================

/// Merge chord-above-lyric lines into bracket notation; returns `{ changed, text }`
#[wasm_bindgen(js_name = convertLegacyText)]
pub fn convert_legacy_text(text: &str, config: JsValue) -> Result<JsValue, JsValue> {
    let config = notation_config(config)?;
    let mut doc = parse_with(text, &config);
    let changed = convert_legacy_chord_lines_with(&mut doc, &config);

    wasm_info!("convertLegacyText completed: changed={}", changed);
    serialize(
        &ConvertResult {
            changed,
            text: doc.to_string(),
        },
        "Failed to serialize conversion result",
    )
}

// ============================================================================
// Validation
// ============================================================================

#[wasm_bindgen(js_name = isChordLine)]
pub fn is_chord_line_js(text: &str, config: JsValue) -> Result<bool, JsValue> {
    let config = notation_config(config)?;
    Ok(is_chord_line_with(text, &config))
}

#[wasm_bindgen(js_name = isValidChord)]
pub fn is_valid_chord_js(text: &str) -> bool {
    is_valid_chord(text)
}

#[wasm_bindgen(js_name = isValidKey)]
pub fn is_valid_key_js(text: &str) -> bool {
    is_valid_key(text)
}
