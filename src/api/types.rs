//! Shared types for the WASM API
//!
//! Result objects returned to JavaScript by the text-in/text-out operations.

use crate::transposition::TransposeOutcome;

/// Result of `transposeText`
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct TransposeResult {
    pub outcome: TransposeOutcome,
    pub text: String,
}

/// Result of `convertLegacyText`
#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq)]
pub struct ConvertResult {
    pub changed: bool,
    pub text: String,
}
