//! Tunable notation settings
//!
//! The values here are heuristics and conventions rather than music theory,
//! so hosts can override them (e.g. from plugin settings passed as JSON).

use serde::{Deserialize, Serialize};

/// Share of whitespace-separated tokens that must be chords for a line to count as a chord line
pub const DEFAULT_CHORD_LINE_THRESHOLD: f64 = 0.51;

/// Info string after the opening backticks of a chord block
pub const DEFAULT_FENCE_LANGUAGE: &str = "chordpro";

/// Modifier prefix (and key suffix) marking minor quality
pub const MINOR_QUALITY_MARKER: &str = "m";

/// Words and symbols a chord modifier may be built from (digits are always allowed).
///
/// Longer tokens come before their prefixes (`maj` before `ma` before `m`).
/// Anything outside this vocabulary makes the token a word, not a chord.
pub const CHORD_MODIFIER_TOKENS: [&str; 26] = [
    "maj", "min", "dim", "aug", "sus", "add", "alt", "omit", "no", "ma", "mi", "m", "M", "°",
    "ø", "Δ", "+", "-", "^", "(", ")", ",", "#", "b", "♯", "♭",
];

/// Closing fence of a chord block
pub const CLOSING_FENCE: &str = "```";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotationConfig {
    /// Fenced blocks opened with ```` ```<fence_language> ```` are parsed as chord blocks
    pub fence_language: String,

    /// Minimum chord-token ratio for legacy chord-line detection
    pub chord_line_threshold: f64,
}

impl NotationConfig {
    /// The full opening fence marker, e.g. ```` ```chordpro ````
    pub fn opening_fence(&self) -> String {
        format!("{}{}", CLOSING_FENCE, self.fence_language)
    }
}

impl Default for NotationConfig {
    fn default() -> Self {
        Self {
            fence_language: DEFAULT_FENCE_LANGUAGE.to_string(),
            chord_line_threshold: DEFAULT_CHORD_LINE_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotationConfig::default();
        assert_eq!(config.opening_fence(), "```chordpro");
        assert_eq!(config.chord_line_threshold, 0.51);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: NotationConfig =
            serde_json::from_str(r#"{"fence_language": "chords"}"#).unwrap();
        assert_eq!(config.opening_fence(), "```chords");
        assert_eq!(config.chord_line_threshold, DEFAULT_CHORD_LINE_THRESHOLD);
    }
}
