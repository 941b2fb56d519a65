//! Line classification inside a chord block
//!
//! Rules are tried in a fixed order and the first match wins:
//! empty, comment, instrumental, chord/lyrics, then plain text.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Line;
use crate::parse::segments::{has_bracket_marker, strip_bracket_markers, tokenize_segments};

lazy_static! {
    static ref COMMENT_MARKER: Regex = Regex::new(r"^#+\s*").expect("comment pattern is valid");
}

/// Classify one line; always succeeds
pub fn classify_line(line: &str) -> Line {
    if line.trim().is_empty() {
        return Line::Empty {
            whitespace: line.to_string(),
        };
    }

    if let Some(marker) = COMMENT_MARKER.find(line) {
        return Line::Comment {
            marker: marker.as_str().to_string(),
            text: line[marker.end()..].to_string(),
        };
    }

    if has_bracket_marker(line) {
        let segments = tokenize_segments(line);
        if strip_bracket_markers(line).trim().is_empty() {
            return Line::Instrumental { segments };
        }
        return Line::ChordLyrics { segments };
    }

    Line::Text {
        content: line.to_string(),
    }
}
