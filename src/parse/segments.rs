//! Inline segment tokenization
//!
//! Splits a line on bracket markers `[...]`. Marker content starting with
//! `*` is an annotation, content matching the chord grammar is a chord, and
//! anything else stays literal text (brackets included) so the line still
//! serializes to its source.

use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

use crate::models::{Chord, LineSegment};

lazy_static! {
    /// A bracket marker with no nested brackets
    static ref BRACKET_MARKER: Regex =
        Regex::new(r"\[([^\[\]]*)\]").expect("bracket marker pattern is valid");
}

pub fn has_bracket_marker(line: &str) -> bool {
    BRACKET_MARKER.is_match(line)
}

/// The line with every bracket marker removed
pub fn strip_bracket_markers(line: &str) -> Cow<'_, str> {
    BRACKET_MARKER.replace_all(line, "")
}

/// Tokenize a line into segments; never fails
pub fn tokenize_segments(line: &str) -> Vec<LineSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for captures in BRACKET_MARKER.captures_iter(line) {
        let (Some(marker), Some(content)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        push_text(&mut segments, &line[last..marker.start()]);

        match classify_marker(content.as_str()) {
            Some(segment) => segments.push(segment),
            None => {
                log::debug!("Bracket content '{}' is not a chord, keeping as text", content.as_str());
                push_text(&mut segments, marker.as_str());
            }
        }
        last = marker.end();
    }
    push_text(&mut segments, &line[last..]);

    segments
}

fn classify_marker(content: &str) -> Option<LineSegment> {
    if let Some(annotation) = content.strip_prefix('*') {
        return Some(LineSegment::Annotation(annotation.to_string()));
    }
    Chord::parse(content).map(LineSegment::Chord)
}

/// Append text, merging with a preceding text segment
pub(crate) fn push_text(segments: &mut Vec<LineSegment>, text: &str) {
    if text.is_empty() {
        return;
    }
    match segments.last_mut() {
        Some(LineSegment::Text(previous)) => previous.push_str(text),
        _ => segments.push(LineSegment::Text(text.to_string())),
    }
}
