//! Legacy chord-line conversion
//!
//! Older sheets put chords on their own line, aligned by column above the
//! lyric they belong to:
//!
//! ```text
//!       D          G    D
//! Basic chord line with lyrics.
//! ```
//!
//! Each such pair is merged into one inline-bracket line
//! (`Basic [D]chord line [G]with [D]lyrics.`). A chord line with no lyric
//! under it becomes an instrumental line that keeps its spacing.

use crate::config::NotationConfig;
use crate::models::{Chord, Document, Line, RawChordLine};
use crate::parse::segments::push_text;

/// Chord line test with the default threshold
pub fn is_chord_line(text: &str) -> bool {
    is_chord_line_with(text, &NotationConfig::default())
}

/// A line is a chord line when enough of its whitespace-separated tokens are chords
pub fn is_chord_line_with(text: &str, config: &NotationConfig) -> bool {
    let (total, chords) = text
        .split_whitespace()
        .fold((0usize, 0usize), |(total, chords), token| {
            (total + 1, chords + Chord::parse(token).is_some() as usize)
        });
    if chords == 0 {
        return false;
    }
    chords as f64 / total as f64 >= config.chord_line_threshold
}

/// Merge a chord line into the lyric line below it.
///
/// Each token lands before the first non-space lyric character at or after
/// its column. Once the lyric runs out, the chord line's own spacing is kept
/// between tokens.
pub fn combine(chords: &RawChordLine, lyric: &str) -> Line {
    if chords.chord_count() == 0 {
        return Line::from_text(lyric);
    }

    let chord_chars: Vec<char> = chords.source.chars().collect();
    let lyric_chars: Vec<char> = lyric.chars().collect();
    let mut segments = Vec::new();
    let mut pos = 0;
    let mut covered = 0;

    for token in &chords.tokens {
        let from = token.column.max(pos);
        let anchor = lyric_chars
            .iter()
            .skip(from)
            .position(|c| !c.is_whitespace())
            .map(|offset| offset + from);

        match anchor {
            Some(anchor) => {
                push_text(&mut segments, &collect(&lyric_chars[pos..anchor]));
                pos = anchor;
            }
            None => {
                push_text(&mut segments, &collect(&lyric_chars[pos..]));
                pos = lyric_chars.len();
                let gap_start = covered.max(lyric_chars.len());
                if gap_start < token.column {
                    push_text(&mut segments, &collect(&chord_chars[gap_start..token.column]));
                }
            }
        }
        segments.push(token.segment.clone());
        covered = token.end();
    }

    push_text(&mut segments, &collect(&lyric_chars[pos..]));
    let tail_start = covered.max(lyric_chars.len());
    if tail_start < chord_chars.len() {
        push_text(&mut segments, &collect(&chord_chars[tail_start..]));
    }

    Line::from_segments(segments)
}

/// Convert the lines of one chord block
pub fn convert_lines(lines: Vec<Line>, config: &NotationConfig) -> Vec<Line> {
    let mut lines = lines
        .into_iter()
        .map(|line| match line {
            Line::Text { content } if is_chord_line_with(&content, config) => {
                Line::RawChords(RawChordLine::from_text(&content))
            }
            other => other,
        })
        .peekable();

    let mut converted = Vec::with_capacity(lines.size_hint().0);
    while let Some(line) = lines.next() {
        match line {
            Line::RawChords(raw) => {
                let lyric = match lines.next_if(|next| matches!(next, Line::Text { .. })) {
                    Some(Line::Text { content }) => content,
                    _ => String::new(),
                };
                converted.push(combine(&raw, &lyric));
            }
            other => converted.push(other),
        }
    }
    converted
}

/// Convert every chord block that has no bracket chords yet; true if anything changed
pub fn convert_legacy_chord_lines(doc: &mut Document) -> bool {
    convert_legacy_chord_lines_with(doc, &NotationConfig::default())
}

pub fn convert_legacy_chord_lines_with(doc: &mut Document, config: &NotationConfig) -> bool {
    let mut changed = false;
    for (index, block) in doc.chordpro_blocks_mut().enumerate() {
        if block.has_bracket_chords() {
            log::debug!("Chord block {} already uses bracket chords, skipping", index);
            continue;
        }
        let lines = std::mem::take(&mut block.lines);
        block.lines = convert_lines(lines, config);
        if block.has_bracket_chords() {
            log::info!("Converted legacy chord lines in chord block {}", index);
            changed = true;
        }
    }
    changed
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}
