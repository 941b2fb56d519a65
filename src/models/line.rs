//! Lines and inline segments of a chord block
//!
//! Every variant keeps enough of the source text to serialize back to it
//! exactly: whitespace-only lines keep their whitespace, comments keep their
//! `#` marker, and segments concatenate without separators.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::chord::Chord;

/// One piece of a chord/lyrics line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", content = "value")]
pub enum LineSegment {
    /// Literal text, including bracketed text that is not a chord
    Text(String),
    /// Free-text cue, written `[*content]`
    Annotation(String),
    /// Bracket chord, written `[chord]`
    Chord(Chord),
}

impl LineSegment {
    /// Text that is empty or only whitespace
    pub fn is_blank_text(&self) -> bool {
        matches!(self, LineSegment::Text(text) if text.trim().is_empty())
    }

    /// Segment carries no sung text (chord, annotation or spacing)
    pub fn is_instrumental(&self) -> bool {
        !matches!(self, LineSegment::Text(_)) || self.is_blank_text()
    }
}

impl fmt::Display for LineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSegment::Text(text) => write!(f, "{}", text),
            LineSegment::Annotation(text) => write!(f, "[*{}]", text),
            LineSegment::Chord(chord) => write!(f, "[{}]", chord),
        }
    }
}

/// A segment pinned to the column it started at in a monospaced chord line
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndexedSegment {
    /// Starting column, in characters
    pub column: usize,
    /// Width of the source token, in characters
    pub width: usize,
    pub segment: LineSegment,
}

impl IndexedSegment {
    pub fn end(&self) -> usize {
        self.column + self.width
    }
}

/// A legacy chord line ("C   G   Am") not yet merged with its lyrics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawChordLine {
    /// The line as written
    pub source: String,
    /// Whitespace-delimited tokens; chords become `Chord`, anything else `Annotation`
    pub tokens: Vec<IndexedSegment>,
}

impl RawChordLine {
    pub fn from_text(source: &str) -> Self {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        let mut word = String::new();

        for (column, c) in source.chars().chain(std::iter::once(' ')).enumerate() {
            if c.is_whitespace() {
                if let Some(column) = start.take() {
                    tokens.push(Self::classify_token(column, &word));
                    word.clear();
                }
            } else {
                start.get_or_insert(column);
                word.push(c);
            }
        }

        Self {
            source: source.to_string(),
            tokens,
        }
    }

    fn classify_token(column: usize, token: &str) -> IndexedSegment {
        let segment = match Chord::parse(token) {
            Some(chord) => LineSegment::Chord(chord),
            None => LineSegment::Annotation(token.trim_start_matches('*').to_string()),
        };
        IndexedSegment {
            column,
            width: token.chars().count(),
            segment,
        }
    }

    pub fn chord_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|token| matches!(token.segment, LineSegment::Chord(_)))
            .count()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Line {
    /// Blank line; keeps any whitespace it had
    Empty { whitespace: String },
    /// `# text`; `marker` is the leading hashes plus following whitespace
    Comment { marker: String, text: String },
    /// Plain lyric or prose
    Text { content: String },
    /// Chords mixed with lyrics
    ChordLyrics { segments: Vec<LineSegment> },
    /// Chords and annotations separated by whitespace only
    Instrumental { segments: Vec<LineSegment> },
    /// Legacy chord line awaiting conversion
    RawChords(RawChordLine),
}

impl Line {
    /// Pick `Instrumental` or `ChordLyrics` for a segment list
    pub fn from_segments(segments: Vec<LineSegment>) -> Line {
        if segments.iter().all(LineSegment::is_instrumental) {
            Line::Instrumental { segments }
        } else {
            Line::ChordLyrics { segments }
        }
    }

    /// Plain text as a line: `Empty` when blank, `Text` otherwise
    pub fn from_text(text: &str) -> Line {
        if text.trim().is_empty() {
            Line::Empty {
                whitespace: text.to_string(),
            }
        } else {
            Line::Text {
                content: text.to_string(),
            }
        }
    }

    pub fn segments(&self) -> Option<&[LineSegment]> {
        match self {
            Line::ChordLyrics { segments } | Line::Instrumental { segments } => {
                Some(segments.as_slice())
            }
            _ => None,
        }
    }

    pub fn segments_mut(&mut self) -> Option<&mut Vec<LineSegment>> {
        match self {
            Line::ChordLyrics { segments } | Line::Instrumental { segments } => Some(segments),
            _ => None,
        }
    }

    /// Line already uses inline bracket notation
    pub fn has_bracket_chords(&self) -> bool {
        matches!(self, Line::ChordLyrics { .. } | Line::Instrumental { .. })
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Line::Empty { .. })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Empty { whitespace } => write!(f, "{}", whitespace),
            Line::Comment { marker, text } => write!(f, "{}{}", marker, text),
            Line::Text { content } => write!(f, "{}", content),
            Line::ChordLyrics { segments } | Line::Instrumental { segments } => {
                for segment in segments {
                    write!(f, "{}", segment)?;
                }
                Ok(())
            }
            Line::RawChords(raw) => write!(f, "{}", raw.source),
        }
    }
}
