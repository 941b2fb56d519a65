//! Document-wide transposition
//!
//! Every bracket chord in every chord block is rewritten; nothing else is
//! touched. Replacements are computed in a first pass and written in a
//! second, so a notation mismatch part-way through leaves the document as it
//! was.

use serde::{Deserialize, Serialize};

use crate::errors::TransposeError;
use crate::models::pitch::{self, Accidental};
use crate::models::{Chord, Document, LineSegment, MusicalKey};
use crate::transposition::nashville::{chord_to_nashville, nashville_to_chord};
use crate::transposition::transpose::transpose_chord;

/// What a transposition request did to the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransposeOutcome {
    Transposed,
    /// Source and target keys are the same
    Unchanged,
    /// No source key given and none declared in the frontmatter
    SkippedNoKey,
}

/// How each chord is rewritten for one (from, to) key pair
#[derive(Debug, Clone)]
enum ChordMapping {
    Shift {
        semitones: i32,
        preferred: Option<Accidental>,
    },
    ToNashville(MusicalKey),
    FromNashville(MusicalKey),
}

impl ChordMapping {
    fn between(from: &MusicalKey, to: &MusicalKey) -> Option<ChordMapping> {
        match (from.chromatic_index(), to.chromatic_index()) {
            (Some(from_index), Some(to_index)) => Some(ChordMapping::Shift {
                semitones: pitch::interval(from_index, to_index) as i32,
                preferred: to.preferred_accidental(),
            }),
            (Some(_), None) => Some(ChordMapping::ToNashville(from.clone())),
            (None, Some(_)) => Some(ChordMapping::FromNashville(to.clone())),
            (None, None) => None,
        }
    }

    /// `Ok(None)` leaves the chord as written
    fn apply(&self, chord: &Chord) -> Result<Option<Chord>, TransposeError> {
        match self {
            ChordMapping::Shift {
                semitones,
                preferred,
            } => Ok(match chord {
                Chord::Letter(chord) => {
                    Some(Chord::Letter(transpose_chord(chord, *semitones, *preferred)))
                }
                Chord::Degree(_) => None,
            }),
            ChordMapping::ToNashville(key) => chord_to_nashville(chord, key).map(Some),
            ChordMapping::FromNashville(key) => nashville_to_chord(chord, key).map(Some),
        }
    }
}

/// Key declared in the document's frontmatter
pub fn detect_key(doc: &Document) -> Option<MusicalKey> {
    doc.key()
}

/// Transpose every chord from `from` (or the frontmatter key) to `to`.
///
/// An absolute target also becomes the frontmatter `key`; a Nashville target
/// leaves the frontmatter alone.
pub fn transpose_document(
    doc: &mut Document,
    from: Option<&MusicalKey>,
    to: &MusicalKey,
) -> Result<TransposeOutcome, TransposeError> {
    let Some(from) = from.cloned().or_else(|| detect_key(doc)) else {
        log::warn!("No source key given or declared; skipping transposition to {}", to);
        return Ok(TransposeOutcome::SkippedNoKey);
    };
    if from == *to {
        log::debug!("Source and target key are both {}; nothing to do", to);
        return Ok(TransposeOutcome::Unchanged);
    }
    let Some(mapping) = ChordMapping::between(&from, to) else {
        return Ok(TransposeOutcome::Unchanged);
    };

    let mut replacements: Vec<(usize, usize, usize, Chord)> = Vec::new();
    for (b, block) in doc.chordpro_blocks().enumerate() {
        for (l, line) in block.lines.iter().enumerate() {
            let Some(segments) = line.segments() else {
                continue;
            };
            for (s, segment) in segments.iter().enumerate() {
                if let LineSegment::Chord(chord) = segment {
                    if let Some(replacement) = mapping.apply(chord)? {
                        replacements.push((b, l, s, replacement));
                    }
                }
            }
        }
    }

    let count = replacements.len();
    let mut blocks: Vec<_> = doc.chordpro_blocks_mut().collect();
    for (b, l, s, chord) in replacements {
        if let Some(segments) = blocks[b].lines[l].segments_mut() {
            segments[s] = LineSegment::Chord(chord);
        }
    }

    if !to.is_nashville() {
        doc.set_key(to);
    }
    log::info!("Transposed {} chords from {} to {}", count, from, to);
    Ok(TransposeOutcome::Transposed)
}

/// [`transpose_document`] with key names; bad names are a [`TransposeError::KeyFormat`]
pub fn transpose_document_by_name(
    doc: &mut Document,
    from: Option<&str>,
    to: &str,
) -> Result<TransposeOutcome, TransposeError> {
    let from: Option<MusicalKey> = from.map(str::parse::<MusicalKey>).transpose()?;
    let to: MusicalKey = to.parse()?;
    transpose_document(doc, from.as_ref(), &to)
}
