//! Nashville number conversion
//!
//! A degree is the upward interval from the key root, looked up in the
//! degree table (chromatic passing tones use sharps: `1#`, `4#`). Converting back adds
//! the degree's major-scale offset to the root and respells with the key's
//! preferred accidental.

use crate::errors::{TransposeError, KEY_NOT_ABSOLUTE, NOT_ALPHABETIC, NOT_NASHVILLE};
use crate::models::pitch::{self, Accidental};
use crate::models::{Chord, DegreeChord, DegreeNote, LetterChord, LetterNote, MusicalKey};

/// Degree of a letter note relative to a root pitch class
pub fn note_to_degree(note: &LetterNote, root_index: u8) -> DegreeNote {
    DegreeNote::from_interval(pitch::interval(root_index, note.chromatic_index()))
}

/// Letter note for a degree above a root pitch class
pub fn degree_to_note(note: &DegreeNote, root_index: u8, preferred: Option<Accidental>) -> LetterNote {
    LetterNote::from_index(
        pitch::shift_index(root_index, note.offset() as i32),
        preferred,
    )
}

/// Express a letter chord as Nashville degrees of `key`
pub fn chord_to_nashville(chord: &Chord, key: &MusicalKey) -> Result<Chord, TransposeError> {
    let Chord::Letter(chord) = chord else {
        return Err(TransposeError::NotationMismatch(NOT_ALPHABETIC));
    };
    let root = absolute_root(key)?;

    Ok(Chord::Degree(DegreeChord {
        note: note_to_degree(&chord.note, root),
        modifier: chord.modifier.clone(),
        bass: chord.bass.as_ref().map(|bass| note_to_degree(bass, root)),
    }))
}

/// Spell a Nashville chord as letters in `key`
pub fn nashville_to_chord(chord: &Chord, key: &MusicalKey) -> Result<Chord, TransposeError> {
    let Chord::Degree(chord) = chord else {
        return Err(TransposeError::NotationMismatch(NOT_NASHVILLE));
    };
    let root = absolute_root(key)?;
    let preferred = key.preferred_accidental();

    Ok(Chord::Letter(LetterChord {
        note: degree_to_note(&chord.note, root, preferred),
        modifier: chord.modifier.clone(),
        bass: chord
            .bass
            .as_ref()
            .map(|bass| degree_to_note(bass, root, preferred)),
    }))
}

fn absolute_root(key: &MusicalKey) -> Result<u8, TransposeError> {
    key.chromatic_index()
        .ok_or(TransposeError::NotationMismatch(KEY_NOT_ABSOLUTE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> MusicalKey {
        text.parse().unwrap()
    }

    fn chord(text: &str) -> Chord {
        Chord::parse(text).unwrap()
    }

    #[test]
    fn test_degrees_in_g() {
        let g = key("G");
        let converted: Vec<String> = ["G", "C", "D7", "Em", "F", "Bb"]
            .iter()
            .map(|c| chord_to_nashville(&chord(c), &g).unwrap().to_string())
            .collect();
        assert_eq!(converted, ["1", "4", "57", "6m", "6#", "2#"]);
    }

    #[test]
    fn test_slash_chord_to_nashville() {
        let c = key("C");
        assert_eq!(chord_to_nashville(&chord("G/B"), &c).unwrap().to_string(), "5/7");
    }

    #[test]
    fn test_nashville_to_chord_uses_key_spelling() {
        assert_eq!(nashville_to_chord(&chord("7b"), &key("F")).unwrap().to_string(), "Eb");
        assert_eq!(nashville_to_chord(&chord("7b"), &key("E")).unwrap().to_string(), "D");
        assert_eq!(nashville_to_chord(&chord("4m/1"), &key("D")).unwrap().to_string(), "Gm/D");
        assert_eq!(nashville_to_chord(&chord("4#"), &key("C")).unwrap().to_string(), "F#");
    }

    #[test]
    fn test_round_trip_through_degrees() {
        let a = key("A");
        for text in ["A", "Bm7", "C#m", "Dmaj7/F#", "E7sus4", "G"] {
            let degree = chord_to_nashville(&chord(text), &a).unwrap();
            let back = nashville_to_chord(&degree, &a).unwrap();
            assert_eq!(back.to_string(), text);
        }
    }

    #[test]
    fn test_notation_mismatch() {
        assert_eq!(
            chord_to_nashville(&chord("4"), &key("C")),
            Err(TransposeError::NotationMismatch(NOT_ALPHABETIC))
        );
        assert_eq!(
            nashville_to_chord(&chord("F"), &key("C")),
            Err(TransposeError::NotationMismatch(NOT_NASHVILLE))
        );
    }

    #[test]
    fn test_nashville_key_has_no_root() {
        assert_eq!(
            chord_to_nashville(&chord("C"), &MusicalKey::Nashville),
            Err(TransposeError::NotationMismatch(KEY_NOT_ABSOLUTE))
        );
    }
}
