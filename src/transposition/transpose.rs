//! Semitone transposition of letter notes and chords
//!
//! The pitch class is shifted and then respelled from the enharmonic table,
//! so the output always uses ASCII `#`/`b` regardless of how the input was
//! written. Modifiers are chord quality, not pitch, and are copied as-is.

use crate::models::pitch::{self, Accidental};
use crate::models::{LetterChord, LetterNote};

/// Shift a note by `semitones` (any sign) and spell it with the preferred accidental
pub fn transpose_note(note: &LetterNote, semitones: i32, preferred: Option<Accidental>) -> LetterNote {
    LetterNote::from_index(pitch::shift_index(note.chromatic_index(), semitones), preferred)
}

/// Transpose root and bass independently by the same interval
pub fn transpose_chord(chord: &LetterChord, semitones: i32, preferred: Option<Accidental>) -> LetterChord {
    LetterChord {
        note: transpose_note(&chord.note, semitones, preferred),
        modifier: chord.modifier.clone(),
        bass: chord
            .bass
            .as_ref()
            .map(|bass| transpose_note(bass, semitones, preferred)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Chord;

    fn letter_chord(text: &str) -> LetterChord {
        match Chord::parse(text) {
            Some(Chord::Letter(chord)) => chord,
            other => panic!("expected letter chord, got {:?}", other),
        }
    }

    #[test]
    fn test_transpose_note_up_a_whole_step() {
        let c: LetterNote = "C".parse().unwrap();
        assert_eq!(transpose_note(&c, 2, None).to_string(), "D");
    }

    #[test]
    fn test_transpose_note_wraps_and_respells() {
        let b: LetterNote = "B".parse().unwrap();
        assert_eq!(transpose_note(&b, 1, None).to_string(), "C");
        assert_eq!(transpose_note(&b, -1, Some(Accidental::Flat)).to_string(), "Bb");
        assert_eq!(transpose_note(&b, -1, Some(Accidental::Sharp)).to_string(), "A#");
    }

    #[test]
    fn test_transpose_german_input() {
        let es: LetterNote = "Es".parse().unwrap();
        assert_eq!(transpose_note(&es, 0, Some(Accidental::Flat)).to_string(), "Eb");
    }

    #[test]
    fn test_transpose_chord_keeps_modifier() {
        let chord = letter_chord("Am7b5/G");
        let up = transpose_chord(&chord, 3, Some(Accidental::Natural));
        assert_eq!(up.to_string(), "Cm7b5/A#");
        assert_eq!(up.modifier, chord.modifier);
    }

    #[test]
    fn test_transpose_composes() {
        let chord = letter_chord("F#m/C#");
        for a in 0..12 {
            for b in 0..12 {
                let twice = transpose_chord(&transpose_chord(&chord, a, None), b, None);
                let once = transpose_chord(&chord, (a + b) % 12, None);
                assert_eq!(twice.note.chromatic_index(), once.note.chromatic_index());
                let (Some(x), Some(y)) = (&twice.bass, &once.bass) else {
                    panic!("bass lost");
                };
                assert_eq!(x.chromatic_index(), y.chromatic_index());
            }
        }
    }
}
