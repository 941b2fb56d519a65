//! Chord symbols in letter and Nashville notation
//!
//! Grammar: `<root><accidental?><modifier?>(/<bass>)?`. A leading digit 1-7
//! selects Nashville notation, a leading letter A-G (any case) selects letter
//! notation. The bass must use the same notation as the root.
//!
//! The modifier is stored verbatim and never transposed. It must be built
//! from chord-quality vocabulary (`m`, `maj`, `sus`, `add`, digits, `#`, `b`,
//! parentheses, ...) so ordinary words such as "Chorus" or "Amazing" are not
//! mistaken for chords.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{CHORD_MODIFIER_TOKENS, MINOR_QUALITY_MARKER};
use crate::errors::ChordFormatError;
use crate::models::note::{DegreeNote, LetterNote};

/// Chord with a letter root, e.g. `F#m7/C#`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LetterChord {
    pub note: LetterNote,
    pub modifier: String,
    pub bass: Option<LetterNote>,
}

impl LetterChord {
    pub fn new(note: LetterNote, modifier: impl Into<String>, bass: Option<LetterNote>) -> Self {
        Self {
            note,
            modifier: modifier.into(),
            bass,
        }
    }

    pub fn has_minor_quality(&self) -> bool {
        has_minor_quality(&self.modifier)
    }

    fn parse(input: &str) -> Option<LetterChord> {
        LetterNote::prefix_candidates(input)
            .into_iter()
            .find_map(|(note, consumed)| {
                let (modifier, bass) = split_tail(&input[consumed..])?;
                let bass = match bass {
                    Some(text) => Some(text.parse::<LetterNote>().ok()?),
                    None => None,
                };
                Some(LetterChord::new(note, modifier, bass))
            })
    }
}

impl fmt::Display for LetterChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.modifier)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

/// Chord with a Nashville degree root, e.g. `4#m7/1`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DegreeChord {
    pub note: DegreeNote,
    pub modifier: String,
    pub bass: Option<DegreeNote>,
}

impl DegreeChord {
    pub fn new(note: DegreeNote, modifier: impl Into<String>, bass: Option<DegreeNote>) -> Self {
        Self {
            note,
            modifier: modifier.into(),
            bass,
        }
    }

    pub fn has_minor_quality(&self) -> bool {
        has_minor_quality(&self.modifier)
    }

    fn parse(input: &str) -> Option<DegreeChord> {
        DegreeNote::prefix_candidates(input)
            .into_iter()
            .find_map(|(note, consumed)| {
                let (modifier, bass) = split_tail(&input[consumed..])?;
                let bass = match bass {
                    Some(text) => Some(text.parse::<DegreeNote>().ok()?),
                    None => None,
                };
                Some(DegreeChord::new(note, modifier, bass))
            })
    }
}

impl fmt::Display for DegreeChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.modifier)?;
        if let Some(bass) = &self.bass {
            write!(f, "/{}", bass)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "notation")]
pub enum Chord {
    Letter(LetterChord),
    Degree(DegreeChord),
}

impl Chord {
    /// Parse a chord token; `None` when the text is not a chord
    pub fn parse(input: &str) -> Option<Chord> {
        match input.chars().next()? {
            c if c.is_ascii_digit() => DegreeChord::parse(input).map(Chord::Degree),
            _ => LetterChord::parse(input).map(Chord::Letter),
        }
    }

    pub fn modifier(&self) -> &str {
        match self {
            Chord::Letter(chord) => &chord.modifier,
            Chord::Degree(chord) => &chord.modifier,
        }
    }

    pub fn is_nashville(&self) -> bool {
        matches!(self, Chord::Degree(_))
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Chord::Letter(chord) => chord.fmt(f),
            Chord::Degree(chord) => chord.fmt(f),
        }
    }
}

impl FromStr for Chord {
    type Err = ChordFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s).ok_or_else(|| ChordFormatError(s.to_string()))
    }
}

/// Cheap grammar check for host-side validation
pub fn is_valid_chord(text: &str) -> bool {
    Chord::parse(text).is_some()
}

/// Split what follows the root into modifier and optional bass text.
/// Fails when the modifier contains anything outside the chord vocabulary.
fn split_tail(rest: &str) -> Option<(&str, Option<&str>)> {
    let (modifier, bass) = match rest.find('/') {
        Some(slash) => (&rest[..slash], Some(&rest[slash + 1..])),
        None => (rest, None),
    };
    is_valid_modifier(modifier).then_some((modifier, bass))
}

fn is_valid_modifier(modifier: &str) -> bool {
    let mut rest = modifier;
    while let Some(c) = rest.chars().next() {
        if c.is_ascii_digit() {
            rest = &rest[1..];
            continue;
        }
        match CHORD_MODIFIER_TOKENS.iter().find(|token| rest.starts_with(*token)) {
            Some(token) => rest = &rest[token.len()..],
            None => return false,
        }
    }
    true
}

fn has_minor_quality(modifier: &str) -> bool {
    modifier.starts_with(MINOR_QUALITY_MARKER) && !modifier.starts_with("maj")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pitch::Letter;

    fn letter(text: &str) -> LetterChord {
        match Chord::parse(text) {
            Some(Chord::Letter(chord)) => chord,
            other => panic!("expected letter chord for '{}', got {:?}", text, other),
        }
    }

    #[test]
    fn test_simple_chords() {
        let c = letter("C");
        assert_eq!(c.note.letter, Letter::C);
        assert_eq!(c.modifier, "");
        assert!(c.bass.is_none());

        let am7 = letter("Am7");
        assert_eq!(am7.note.letter, Letter::A);
        assert_eq!(am7.modifier, "m7");
    }

    #[test]
    fn test_slash_chord() {
        let chord = letter("F#m7/C#");
        assert_eq!(chord.note.to_string(), "F#");
        assert_eq!(chord.modifier, "m7");
        assert_eq!(chord.bass.unwrap().to_string(), "C#");
    }

    #[test]
    fn test_sus_backtracks_over_german_postfix() {
        let chord = letter("Asus4");
        assert_eq!(chord.note.postfix, "");
        assert_eq!(chord.modifier, "sus4");

        let chord = letter("Esus");
        assert_eq!(chord.note.postfix, "");
        assert_eq!(chord.modifier, "sus");
    }

    #[test]
    fn test_german_flat_chord() {
        let chord = letter("As");
        assert_eq!(chord.note.postfix, "s");
        assert_eq!(chord.note.chromatic_index(), 8);
        let chord = letter("Fism");
        assert_eq!(chord.note.chromatic_index(), 6);
        assert_eq!(chord.modifier, "m");
    }

    #[test]
    fn test_nashville_chords() {
        match Chord::parse("4#m7/1") {
            Some(Chord::Degree(chord)) => {
                assert_eq!(chord.note.degree, 4);
                assert_eq!(chord.note.postfix, "#");
                assert_eq!(chord.modifier, "m7");
                assert_eq!(chord.bass.unwrap().degree, 1);
            }
            other => panic!("expected Nashville chord, got {:?}", other),
        }
    }

    #[test]
    fn test_modifier_vocabulary() {
        for (text, modifier) in [("Am7", "m7"), ("Cmaj9", "maj9"), ("Gsus4", "sus4"), ("Bb7(b9)", "7(b9)"), ("Cadd9", "add9")] {
            assert_eq!(letter(text).modifier, modifier);
        }
        for text in ["Chorus", "C ", "Cx", "Gwhatever"] {
            assert!(Chord::parse(text).is_none(), "'{}' should not be a chord", text);
        }
    }

    #[test]
    fn test_not_chords() {
        for text in ["", "H", "Chorus", "Bridge", "Amazing", "grace", "8", "x", "C/x", "1/C", "C/1"] {
            assert!(Chord::parse(text).is_none(), "'{}' should not be a chord", text);
        }
    }

    #[test]
    fn test_lowercase_root_normalized() {
        assert_eq!(Chord::parse("am").unwrap().to_string(), "Am");
    }

    #[test]
    fn test_display_reproduces_source() {
        for text in ["C", "Cmaj7", "Bbm7b5", "D/F#", "Gsus4", "C7(#9)", "Es", "C♯m", "5/7", "6m", "2b"] {
            assert_eq!(Chord::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_minor_quality() {
        assert!(letter("Am7").has_minor_quality());
        assert!(!letter("Amaj7").has_minor_quality());
        assert!(!letter("A").has_minor_quality());
    }

    #[test]
    fn test_from_str_error() {
        let err = "Hm".parse::<Chord>().unwrap_err();
        assert_eq!(err, ChordFormatError("Hm".to_string()));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(Chord::parse("G/B").unwrap()).unwrap();
        assert_eq!(json["notation"], "Letter");
        assert_eq!(json["note"]["letter"], "G");
        assert_eq!(json["bass"]["letter"], "B");
    }
}
