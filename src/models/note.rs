//! Note value types: letter notes (A-G) and Nashville degree notes (1-7)
//!
//! A note keeps the postfix exactly as written so serialization reproduces
//! the source text. Equality compares root and accidental direction only,
//! so `C#`, `C♯` and `Cis` are equal while `C#` and `Db` are not.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::errors::NoteFormatError;
use crate::models::pitch::{
    self, Accidental, Letter, DEGREE_POSTFIXES, LETTER_POSTFIXES, MAJOR_INTERVALS,
};

/// Nashville degree tokens per chromatic interval from the key root
pub const NASHVILLE_DEGREES: [(u8, Accidental); 12] = [
    (1, Accidental::Natural),
    (1, Accidental::Sharp),
    (2, Accidental::Natural),
    (2, Accidental::Sharp),
    (3, Accidental::Natural),
    (4, Accidental::Natural),
    (4, Accidental::Sharp),
    (5, Accidental::Natural),
    (5, Accidental::Sharp),
    (6, Accidental::Natural),
    (6, Accidental::Sharp),
    (7, Accidental::Natural),
];

/// A note named by letter, e.g. `C`, `F#`, `Bb`, `Cis`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LetterNote {
    pub letter: Letter,
    pub postfix: String,
}

impl LetterNote {
    pub fn new(letter: Letter, postfix: impl Into<String>) -> Self {
        Self {
            letter,
            postfix: postfix.into(),
        }
    }

    pub fn accidental(&self) -> Accidental {
        Accidental::from_postfix(&self.postfix)
    }

    pub fn chromatic_index(&self) -> u8 {
        pitch::chromatic_index(self.letter, self.accidental())
    }

    /// Spell a pitch class using the preferred accidental
    pub fn from_index(index: u8, preferred: Option<Accidental>) -> Self {
        let (letter, accidental) = pitch::preferred_spelling(index, preferred);
        Self::new(letter, accidental.symbol())
    }

    /// All ways the start of `input` can be read as a letter note, longest first.
    ///
    /// Returns `(note, bytes_consumed)`. The bare letter is always the last
    /// candidate so a chord parser can backtrack when a German postfix
    /// swallows the start of a modifier (`Asus4` is A + `sus4`, not A-flat).
    pub fn prefix_candidates(input: &str) -> Vec<(LetterNote, usize)> {
        let mut chars = input.chars();
        let Some(letter) = chars.next().and_then(Letter::from_char) else {
            return Vec::new();
        };
        let root_len = 1;
        let rest = &input[root_len..];

        let mut candidates: Vec<(LetterNote, usize)> = LETTER_POSTFIXES
            .iter()
            .filter(|postfix| rest.starts_with(*postfix))
            .map(|postfix| (LetterNote::new(letter, *postfix), root_len + postfix.len()))
            .collect();
        candidates.push((LetterNote::new(letter, ""), root_len));
        candidates
    }
}

impl PartialEq for LetterNote {
    fn eq(&self, other: &Self) -> bool {
        self.letter == other.letter && self.accidental() == other.accidental()
    }
}

impl Eq for LetterNote {}

impl Hash for LetterNote {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.letter.hash(state);
        self.accidental().hash(state);
    }
}

impl fmt::Display for LetterNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.postfix)
    }
}

impl FromStr for LetterNote {
    type Err = NoteFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LetterNote::prefix_candidates(s)
            .into_iter()
            .find(|(_, consumed)| *consumed == s.len())
            .map(|(note, _)| note)
            .ok_or_else(|| NoteFormatError(s.to_string()))
    }
}

/// A Nashville scale degree, e.g. `1`, `4#`, `7b`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DegreeNote {
    pub degree: u8,
    pub postfix: String,
}

impl DegreeNote {
    pub fn new(degree: u8, postfix: impl Into<String>) -> Self {
        Self {
            degree,
            postfix: postfix.into(),
        }
    }

    pub fn accidental(&self) -> Accidental {
        Accidental::from_postfix(&self.postfix)
    }

    /// Semitone distance above the key root
    pub fn offset(&self) -> u8 {
        let base = MAJOR_INTERVALS[(self.degree.clamp(1, 7) - 1) as usize];
        pitch::shift_index(base, self.accidental().semitone_offset())
    }

    /// Degree token for a chromatic interval from the key root
    pub fn from_interval(interval: u8) -> Self {
        let (degree, accidental) = NASHVILLE_DEGREES[(interval % 12) as usize];
        Self::new(degree, accidental.symbol())
    }

    /// Same contract as [`LetterNote::prefix_candidates`]
    pub fn prefix_candidates(input: &str) -> Vec<(DegreeNote, usize)> {
        let degree = match input.chars().next() {
            Some(c @ '1'..='7') => c as u8 - b'0',
            _ => return Vec::new(),
        };
        let rest = &input[1..];

        let mut candidates: Vec<(DegreeNote, usize)> = DEGREE_POSTFIXES
            .iter()
            .filter(|postfix| rest.starts_with(*postfix))
            .map(|postfix| (DegreeNote::new(degree, *postfix), 1 + postfix.len()))
            .collect();
        candidates.push((DegreeNote::new(degree, ""), 1));
        candidates
    }
}

impl PartialEq for DegreeNote {
    fn eq(&self, other: &Self) -> bool {
        self.degree == other.degree && self.accidental() == other.accidental()
    }
}

impl Eq for DegreeNote {}

impl Hash for DegreeNote {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.degree.hash(state);
        self.accidental().hash(state);
    }
}

impl fmt::Display for DegreeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.degree, self.postfix)
    }
}

impl FromStr for DegreeNote {
    type Err = NoteFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DegreeNote::prefix_candidates(s)
            .into_iter()
            .find(|(_, consumed)| *consumed == s.len())
            .map(|(note, _)| note)
            .ok_or_else(|| NoteFormatError(s.to_string()))
    }
}

/// Either kind of note
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "notation")]
pub enum Note {
    Letter(LetterNote),
    Degree(DegreeNote),
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Note::Letter(note) => note.fmt(f),
            Note::Degree(note) => note.fmt(f),
        }
    }
}

impl FromStr for Note {
    type Err = NoteFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.chars().next() {
            Some(c) if c.is_ascii_digit() => s.parse().map(Note::Degree),
            _ => s.parse().map(Note::Letter),
        }
    }
}
