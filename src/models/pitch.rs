//! Chromatic pitch arithmetic and enharmonic spelling
//!
//! Pitch classes are indices 0-11 with C = 0. Letters map to fixed base
//! offsets, accidentals shift by one semitone, and the spelling table turns
//! an index back into a letter + accidental using a preferred accidental.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven letter names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Base semitone offset from C
    pub fn semitone(self) -> u8 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Case-insensitive; anything outside A-G is rejected (including German H)
    pub fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidental direction derived from a note postfix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    Sharp,
    Flat,
    Natural,
}

impl Accidental {
    /// Interpret a postfix spelling (`#`, `♯`, `is` are sharp; `b`, `♭`, `es`, `s` are flat)
    pub fn from_postfix(postfix: &str) -> Accidental {
        match postfix {
            "#" | "♯" | "is" => Accidental::Sharp,
            "b" | "♭" | "es" | "s" => Accidental::Flat,
            _ => Accidental::Natural,
        }
    }

    pub fn semitone_offset(self) -> i32 {
        match self {
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
        }
    }

    /// ASCII postfix used when respelling
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::Natural => "",
        }
    }
}

/// Postfixes accepted after a letter root, longest first
pub const LETTER_POSTFIXES: [&str; 7] = ["is", "es", "#", "♯", "b", "♭", "s"];

/// Postfixes accepted after a Nashville degree
pub const DEGREE_POSTFIXES: [&str; 4] = ["#", "♯", "b", "♭"];

/// Semitone offsets of the major scale degrees
pub const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];

/// Semitone offsets of the natural minor scale degrees
pub const MINOR_INTERVALS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];

/// Canonical spellings per pitch class: sharp spelling first, flat second
const SPELLINGS: [&[(Letter, Accidental)]; 12] = [
    &[(Letter::C, Accidental::Natural)],
    &[(Letter::C, Accidental::Sharp), (Letter::D, Accidental::Flat)],
    &[(Letter::D, Accidental::Natural)],
    &[(Letter::D, Accidental::Sharp), (Letter::E, Accidental::Flat)],
    &[(Letter::E, Accidental::Natural)],
    &[(Letter::F, Accidental::Natural)],
    &[(Letter::F, Accidental::Sharp), (Letter::G, Accidental::Flat)],
    &[(Letter::G, Accidental::Natural)],
    &[(Letter::G, Accidental::Sharp), (Letter::A, Accidental::Flat)],
    &[(Letter::A, Accidental::Natural)],
    &[(Letter::A, Accidental::Sharp), (Letter::B, Accidental::Flat)],
    &[(Letter::B, Accidental::Natural)],
];

/// Chromatic index of a letter plus accidental, mod 12
pub fn chromatic_index(letter: Letter, accidental: Accidental) -> u8 {
    (letter.semitone() as i32 + accidental.semitone_offset()).rem_euclid(12) as u8
}

/// Shift a pitch class by a signed number of semitones
pub fn shift_index(index: u8, semitones: i32) -> u8 {
    (index as i32 + semitones).rem_euclid(12) as u8
}

/// Upward distance from one pitch class to another, always in 0..12
pub fn interval(from_index: u8, to_index: u8) -> u8 {
    ((to_index as i32 - from_index as i32 + 12) % 12) as u8
}

/// Pick the spelling of a pitch class.
///
/// Positions with two spellings use the flat one only when `Flat` is
/// preferred; `Sharp`, `Natural` and no preference all take the first option.
pub fn preferred_spelling(index: u8, preferred: Option<Accidental>) -> (Letter, Accidental) {
    let options = SPELLINGS[(index % 12) as usize];
    match (options, preferred) {
        ([_, flat], Some(Accidental::Flat)) => *flat,
        _ => options[0],
    }
}

/// Spelled name of a pitch class, e.g. `preferred_note_name(1, Some(Flat)) == "Db"`
pub fn preferred_note_name(index: u8, preferred: Option<Accidental>) -> String {
    let (letter, accidental) = preferred_spelling(index, preferred);
    format!("{}{}", letter, accidental.symbol())
}
