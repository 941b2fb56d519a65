//! Musical keys: absolute major/minor keys and the relative Nashville key
//!
//! Absolute keys carry a root note and the accidental their chords are
//! spelled with. The preference comes from the key name: an explicit sharp
//! or flat wins, a bare F prefers flats, everything else is natural (which
//! spells with sharps when a choice is needed).
//!
//! The Nashville key has no root; it serializes as the sentinel `##`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::MINOR_QUALITY_MARKER;
use crate::errors::KeyFormatError;
use crate::models::note::LetterNote;
use crate::models::pitch::{
    self, Accidental, Letter, DEGREE_POSTFIXES, MAJOR_INTERVALS, MINOR_INTERVALS,
};

/// Serialized form of the Nashville key
pub const NASHVILLE_KEY: &str = "##";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode")]
pub enum MusicalKey {
    Major {
        root: LetterNote,
        preferred: Accidental,
    },
    Minor {
        root: LetterNote,
        preferred: Accidental,
    },
    Nashville,
}

impl MusicalKey {
    pub fn major(root: LetterNote) -> Self {
        let preferred = preferred_accidental_for(&root);
        MusicalKey::Major { root, preferred }
    }

    pub fn minor(root: LetterNote) -> Self {
        let preferred = preferred_accidental_for(&root);
        MusicalKey::Minor { root, preferred }
    }

    pub fn root(&self) -> Option<&LetterNote> {
        match self {
            MusicalKey::Major { root, .. } | MusicalKey::Minor { root, .. } => Some(root),
            MusicalKey::Nashville => None,
        }
    }

    pub fn preferred_accidental(&self) -> Option<Accidental> {
        match self {
            MusicalKey::Major { preferred, .. } | MusicalKey::Minor { preferred, .. } => {
                Some(*preferred)
            }
            MusicalKey::Nashville => None,
        }
    }

    pub fn is_nashville(&self) -> bool {
        matches!(self, MusicalKey::Nashville)
    }

    /// Pitch class of the root
    pub fn chromatic_index(&self) -> Option<u8> {
        self.root().map(LetterNote::chromatic_index)
    }

    /// Semitone offsets of the scale degrees from the root
    pub fn scale_intervals(&self) -> Option<&'static [u8; 7]> {
        match self {
            MusicalKey::Major { .. } => Some(&MAJOR_INTERVALS),
            MusicalKey::Minor { .. } => Some(&MINOR_INTERVALS),
            MusicalKey::Nashville => None,
        }
    }

    /// The seven scale notes spelled with the key's preferred accidental
    pub fn scale_notes(&self) -> Vec<LetterNote> {
        match (self.chromatic_index(), self.scale_intervals()) {
            (Some(root), Some(intervals)) => intervals
                .iter()
                .map(|&step| {
                    LetterNote::from_index(
                        pitch::shift_index(root, step as i32),
                        self.preferred_accidental(),
                    )
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Relative minor of a major key (root three semitones down); `None` otherwise
    pub fn relative_minor(&self) -> Option<MusicalKey> {
        match self {
            MusicalKey::Major { root, preferred } => Some(MusicalKey::Minor {
                root: LetterNote::from_index(
                    pitch::shift_index(root.chromatic_index(), -3),
                    Some(*preferred),
                ),
                preferred: *preferred,
            }),
            _ => None,
        }
    }

    /// Relative major of a minor key (root three semitones up); `None` otherwise
    pub fn relative_major(&self) -> Option<MusicalKey> {
        match self {
            MusicalKey::Minor { root, preferred } => Some(MusicalKey::Major {
                root: LetterNote::from_index(
                    pitch::shift_index(root.chromatic_index(), 3),
                    Some(*preferred),
                ),
                preferred: *preferred,
            }),
            _ => None,
        }
    }

    /// Upward semitone distance from this key's root to another's
    pub fn interval_to(&self, other: &MusicalKey) -> Option<u8> {
        Some(pitch::interval(self.chromatic_index()?, other.chromatic_index()?))
    }
}

/// Explicit sharp or flat wins; a bare F prefers flats; otherwise natural
pub fn preferred_accidental_for(root: &LetterNote) -> Accidental {
    match root.accidental() {
        Accidental::Natural if root.letter == Letter::F => Accidental::Flat,
        accidental => accidental,
    }
}

/// Cheap grammar check for host-side validation
pub fn is_valid_key(text: &str) -> bool {
    text.parse::<MusicalKey>().is_ok()
}

impl fmt::Display for MusicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MusicalKey::Major { root, .. } => write!(f, "{}", root),
            MusicalKey::Minor { root, .. } => write!(f, "{}{}", root, MINOR_QUALITY_MARKER),
            MusicalKey::Nashville => write!(f, "{}", NASHVILLE_KEY),
        }
    }
}

impl FromStr for MusicalKey {
    type Err = KeyFormatError;

    /// Accepts `C`, `F#`, `Bb`, `F#m`, `E♭m` (root letter in any case) and `##`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text == NASHVILLE_KEY {
            return Ok(MusicalKey::Nashville);
        }

        let err = || KeyFormatError(s.to_string());
        let letter = text.chars().next().and_then(Letter::from_char).ok_or_else(err)?;
        let rest = &text[1..];
        let postfix = DEGREE_POSTFIXES
            .iter()
            .find(|postfix| rest.starts_with(*postfix))
            .copied()
            .unwrap_or("");
        let root = LetterNote::new(letter, postfix);

        match &rest[postfix.len()..] {
            "" => Ok(MusicalKey::major(root)),
            MINOR_QUALITY_MARKER => Ok(MusicalKey::minor(root)),
            _ => Err(err()),
        }
    }
}
