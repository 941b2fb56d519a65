//! Error types for chord sheet operations
//!
//! Two failure classes exist: grammar errors raised by the narrow `FromStr`
//! constructors (keys, chords, notes), and notation mismatches raised when a
//! Nashville/alphabetic conversion receives the other notation. Parsing a whole
//! document never fails.

use thiserror::Error;

/// A key string does not match the key grammar (e.g. "H", "C###", "")
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid key: '{0}'. Expected a root A-G with optional #/b and optional 'm', or '##' for Nashville")]
pub struct KeyFormatError(pub String);

/// A chord string does not match the chord grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid chord: '{0}'")]
pub struct ChordFormatError(pub String);

/// A note string does not match the note grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid note: '{0}'")]
pub struct NoteFormatError(pub String);

/// Failures of the transposer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransposeError {
    /// Caller passed a key string that fails the key grammar
    #[error(transparent)]
    KeyFormat(#[from] KeyFormatError),

    /// A chord or key is in the wrong notation for the requested conversion
    #[error("Notation mismatch: {0}")]
    NotationMismatch(&'static str),
}

pub const NOT_NASHVILLE: &str = "chord is not in Nashville notation";
pub const NOT_ALPHABETIC: &str = "chord is not in alphabetic notation";
pub const KEY_NOT_ABSOLUTE: &str = "key is not an absolute (alphabetic) key";
