//! Format converters
//!
//! Rewrites text written in older chord sheet conventions into the inline
//! bracket notation the parser understands.

pub mod legacy;

pub use legacy::{
    combine,
    convert_legacy_chord_lines,
    convert_legacy_chord_lines_with,
    convert_lines,
    is_chord_line,
    is_chord_line_with,
};
