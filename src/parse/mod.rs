//! Parsing module for the chord sheet engine
//!
//! Converts raw text into a [`Document`]: frontmatter extraction, block
//! splitting, line classification and inline segment tokenization. Parsing
//! is total; malformed input degrades to plain text instead of failing.

pub mod frontmatter;
pub mod blocks;
pub mod line;
pub mod segments;

// Re-export commonly used functions
pub use frontmatter::extract_frontmatter;
pub use blocks::split_blocks;
pub use line::classify_line;
pub use segments::{has_bracket_marker, tokenize_segments};

use crate::config::NotationConfig;
use crate::models::Document;

/// Parse text with the default configuration
pub fn parse(source: &str) -> Document {
    parse_with(source, &NotationConfig::default())
}

pub fn parse_with(source: &str, config: &NotationConfig) -> Document {
    let lines: Vec<&str> = source.split('\n').collect();
    let (frontmatter, consumed) = extract_frontmatter(&lines);

    let body = &lines[consumed..];
    let blocks = if body.is_empty() {
        Vec::new()
    } else {
        split_blocks(body, config)
    };

    log::debug!(
        "Parsed {} lines into {} blocks (frontmatter: {})",
        lines.len(),
        blocks.len(),
        frontmatter.is_some()
    );
    Document::new(frontmatter, blocks)
}
