//! Document, blocks and frontmatter
//!
//! A document is an ordered list of blocks. Frontmatter, when present, is
//! always the first block and appears at most once; the constructor and the
//! accessors below keep that invariant, so `blocks` is not public.
//!
//! Serialization joins blocks with `\n` and never adds or removes text, so
//! `parse(text).to_string() == text`.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::fmt;

use crate::config::CLOSING_FENCE;
use crate::models::chord::Chord;
use crate::models::key::MusicalKey;
use crate::models::line::{Line, LineSegment};

/// Opening and closing line of a frontmatter block
pub const FRONTMATTER_DELIMITER: &str = "---";

/// Frontmatter property holding the song key
pub const KEY_PROPERTY: &str = "key";

/// Leading YAML property block
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Frontmatter {
    properties: Mapping,

    /// Property lines exactly as parsed; dropped once a property changes
    #[serde(skip)]
    source: Option<Vec<String>>,
}

impl Frontmatter {
    pub fn new(properties: Mapping) -> Self {
        Self {
            properties,
            source: None,
        }
    }

    pub(crate) fn from_source(properties: Mapping, source: Vec<String>) -> Self {
        Self {
            properties,
            source: Some(source),
        }
    }

    pub fn properties(&self) -> &Mapping {
        &self.properties
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Insert or replace a property; existing properties keep their position
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        self.properties
            .insert(Value::String(name.to_string()), value.into());
        self.source = None;
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let removed = self.properties.remove(name);
        if removed.is_some() {
            self.source = None;
        }
        removed
    }

    /// Lines between the delimiters
    fn body_lines(&self) -> Result<Vec<String>, serde_yaml::Error> {
        if let Some(source) = &self.source {
            return Ok(source.clone());
        }
        if self.properties.is_empty() {
            return Ok(Vec::new());
        }
        let yaml = serde_yaml::to_string(&self.properties)?;
        Ok(yaml.lines().map(str::to_string).collect())
    }
}

impl PartialEq for Frontmatter {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties
    }
}

impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self.body_lines().map_err(|e| {
            log::error!("Failed to serialize frontmatter: {}", e);
            fmt::Error
        })?;
        writeln!(f, "{}", FRONTMATTER_DELIMITER)?;
        for line in lines {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", FRONTMATTER_DELIMITER)
    }
}

/// Fenced chord block
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordProBlock {
    /// Opening fence line as written, e.g. ```` ```chordpro ````
    pub open_fence: String,
    pub lines: Vec<Line>,
    /// Closing fence line as written; `None` when the block runs to end of input
    pub close_fence: Option<String>,
}

impl ChordProBlock {
    pub fn new(open_fence: impl Into<String>, lines: Vec<Line>) -> Self {
        Self {
            open_fence: open_fence.into(),
            lines,
            close_fence: Some(CLOSING_FENCE.to_string()),
        }
    }

    /// Block already uses inline bracket chords somewhere
    pub fn has_bracket_chords(&self) -> bool {
        self.lines.iter().any(Line::has_bracket_chords)
    }
}

impl fmt::Display for ChordProBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.open_fence)?;
        for line in &self.lines {
            write!(f, "\n{}", line)?;
        }
        if let Some(close) = &self.close_fence {
            write!(f, "\n{}", close)?;
        }
        Ok(())
    }
}

/// Prose outside chord blocks, kept verbatim
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarkdownBlock {
    pub content: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum Block {
    Frontmatter(Frontmatter),
    ChordPro(ChordProBlock),
    Markdown(MarkdownBlock),
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Frontmatter(frontmatter) => frontmatter.fmt(f),
            Block::ChordPro(block) => block.fmt(f),
            Block::Markdown(block) => write!(f, "{}", block.content),
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Default)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Build a document; frontmatter blocks inside `body` are dropped
    pub fn new(frontmatter: Option<Frontmatter>, body: Vec<Block>) -> Self {
        let mut blocks = Vec::with_capacity(body.len() + 1);
        blocks.extend(frontmatter.map(Block::Frontmatter));
        for block in body {
            match block {
                Block::Frontmatter(_) => {
                    log::warn!("Ignoring frontmatter block outside the first position");
                }
                other => blocks.push(other),
            }
        }
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn frontmatter(&self) -> Option<&Frontmatter> {
        match self.blocks.first() {
            Some(Block::Frontmatter(frontmatter)) => Some(frontmatter),
            _ => None,
        }
    }

    pub fn frontmatter_mut(&mut self) -> Option<&mut Frontmatter> {
        match self.blocks.first_mut() {
            Some(Block::Frontmatter(frontmatter)) => Some(frontmatter),
            _ => None,
        }
    }

    /// Set a frontmatter property, creating the frontmatter at the front if missing
    pub fn set_property(&mut self, name: &str, value: impl Into<Value>) {
        match self.blocks.first_mut() {
            Some(Block::Frontmatter(frontmatter)) => frontmatter.set(name, value),
            _ => {
                let mut frontmatter = Frontmatter::default();
                frontmatter.set(name, value);
                self.blocks.insert(0, Block::Frontmatter(frontmatter));
            }
        }
    }

    /// Key declared in the frontmatter; an unparseable value counts as absent
    pub fn key(&self) -> Option<MusicalKey> {
        let raw = self.frontmatter()?.get_str(KEY_PROPERTY)?;
        match raw.parse() {
            Ok(key) => Some(key),
            Err(e) => {
                log::warn!("Ignoring frontmatter key: {}", e);
                None
            }
        }
    }

    pub fn set_key(&mut self, key: &MusicalKey) {
        self.set_property(KEY_PROPERTY, key.to_string());
    }

    pub fn chordpro_blocks(&self) -> impl Iterator<Item = &ChordProBlock> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::ChordPro(block) => Some(block),
            _ => None,
        })
    }

    pub fn chordpro_blocks_mut(&mut self) -> impl Iterator<Item = &mut ChordProBlock> + '_ {
        self.blocks.iter_mut().filter_map(|block| match block {
            Block::ChordPro(block) => Some(block),
            _ => None,
        })
    }

    /// Every bracket chord in document order
    pub fn chords(&self) -> impl Iterator<Item = &Chord> + '_ {
        self.chordpro_blocks()
            .flat_map(|block| block.lines.iter())
            .filter_map(Line::segments)
            .flatten()
            .filter_map(|segment| match segment {
                LineSegment::Chord(chord) => Some(chord),
                _ => None,
            })
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markdown(text: &str) -> Block {
        Block::Markdown(MarkdownBlock {
            content: text.to_string(),
        })
    }

    #[test]
    fn test_frontmatter_stays_first() {
        let doc = Document::new(
            None,
            vec![markdown("intro"), Block::Frontmatter(Frontmatter::default())],
        );
        assert!(doc.frontmatter().is_none());
        assert_eq!(doc.blocks().len(), 1);
    }

    #[test]
    fn test_set_key_creates_frontmatter() {
        let mut doc = Document::new(None, vec![markdown("body")]);
        doc.set_key(&"D".parse().unwrap());
        assert_eq!(doc.to_string(), "---\nkey: D\n---\nbody");
        assert_eq!(doc.key().unwrap().to_string(), "D");
    }

    #[test]
    fn test_set_property_reuses_existing_frontmatter() {
        let mut doc = Document::new(None, vec![markdown("body")]);
        doc.set_property("title", "Song");
        doc.set_property("capo", 2);
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.to_string(), "---\ntitle: Song\ncapo: 2\n---\nbody");

        doc.set_property("title", "Other");
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.frontmatter().unwrap().get_str("title"), Some("Other"));
    }

    #[test]
    fn test_frontmatter_keeps_source_until_modified() {
        let mut properties = Mapping::new();
        properties.insert("title".into(), "Song".into());
        properties.insert("key".into(), "C".into());
        let mut frontmatter = Frontmatter::from_source(
            properties,
            vec!["title:   Song".to_string(), "key: C".to_string()],
        );
        assert_eq!(frontmatter.to_string(), "---\ntitle:   Song\nkey: C\n---");

        frontmatter.set("key", "D");
        assert_eq!(frontmatter.to_string(), "---\ntitle: Song\nkey: D\n---");
    }

    #[test]
    fn test_empty_frontmatter_display() {
        assert_eq!(Frontmatter::default().to_string(), "---\n---");
    }

    #[test]
    fn test_chordpro_block_display() {
        let block = ChordProBlock::new(
            "```chordpro",
            vec![Line::Text {
                content: "hello".into(),
            }],
        );
        assert_eq!(block.to_string(), "```chordpro\nhello\n```");

        let unclosed = ChordProBlock {
            close_fence: None,
            ..block
        };
        assert_eq!(unclosed.to_string(), "```chordpro\nhello");
    }

    #[test]
    fn test_invalid_key_is_absent() {
        let mut frontmatter = Frontmatter::default();
        frontmatter.set("key", "H");
        let doc = Document::new(Some(frontmatter), Vec::new());
        assert!(doc.key().is_none());
    }
}
