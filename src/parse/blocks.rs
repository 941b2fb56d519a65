//! Block splitting
//!
//! Scans body lines, switching into chord mode on a line starting with the
//! opening fence and back on a closing fence. Each run of lines becomes one
//! block. A markdown run with no lines (fence at the start of the body, or
//! two fences back to back) occupies no text and produces no block; a run of
//! blank lines is still emitted as an empty-content block.

use crate::config::{NotationConfig, CLOSING_FENCE};
use crate::models::{Block, ChordProBlock, MarkdownBlock};
use crate::parse::line::classify_line;

pub fn split_blocks(lines: &[&str], config: &NotationConfig) -> Vec<Block> {
    let opening = config.opening_fence();
    let mut blocks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut open_fence: Option<&str> = None;

    for &line in lines {
        match open_fence {
            None if line.starts_with(&opening) => {
                flush_markdown(&mut blocks, &mut buffer);
                open_fence = Some(line);
            }
            None => buffer.push(line),
            Some(fence) if line.trim_end() == CLOSING_FENCE => {
                blocks.push(chordpro_block(fence, &buffer, Some(line)));
                buffer.clear();
                open_fence = None;
            }
            Some(_) => buffer.push(line),
        }
    }

    match open_fence {
        Some(fence) => {
            log::warn!("Chord block opened with '{}' is never closed", fence);
            blocks.push(chordpro_block(fence, &buffer, None));
        }
        None => flush_markdown(&mut blocks, &mut buffer),
    }

    blocks
}

/// A run with no lines emits nothing; blocks are joined with `\n`, so an
/// empty block here would add a line on output.
fn flush_markdown(blocks: &mut Vec<Block>, buffer: &mut Vec<&str>) {
    if buffer.is_empty() {
        return;
    }
    blocks.push(Block::Markdown(MarkdownBlock {
        content: buffer.join("\n"),
    }));
    buffer.clear();
}

fn chordpro_block(open_fence: &str, lines: &[&str], close_fence: Option<&str>) -> Block {
    Block::ChordPro(ChordProBlock {
        open_fence: open_fence.to_string(),
        lines: lines.iter().map(|line| classify_line(line)).collect(),
        close_fence: close_fence.map(str::to_string),
    })
}
