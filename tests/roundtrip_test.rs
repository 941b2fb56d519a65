//! Round-trip tests: parsing and serializing returns the source text

use chordsheet_wasm::{parse, parse_with, Block, Chord, Line, LineSegment, NotationConfig};

fn assert_round_trip(source: &str) {
    let doc = parse(source);
    assert_eq!(doc.to_string(), source, "round trip failed for {:?}", source);
}

#[test]
fn test_full_song_round_trips() {
    let source = "\
---
title: Amazing Grace
key: G
tags: [hymn, traditional]
---
# Amazing Grace

Traditional hymn.

```chordpro
# Verse 1
[G]Amazing [G7/B]grace, how [C]sweet the [G]sound
That [G]saved a [Em]wretch like [D]me

## Chorus
[*Slowly][G]    [C]    [D]    [G]
[Intro] is not a chord, nor is [xyz]
```

Notes after the block.
";
    assert_round_trip(source);
}

#[test]
fn test_edge_case_sources_round_trip() {
    let sources = [
        "",
        "\n",
        "\n\n\n",
        "plain prose only",
        "```chordpro",
        "```chordpro\n```",
        "```chordpro\n```\n```chordpro\n```",
        "```chordpro\n[C]never closed\n\n",
        "```chordpro\n   \n\t\n```",
        "```chordpro\n#\n#   \n###Heading\n```",
        "```chordpro\n[C][G][Am]\n[]\n[ ]\n[C\nC]\n```",
        "```chordpro\n[Cis]Ger[Es]man [Asus4]suffixes [H]\n```",
        "```chordpro\n[1]Nash[4/1]ville [5#m7]\n```",
        "```chordpro\n[C]crlf\r\n\r\n```\r\nafter\r\n",
        "---\n---",
        "---\n---\n",
        "---\n# yaml comment\ntitle:   spaced   \n---\nbody",
        "---\nnot closed\n",
        "---\n- a list\n---\n",
        "```rust\nlet x = [1];\n```",
        "  ```chordpro\nindented fence is prose\n```",
    ];
    for source in sources {
        assert_round_trip(source);
    }
}

#[test]
fn test_literal_chord_lyrics_line() {
    let doc = parse("```chordpro\n[C]Amazing [F]grace\n```");
    let Block::ChordPro(block) = &doc.blocks()[0] else {
        panic!("expected chord block");
    };
    assert_eq!(
        block.lines[0],
        Line::ChordLyrics {
            segments: vec![
                LineSegment::Chord(Chord::parse("C").unwrap()),
                LineSegment::Text("Amazing ".into()),
                LineSegment::Chord(Chord::parse("F").unwrap()),
                LineSegment::Text("grace".into()),
            ]
        }
    );
    assert_eq!(block.lines[0].to_string(), "[C]Amazing [F]grace");
}

#[test]
fn test_instrumental_line() {
    let doc = parse("```chordpro\n[C]    [F]    [G]    [C]\n```");
    let Block::ChordPro(block) = &doc.blocks()[0] else {
        panic!("expected chord block");
    };
    assert!(matches!(block.lines[0], Line::Instrumental { .. }));
}

#[test]
fn test_comment_precedes_empty() {
    let doc = parse("```chordpro\n#\n```");
    let Block::ChordPro(block) = &doc.blocks()[0] else {
        panic!("expected chord block");
    };
    assert!(matches!(block.lines[0], Line::Comment { .. }));
}

#[test]
fn test_modified_frontmatter_is_reemitted() {
    let mut doc = parse("---\ntitle:   Song\n---\nbody");
    doc.frontmatter_mut().unwrap().set("artist", "John Newton");
    assert_eq!(doc.to_string(), "---\ntitle: Song\nartist: John Newton\n---\nbody");
}

#[test]
fn test_custom_fence_round_trips() {
    let config = NotationConfig {
        fence_language: "chords".into(),
        ..NotationConfig::default()
    };
    let source = "```chords\n[C]hi\n```\n```chordpro\n[C]prose here\n```";
    let doc = parse_with(source, &config);
    assert_eq!(doc.chordpro_blocks().count(), 1);
    assert_eq!(doc.to_string(), source);
}

#[test]
fn test_json_shape() {
    let doc = parse("---\nkey: G\n---\n```chordpro\n[G]la\n```");
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["blocks"][0]["type"], "Frontmatter");
    assert_eq!(json["blocks"][1]["type"], "ChordPro");
    assert_eq!(json["blocks"][1]["lines"][0]["type"], "ChordLyrics");
}
