//! Legacy chords-above-lyrics conversion through the public API

use chordsheet_wasm::{
    combine, convert_legacy_chord_lines, convert_legacy_chord_lines_with, is_chord_line, parse,
    Line, NotationConfig, RawChordLine,
};

const LEGACY: &str = "\
---
title: Basic
---
```chordpro
# Verse
      D          G    D
Basic chord line with lyrics.

C   G   Am
F      C
And so on
```";

#[test]
fn test_basic_combine() {
    let line = combine(
        &RawChordLine::from_text("      D          G    D"),
        "Basic chord line with lyrics.",
    );
    assert_eq!(line.to_string(), "Basic [D]chord line [G]with [D]lyrics.");
}

#[test]
fn test_convert_document() {
    let mut doc = parse(LEGACY);
    assert!(convert_legacy_chord_lines(&mut doc));
    assert_eq!(
        doc.to_string(),
        "\
---
title: Basic
---
```chordpro
# Verse
Basic [D]chord line [G]with [D]lyrics.

[C]   [G]   [Am]
[F]And so [C]on
```"
    );
}

#[test]
fn test_conversion_is_idempotent() {
    let mut doc = parse(LEGACY);
    convert_legacy_chord_lines(&mut doc);
    let once = doc.to_string();

    assert!(!convert_legacy_chord_lines(&mut doc));
    assert_eq!(doc.to_string(), once);

    let mut reparsed = parse(&once);
    assert!(!convert_legacy_chord_lines(&mut reparsed));
    assert_eq!(reparsed.to_string(), once);
}

#[test]
fn test_converted_lines_reparse_as_bracket_lines() {
    let mut doc = parse(LEGACY);
    convert_legacy_chord_lines(&mut doc);
    let reparsed = parse(&doc.to_string());
    let block = reparsed.chordpro_blocks().next().unwrap();
    let kinds: Vec<&str> = block
        .lines
        .iter()
        .map(|line| match line {
            Line::Empty { .. } => "empty",
            Line::Comment { .. } => "comment",
            Line::Text { .. } => "text",
            Line::ChordLyrics { .. } => "lyrics",
            Line::Instrumental { .. } => "instrumental",
            Line::RawChords(_) => "raw",
        })
        .collect();
    assert_eq!(kinds, ["comment", "lyrics", "empty", "instrumental", "lyrics"]);
}

#[test]
fn test_lyrics_only_block_is_unchanged() {
    let source = "```chordpro\nAmazing grace\nhow sweet the sound\n```";
    let mut doc = parse(source);
    assert!(!convert_legacy_chord_lines(&mut doc));
    assert_eq!(doc.to_string(), source);
}

#[test]
fn test_threshold_from_config() {
    let source = "```chordpro\nC  Chorus\nla la\n```";
    assert!(!is_chord_line("C  Chorus"));

    let mut strict = parse(source);
    assert!(!convert_legacy_chord_lines(&mut strict));

    let config = NotationConfig {
        chord_line_threshold: 0.5,
        ..NotationConfig::default()
    };
    let mut lenient = parse(source);
    assert!(convert_legacy_chord_lines_with(&mut lenient, &config));
    assert_eq!(lenient.to_string(), "```chordpro\n[C]la [*Chorus]la\n```");
}
