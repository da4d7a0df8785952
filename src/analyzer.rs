//! Batch analysis: romanize an input under every candidate key.

use serde::Serialize;

use crate::chord::Token;
use crate::key::{fifths_index, signature_accidentals, Key};
use crate::pitch::{normalize_accidentals, FLAT, SHARP};

/// The analysis of one input under one candidate key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyAnalysis {
    /// The candidate key.
    pub key: Key,
    /// Label shown in reports, e.g. `B♭ major`.
    pub display_key: String,
    /// The input re-rendered as Roman numerals, lines joined with `\n`.
    pub romanized: String,
    /// Circle-of-fifths position of the key (99 when untabulated).
    pub fifths_index: u8,
    /// Sharps/flats in the key's conventional signature (99 when untabulated).
    pub signature_accidentals: u8,
    /// Accidental glyphs appearing in `romanized`; lower reads as a better fit.
    pub accidental_score: usize,
}

/// Split text into lines, and each line into whitespace-separated tokens.
///
/// A line with no tokens yields an empty token list, which renders as an empty line.
pub fn tokenize(text: &str) -> Vec<Vec<String>> {
    text.split('\n')
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Count `♯`/`♭` glyphs in `text`.
pub fn count_accidentals(text: &str) -> usize {
    text.chars().filter(|&c| c == SHARP || c == FLAT).count()
}

/// Romanize `lines` under every key in `keys`, one record per key in catalog order.
///
/// Tokens are parsed once and reused for every key; only the degree mapping is redone.
pub fn analyze(lines: &[Vec<String>], keys: &[Key]) -> Vec<KeyAnalysis> {
    let parsed: Vec<Vec<Token>> = lines
        .iter()
        .map(|line| line.iter().map(|t| Token::parse(t)).collect())
        .collect();

    log::debug!(
        "Analyzing {} line(s), {} token(s) across {} key(s)",
        parsed.len(),
        parsed.iter().map(Vec::len).sum::<usize>(),
        keys.len()
    );

    keys.iter().map(|key| analyze_in_key(&parsed, key)).collect()
}

fn analyze_in_key(parsed: &[Vec<Token>], key: &Key) -> KeyAnalysis {
    let romanized = render(parsed, key);
    let accidental_score = count_accidentals(&romanized);
    log::trace!("{key}: score {accidental_score}: {romanized:?}");

    KeyAnalysis {
        key: *key,
        display_key: key.display_name(),
        romanized,
        fifths_index: fifths_index(key),
        signature_accidentals: signature_accidentals(key),
        accidental_score,
    }
}

fn render(parsed: &[Vec<Token>], key: &Key) -> String {
    parsed
        .iter()
        .map(|line| {
            line.iter()
                .map(|token| token.romanize(key))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a whole text in a single key, preserving its line structure.
///
/// Accidentals are normalized over the whole text first, annotations included.
pub fn romanize_text(text: &str, key: &Key) -> String {
    let parsed: Vec<Vec<Token>> = tokenize(&normalize_accidentals(text))
        .iter()
        .map(|line| line.iter().map(|t| Token::parse(t)).collect())
        .collect();
    render(&parsed, key)
}
