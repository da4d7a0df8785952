//! Report rendering and the text-in, text-out entry points.

use serde::{Deserialize, Serialize};

use crate::analyzer::{analyze, tokenize, KeyAnalysis};
use crate::error::Result;
use crate::key::catalog;
use crate::pitch::normalize_accidentals;
use crate::rank::{rank, RankingMode};

/// How multi-line input is analyzed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineMode {
    /// Each line gets its own full, separately ranked report block; an interior blank
    /// line yields a block of empty numerals.
    #[default]
    PerLine,
    /// All lines form one progression; each key's numerals keep the line breaks.
    Combined,
}

/// Knobs for [`analyze_and_rank_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisOptions {
    /// Ordering of the candidate keys.
    pub ranking: RankingMode,
    /// Add the 21 minor keys to the catalog.
    pub include_minor: bool,
    /// Per-line or combined analysis.
    pub line_mode: LineMode,
    /// Keep only the first `n` records of each block.
    pub top: Option<usize>,
}

/// Render ranked records as `"{key}:\n  {numerals}"` blocks separated by a blank line.
pub fn format_report(records: &[KeyAnalysis]) -> String {
    records
        .iter()
        .map(|r| format!("{}:\n  {}", r.display_key, r.romanized))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Analyze and rank `text`, returning one ranked block of records per report block.
///
/// Empty input yields no blocks.
pub fn analyze_blocks(text: &str, opts: &AnalysisOptions) -> Vec<Vec<KeyAnalysis>> {
    let normalized = normalize_accidentals(text);
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let keys = catalog(opts.include_minor);
    let inputs: Vec<Vec<Vec<String>>> = match opts.line_mode {
        LineMode::PerLine => tokenize(trimmed)
            .into_iter()
            .map(|line| vec![line])
            .collect(),
        LineMode::Combined => vec![tokenize(trimmed)],
    };
    log::debug!(
        "{} block(s), {} key(s), ranking by {}",
        inputs.len(),
        keys.len(),
        opts.ranking
    );

    inputs
        .iter()
        .map(|lines| {
            let mut ranked = rank(analyze(lines, &keys), opts.ranking);
            if let Some(n) = opts.top {
                ranked.truncate(n);
            }
            ranked
        })
        .collect()
}

/// Analyze `text` under the given options and render the report.
///
/// Per-line blocks are joined with a newline.
pub fn analyze_and_rank_with(text: &str, opts: &AnalysisOptions) -> String {
    analyze_blocks(text, opts)
        .iter()
        .map(|block| format_report(block))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Analyze `text` across all major keys, one block per line, ordered by `mode`.
pub fn analyze_and_rank(text: &str, mode: RankingMode) -> String {
    analyze_and_rank_with(
        text,
        &AnalysisOptions {
            ranking: mode,
            ..AnalysisOptions::default()
        },
    )
}

/// Machine-readable form of [`analyze_blocks`].
pub fn report_json(text: &str, opts: &AnalysisOptions) -> Result<String> {
    let blocks = analyze_blocks(text, opts);
    let value = serde_json::json!({
        "schema_version": 1,
        "ranking": opts.ranking,
        "line_mode": opts.line_mode,
        "blocks": blocks,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_layout() {
        let opts = AnalysisOptions {
            top: Some(2),
            ..AnalysisOptions::default()
        };
        let report = analyze_and_rank_with("C G Am F", &opts);
        assert_eq!(report, "C major:\n  I V VIm IV\n\nE♯ major:\n  V II IIIm I");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(analyze_and_rank("", RankingMode::Score), "");
        assert_eq!(analyze_and_rank(" \n\t\n", RankingMode::Fifths), "");
    }

    #[test]
    fn per_line_mode_produces_one_block_per_line() {
        let blocks = analyze_blocks("C G\n\nF C", &AnalysisOptions::default());
        assert_eq!(blocks.len(), 3);
        assert!(blocks.iter().all(|b| b.len() == 21));
        assert_eq!(blocks[1][0].display_key, "C major");
        assert!(blocks[1].iter().all(|r| r.romanized.is_empty() && r.accidental_score == 0));
        assert_eq!(blocks[2][0].romanized, "IV I");
        assert_eq!(blocks[2][0].display_key, "C major");
    }

    #[test]
    fn combined_mode_keeps_line_breaks_in_one_block() {
        let opts = AnalysisOptions {
            line_mode: LineMode::Combined,
            ..AnalysisOptions::default()
        };
        let blocks = analyze_blocks("C G\nF C", &opts);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0][0].romanized, "I V\nIV I");
    }

    #[test]
    fn minor_keys_double_the_catalog() {
        let opts = AnalysisOptions {
            include_minor: true,
            ..AnalysisOptions::default()
        };
        let blocks = analyze_blocks("Am Dm E7", &opts);
        assert_eq!(blocks[0].len(), 42);
    }

    #[test]
    fn input_accidentals_are_normalized_before_analysis() {
        let report = analyze_and_rank_with(
            "Bb F",
            &AnalysisOptions {
                ranking: RankingMode::Fifths,
                top: Some(1),
                ..AnalysisOptions::default()
            },
        );
        assert_eq!(report, "C major:\n  ♭VII IV");
    }

    #[test]
    fn json_report_carries_every_block() {
        let json = report_json("C G\nAm", &AnalysisOptions::default()).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["ranking"], "score");
        assert_eq!(value["line_mode"], "per-line");
        assert_eq!(value["blocks"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["blocks"][0][0]["display_key"], "C major");
        assert_eq!(value["blocks"][0][0]["key"]["tonic"], "C");
        assert_eq!(value["blocks"][0][0]["key"]["mode"], "major");
    }
}
