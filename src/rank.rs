//! Ordering candidate keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analyzer::KeyAnalysis;
use crate::error::{Error, Result};

/// How to order the per-key analyses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankingMode {
    /// Fewest accidentals in the rendered numerals first.
    #[default]
    Score,
    /// Closest to C major / A minor on the circle of fifths first.
    Fifths,
    /// By spelled tonic.
    Alphabetical,
}

impl RankingMode {
    /// The literal used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            RankingMode::Score => "score",
            RankingMode::Fifths => "fifths",
            RankingMode::Alphabetical => "alphabetical",
        }
    }
}

impl fmt::Display for RankingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "score" => Ok(RankingMode::Score),
            "fifths" => Ok(RankingMode::Fifths),
            "alphabetical" => Ok(RankingMode::Alphabetical),
            _ => Err(Error::InvalidRankingMode(s.to_string())),
        }
    }
}

/// Order `records` by `mode`.
///
/// The sort is stable: ties keep their incoming (catalog) order.
pub fn rank(mut records: Vec<KeyAnalysis>, mode: RankingMode) -> Vec<KeyAnalysis> {
    match mode {
        RankingMode::Score => records.sort_by_key(|r| r.accidental_score),
        RankingMode::Fifths => records.sort_by_key(|r| r.fifths_index),
        RankingMode::Alphabetical => records.sort_by_cached_key(|r| r.key.tonic.to_string()),
    }
    records
}
