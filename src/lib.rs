//! `roman_keys`: chord symbols to Roman numerals, in every candidate key at once.
//!
//! Give it an unlabeled progression such as `C G Am F` and it renders the progression as
//! Roman numerals under each of the 21 spelled major keys (optionally 42 with minor).
//! It then ranks those keys so the most plausible one is easy to spot.
//!
//! ## Public invariants (must not change without a major version bump)
//!
//! - **Chromatic numerals**: a chord root renders as its semitone distance from the tonic,
//!   `I ♭II II ♭III III IV ♯IV V ♭VI VI ♭VII VII`, independent of mode. `Am` in C major is
//!   `VIm`: the quality text follows the numeral verbatim.
//! - **Deterministic**: the same input and options yield the same report, ordering included.
//! - **Total**: every string is accepted. Unknown notes render as `?`, tokens without a
//!   root letter pass through unchanged, and keys missing from the tables get position 99.
//! - **Stable ranking**: ties keep catalog order (letters C..B, then natural/♯/♭, then mode).
//!
//! ## Swappable parts
//!
//! - **Ranking** ([`RankingMode`]): rendered-accidental score, circle of fifths, or tonic name.
//! - **Line handling** ([`LineMode`]): per-line blocks or one combined progression.
//!
//! ## Example
//!
//! ```
//! use roman_keys::{analyze_and_rank_with, AnalysisOptions, RankingMode};
//!
//! let opts = AnalysisOptions { ranking: RankingMode::Score, top: Some(1), ..Default::default() };
//! assert_eq!(analyze_and_rank_with("C G Am F", &opts), "C major:\n  I V VIm IV");
//! ```

pub mod analyzer;
pub mod chord;
pub mod config;
pub mod degree;
pub mod error;
pub mod key;
pub mod pitch;
pub mod rank;
pub mod report;

// Re-export main types
pub use analyzer::{analyze, count_accidentals, romanize_text, tokenize, KeyAnalysis};
pub use chord::{romanize_token, ParsedChord, Token};
pub use config::Config;
pub use degree::{degree_of, UNKNOWN_DEGREE};
pub use error::{Error, Result};
pub use key::{
    all_keys, catalog, fifths_index, relative_major, signature_accidentals, Key, Mode,
    UNKNOWN_POSITION,
};
pub use pitch::{normalize_accidentals, pitch_class_of, Accidental, NoteName, PitchClass};
pub use rank::{rank, RankingMode};
pub use report::{
    analyze_and_rank, analyze_and_rank_with, analyze_blocks, format_report, report_json,
    AnalysisOptions, LineMode,
};
