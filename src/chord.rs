//! Chord-symbol parsing: root, free-form quality, optional bass.
//!
//! Grammar (after accidental normalization):
//!
//! - root: `^[A-G][♯♭]?`
//! - bass: the first `/` or `on`, optional whitespace, then a note name
//! - quality: everything between the root and the bass marker, trimmed
//!
//! The quality is opaque: `maj7`, `sus4`, `7(♭9)` are carried through verbatim.

use std::sync::LazyLock;

use regex::Regex;

use crate::degree::{interval_between, numeral_for_interval};
use crate::key::Key;
use crate::pitch::{normalize_accidentals, NoteName};

static ROOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-G][♯♭]?").expect("root pattern is valid"));

static BASS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:on\s*|/\s*)([A-G][♯♭]?)").expect("bass pattern is valid")
});

/// A chord symbol split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedChord {
    /// Root note as spelled.
    pub root: NoteName,
    /// Everything between the root and the bass marker, trimmed.
    pub quality: String,
    /// Bass note from slash (`C/E`) or `on` (`ConE`) notation.
    pub bass: Option<NoteName>,
}

impl ParsedChord {
    /// Parse a chord token. Returns `None` when the token does not start with a note letter.
    pub fn parse(token: &str) -> Option<Self> {
        let token = normalize_accidentals(token);
        let root_match = ROOT_RE.find(&token)?;
        let root: NoteName = root_match.as_str().parse().ok()?;

        let bass_capture = BASS_RE.captures(&token);
        let (quality_end, bass) = match &bass_capture {
            Some(caps) => {
                // Group 0 always exists for a successful capture.
                let start = caps.get(0).map_or(token.len(), |m| m.start());
                let bass = caps.get(1).and_then(|m| m.as_str().parse().ok());
                (start, bass)
            }
            None => (token.len(), None),
        };

        let quality = token
            .get(root_match.end()..quality_end.max(root_match.end()))
            .unwrap_or("")
            .trim()
            .to_string();

        Some(Self { root, quality, bass })
    }

    /// Render against `key`: `{root}{quality}` or `{root}{quality}/{bass}`.
    pub fn romanize(&self, key: &Key) -> String {
        let tonic = key.tonic.pitch_class();
        let degree =
            |note: NoteName| numeral_for_interval(interval_between(tonic, note.pitch_class()));
        match self.bass {
            Some(bass) => format!("{}{}/{}", degree(self.root), self.quality, degree(bass)),
            None => format!("{}{}", degree(self.root), self.quality),
        }
    }
}

/// One whitespace-delimited input token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A token with a recognizable root.
    Chord(ParsedChord),
    /// Anything else (bar lines, annotations); rendered unchanged in every key.
    Passthrough(String),
}

impl Token {
    /// Classify a raw token. Parsing does not depend on the key, so a token can be parsed
    /// once and rendered in as many keys as needed.
    pub fn parse(raw: &str) -> Self {
        match ParsedChord::parse(raw) {
            Some(chord) => Token::Chord(chord),
            None => Token::Passthrough(raw.to_string()),
        }
    }

    /// Render this token in `key`.
    pub fn romanize(&self, key: &Key) -> String {
        match self {
            Token::Chord(chord) => chord.romanize(key),
            Token::Passthrough(raw) => raw.clone(),
        }
    }
}

/// Parse `token` and render it in `key`; non-chord tokens come back unchanged.
pub fn romanize_token(token: &str, key: &Key) -> String {
    Token::parse(token).romanize(key)
}
