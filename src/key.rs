//! Candidate keys and their circle-of-fifths / key-signature bookkeeping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pitch::{Accidental, NoteName};

/// Returned by [`fifths_index`] and [`signature_accidentals`] for keys missing from the
/// tables, so that they sort after every tabulated key.
pub const UNKNOWN_POSITION: u8 = 99;

const LETTERS: [char; 7] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];
const ACCIDENTALS: [Accidental; 3] = [Accidental::Natural, Accidental::Sharp, Accidental::Flat];

/// Major tonics clockwise from C through the sharps, then the flat side from C♭ back to F.
const CIRCLE_OF_FIFTHS: [&str; 15] = [
    "C", "G", "D", "A", "E", "B", "F♯", "C♯", "C♭", "G♭", "D♭", "A♭", "E♭", "B♭", "F",
];

const RELATIVE_MAJORS: [(&str, &str); 15] = [
    ("A", "C"),
    ("E", "G"),
    ("B", "D"),
    ("F♯", "A"),
    ("C♯", "E"),
    ("G♯", "B"),
    ("D♯", "F♯"),
    ("A♯", "C♯"),
    ("D", "F"),
    ("G", "B♭"),
    ("C", "E♭"),
    ("F", "A♭"),
    ("B♭", "D♭"),
    ("E♭", "G♭"),
    ("A♭", "C♭"),
];

const MAJOR_SHARPS: [&str; 8] = ["C", "G", "D", "A", "E", "B", "F♯", "C♯"];
const MAJOR_FLATS: [&str; 8] = ["C", "F", "B♭", "E♭", "A♭", "D♭", "G♭", "C♭"];
const MINOR_SHARPS: [&str; 8] = ["A", "E", "B", "F♯", "C♯", "G♯", "D♯", "A♯"];
const MINOR_FLATS: [&str; 8] = ["A", "D", "G", "C", "F", "B♭", "E♭", "A♭"];

/// Major vs minor key mode.
///
/// Mode drives the fifths and key-signature lookups only; chord degrees are rendered the
/// same way in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Ionian.
    Major,
    /// Aeolian.
    Minor,
}

impl Mode {
    /// Lower-case mode name used in key labels.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Major => "major",
            Mode::Minor => "minor",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maj" | "major" => Ok(Mode::Major),
            "min" | "minor" => Ok(Mode::Minor),
            _ => Err(Error::InvalidMode(s.to_string())),
        }
    }
}

/// A key as (spelled tonic, mode).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Key {
    /// Tonic as spelled, e.g. `G♭` rather than `F♯`.
    pub tonic: NoteName,
    /// Major vs minor.
    pub mode: Mode,
}

impl Key {
    /// Construct a key.
    pub fn new(tonic: NoteName, mode: Mode) -> Self {
        Self { tonic, mode }
    }

    /// Display as `C♯ major` / `A minor`.
    pub fn display_name(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tonic, self.mode)
    }
}

impl FromStr for Key {
    type Err = Error;

    /// Accepts `C:maj`, `A:min`, `F#:major`, `Bb minor`, or a bare tonic (major).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (tonic_str, mode_str) = match s.split_once(|c: char| c == ':' || c.is_whitespace()) {
            Some((tonic, mode)) => (tonic, Some(mode)),
            None => (s, None),
        };
        let tonic: NoteName = tonic_str
            .parse()
            .map_err(|_| Error::InvalidKey(s.to_string()))?;
        let mode = match mode_str {
            Some(m) => m.parse()?,
            None => Mode::Major,
        };
        Ok(Key { tonic, mode })
    }
}

/// Every candidate key: letters C..B, then natural/sharp/flat, then each of `modes`.
pub fn all_keys(modes: &[Mode]) -> Vec<Key> {
    let mut keys = Vec::with_capacity(LETTERS.len() * ACCIDENTALS.len() * modes.len());
    for letter in LETTERS {
        for accidental in ACCIDENTALS {
            for &mode in modes {
                keys.push(Key::new(NoteName { letter, accidental }, mode));
            }
        }
    }
    keys
}

/// The analysis catalog: major keys only unless `include_minor` is set.
pub fn catalog(include_minor: bool) -> Vec<Key> {
    if include_minor {
        all_keys(&[Mode::Major, Mode::Minor])
    } else {
        all_keys(&[Mode::Major])
    }
}

/// Spelling of the relative major for a key.
///
/// A major key is its own relative major. Minor tonics missing from the table map to
/// themselves.
pub fn relative_major(key: &Key) -> String {
    let tonic = key.tonic.to_string();
    match key.mode {
        Mode::Major => tonic,
        Mode::Minor => RELATIVE_MAJORS
            .iter()
            .find(|(minor, _)| *minor == tonic)
            .map(|(_, major)| (*major).to_string())
            .unwrap_or(tonic),
    }
}

/// Position of the key (via its relative major) on the circle of fifths.
///
/// Returns [`UNKNOWN_POSITION`] for spellings the circle does not list (`D♯`, `F♭`, ...).
pub fn fifths_index(key: &Key) -> u8 {
    let reference = relative_major(key);
    position(&CIRCLE_OF_FIFTHS, &reference).unwrap_or(UNKNOWN_POSITION)
}

/// Number of sharps or flats in the key's conventional signature.
///
/// Returns [`UNKNOWN_POSITION`] for keys with no conventional signature.
pub fn signature_accidentals(key: &Key) -> u8 {
    let (sharps, flats) = match key.mode {
        Mode::Major => (&MAJOR_SHARPS, &MAJOR_FLATS),
        Mode::Minor => (&MINOR_SHARPS, &MINOR_FLATS),
    };
    let tonic = key.tonic.to_string();
    position(sharps, &tonic)
        .or_else(|| position(flats, &tonic))
        .unwrap_or(UNKNOWN_POSITION)
}

fn position(table: &[&str], name: &str) -> Option<u8> {
    table.iter().position(|&n| n == name).map(|i| i as u8)
}
