//! Note names, accidental normalization and pitch-class resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

/// Sharp glyph used in every rendered note, key and numeral (U+266F).
pub const SHARP: char = '\u{266F}';
/// Flat glyph used in every rendered note, key and numeral (U+266D).
pub const FLAT: char = '\u{266D}';

/// Canonical chromatic spelling, indexed by pitch class.
const CHROMATIC: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

/// Spellings that are not in [`CHROMATIC`] and the canonical name they collapse to.
const ENHARMONICS: [(&str, &str); 9] = [
    ("C♭", "B"),
    ("D♭", "C♯"),
    ("E♭", "D♯"),
    ("F♭", "E"),
    ("G♭", "F♯"),
    ("A♭", "G♯"),
    ("B♭", "A♯"),
    ("E♯", "F"),
    ("B♯", "C"),
];

/// A pitch class in 12-TET, \(0..=11\).
///
/// Mapping (sharp spelling):
/// - 0=C, 1=C♯, 2=D, 3=D♯, 4=E, 5=F, 6=F♯, 7=G, 8=G♯, 9=A, 10=A♯, 11=B
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(pub u8);

impl PitchClass {
    /// Parse a note spelling into a pitch class.
    ///
    /// Accepts the same spellings as [`pitch_class_of`], but reports failure as an error
    /// instead of `None`.
    pub fn parse(s: &str) -> Result<Self> {
        pitch_class_of(s).ok_or_else(|| Error::InvalidNote(s.to_string()))
    }

    /// Semitone distance upward from `from` to `self`, in `0..12`.
    pub fn interval_from(self, from: PitchClass) -> PitchClass {
        PitchClass(mod12(self.0 as i32 - from.0 as i32))
    }
}

/// Rewrite every accidental spelling to the internal glyph set.
///
/// ASCII `#`, full-width `＃` and `♯` become `♯`; ASCII `b`, full-width `ｂ` and `♭`
/// become `♭`. The substitution is global over the text, so a lower-case `b` inside a
/// chord quality (`m7b5`) is rewritten too.
pub fn normalize_accidentals(input: &str) -> String {
    input
        .chars()
        .map(|c| match c {
            '#' | '＃' | SHARP => SHARP,
            'b' | 'ｂ' | FLAT => FLAT,
            other => other,
        })
        .collect()
}

/// Resolve a note spelling to its pitch class.
///
/// Enharmonic spellings (`D♭`, `E♯`, `C♭`, ...) collapse onto the canonical sharp or natural
/// name before the chromatic lookup. Returns `None` for anything that is not a single
/// letter A–G followed by at most one accidental.
pub fn pitch_class_of(note: &str) -> Option<PitchClass> {
    let note = normalize_accidentals(note.trim());
    let canonical = ENHARMONICS
        .iter()
        .find(|(spelling, _)| *spelling == note)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(note.as_str());
    CHROMATIC
        .iter()
        .position(|&name| name == canonical)
        .map(|i| PitchClass(i as u8))
}

/// The accidental attached to a note letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    /// No accidental.
    Natural,
    /// Raised a semitone.
    Sharp,
    /// Lowered a semitone.
    Flat,
}

impl Accidental {
    /// The glyph for this accidental, if any.
    pub fn glyph(self) -> Option<char> {
        match self {
            Accidental::Natural => None,
            Accidental::Sharp => Some(SHARP),
            Accidental::Flat => Some(FLAT),
        }
    }
}

/// A letter A–G with at most one accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pub(crate) letter: char,
    pub(crate) accidental: Accidental,
}

impl NoteName {
    /// Construct a note name; `letter` must be an upper-case A–G.
    pub fn new(letter: char, accidental: Accidental) -> Result<Self> {
        if ('A'..='G').contains(&letter) {
            Ok(Self { letter, accidental })
        } else {
            Err(Error::InvalidNote(letter.to_string()))
        }
    }

    /// The note letter.
    pub fn letter(self) -> char {
        self.letter
    }

    /// The accidental.
    pub fn accidental(self) -> Accidental {
        self.accidental
    }

    /// Pitch class of this spelling.
    pub fn pitch_class(self) -> PitchClass {
        let base = match self.letter {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            _ => 11,
        };
        let offset = match self.accidental {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        };
        PitchClass(mod12(base + offset))
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter)?;
        if let Some(glyph) = self.accidental.glyph() {
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

impl Serialize for NoteName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for NoteName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize_accidentals(s.trim());
        let mut chars = normalized.chars();
        let letter = chars.next().ok_or_else(|| Error::InvalidNote(s.to_string()))?;
        let accidental = match chars.next() {
            None => Accidental::Natural,
            Some(SHARP) => Accidental::Sharp,
            Some(FLAT) => Accidental::Flat,
            Some(_) => return Err(Error::InvalidNote(s.to_string())),
        };
        if chars.next().is_some() {
            return Err(Error::InvalidNote(s.to_string()));
        }
        NoteName::new(letter, accidental).map_err(|_| Error::InvalidNote(s.to_string()))
    }
}

pub(crate) fn mod12(x: i32) -> u8 {
    x.rem_euclid(12) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn naturals_index_the_chromatic_table() {
        let expected = [("C", 0), ("D", 2), ("E", 4), ("F", 5), ("G", 7), ("A", 9), ("B", 11)];
        for (name, pc) in expected {
            assert_eq!(pitch_class_of(name), Some(PitchClass(pc)), "{name}");
        }
    }

    #[test]
    fn enharmonic_spellings_share_a_pitch_class() {
        assert_eq!(pitch_class_of("C♯"), pitch_class_of("D♭"));
        for (spelling, canonical) in ENHARMONICS {
            assert_eq!(
                pitch_class_of(spelling),
                pitch_class_of(canonical),
                "{spelling} vs {canonical}"
            );
            assert!(pitch_class_of(spelling).is_some(), "{spelling}");
        }
    }

    #[test]
    fn ascii_and_full_width_accidentals_resolve() {
        assert_eq!(pitch_class_of("F#"), Some(PitchClass(6)));
        assert_eq!(pitch_class_of("Bb"), Some(PitchClass(10)));
        assert_eq!(pitch_class_of("G＃"), Some(PitchClass(8)));
        assert_eq!(pitch_class_of("Eｂ"), Some(PitchClass(3)));
    }

    #[test]
    fn edge_spellings_wrap_around_the_octave() {
        assert_eq!(pitch_class_of("B♯"), Some(PitchClass(0)));
        assert_eq!(pitch_class_of("C♭"), Some(PitchClass(11)));
        assert_eq!(pitch_class_of("F♭"), Some(PitchClass(4)));
        assert_eq!(pitch_class_of("E♯"), Some(PitchClass(5)));
    }

    #[test]
    fn unrecognized_spellings_are_not_found() {
        for bad in ["", "H", "c", "C##", "C♯♯", "Cm", "X♭", "♯"] {
            assert_eq!(pitch_class_of(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn normalization_rewrites_every_accidental_form() {
        assert_eq!(normalize_accidentals("C# Db F＃ Gｂ A♯ B♭"), "C♯ D♭ F♯ G♭ A♯ B♭");
        assert_eq!(normalize_accidentals("Cm7b5"), "Cm7♭5");
    }

    #[test]
    fn note_name_parses_and_displays_with_glyphs() {
        let n: NoteName = "F#".parse().expect("F#");
        assert_eq!(n.to_string(), "F♯");
        assert_eq!(n.pitch_class(), PitchClass(6));
        assert_eq!(n.letter(), 'F');
        assert_eq!(n.accidental(), Accidental::Sharp);
        assert!("Fx".parse::<NoteName>().is_err());
        assert!("F#m".parse::<NoteName>().is_err());
        assert!("".parse::<NoteName>().is_err());
    }

    #[test]
    fn note_name_pitch_class_agrees_with_the_tables() {
        for letter in ['C', 'D', 'E', 'F', 'G', 'A', 'B'] {
            for accidental in [Accidental::Natural, Accidental::Sharp, Accidental::Flat] {
                let note = NoteName::new(letter, accidental).expect("valid letter");
                assert_eq!(Some(note.pitch_class()), pitch_class_of(&note.to_string()), "{note}");
            }
        }
        assert!(NoteName::new('H', Accidental::Natural).is_err());
    }

    #[test]
    fn parse_reports_unknown_spellings() {
        assert_eq!(PitchClass::parse("Db").expect("Db"), PitchClass(1));
        assert!(matches!(PitchClass::parse("H#"), Err(Error::InvalidNote(_))));
    }

    #[test]
    fn interval_is_never_negative() {
        let c = PitchClass(0);
        let b = PitchClass(11);
        assert_eq!(c.interval_from(b), PitchClass(1));
        assert_eq!(b.interval_from(c), PitchClass(11));
        assert_eq!(mod12(-13), 11);
    }
}
