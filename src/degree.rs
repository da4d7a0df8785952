//! Chromatic Roman-numeral degrees.
//!
//! The numeral names the semitone distance from the tonic, not a diatonic scale degree:
//! one table serves every chord root (borrowed and altered roots included) and it does not
//! change between major and minor keys.

use crate::pitch::{pitch_class_of, PitchClass};

/// Rendered when either the chord note or the tonic cannot be resolved.
pub const UNKNOWN_DEGREE: &str = "?";

/// Numeral per interval above the tonic, in semitones.
const CHROMATIC_DEGREES: [&str; 12] = [
    "I", "♭II", "II", "♭III", "III", "IV", "♯IV", "V", "♭VI", "VI", "♭VII", "VII",
];

/// Upward interval from `tonic` to `note`, in `0..12`.
pub fn interval_between(tonic: PitchClass, note: PitchClass) -> PitchClass {
    note.interval_from(tonic)
}

/// The numeral for an interval above the tonic.
pub fn numeral_for_interval(interval: PitchClass) -> &'static str {
    CHROMATIC_DEGREES
        .get(interval.0 as usize)
        .copied()
        .unwrap_or(UNKNOWN_DEGREE)
}

/// Render `note` as a Roman numeral relative to `tonic`.
///
/// Returns [`UNKNOWN_DEGREE`] when either spelling does not resolve to a pitch class.
pub fn degree_of(note: &str, tonic: &str) -> &'static str {
    match (pitch_class_of(note), pitch_class_of(tonic)) {
        (Some(note), Some(tonic)) => numeral_for_interval(interval_between(tonic, note)),
        _ => UNKNOWN_DEGREE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARP_NAMES: [&str; 12] = [
        "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
    ];

    #[test]
    fn tonic_is_always_one() {
        for tonic in SHARP_NAMES.iter().chain(["Db", "Gb", "Cb", "E#", "B#"].iter()) {
            assert_eq!(degree_of(tonic, tonic), "I", "{tonic}");
        }
    }

    #[test]
    fn degrees_in_c_follow_the_chromatic_table() {
        let got: Vec<&str> = SHARP_NAMES.iter().map(|n| degree_of(n, "C")).collect();
        assert_eq!(got, CHROMATIC_DEGREES.to_vec());
    }

    #[test]
    fn degree_depends_only_on_the_interval() {
        for p in 0..12usize {
            for t in 0..12usize {
                let expected = CHROMATIC_DEGREES[(p + 12 - t) % 12];
                assert_eq!(degree_of(SHARP_NAMES[p], SHARP_NAMES[t]), expected, "{p} over {t}");
            }
        }
    }

    #[test]
    fn enharmonic_tonics_agree() {
        assert_eq!(degree_of("A", "Db"), degree_of("A", "C#"));
        assert_eq!(degree_of("E", "Gb"), "♭VII");
        assert_eq!(degree_of("B", "C"), "VII");
    }

    #[test]
    fn unresolvable_notes_render_unknown() {
        assert_eq!(degree_of("H", "C"), UNKNOWN_DEGREE);
        assert_eq!(degree_of("C", "Cx"), UNKNOWN_DEGREE);
    }
}
