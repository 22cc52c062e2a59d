// Spelled pitch representation.
//
// A pitch is a letter step, an octave, and a chromatic alteration (sharp,
// natural, or flat). Spelling is structural: C#4 and Db4 sound the same
// MIDI note but are distinct values, and notation/export consumers key off
// step, alter, and octave individually, so nothing here ever collapses
// enharmonics.
//
// The textual format is Step[#|b]Octave ("C4", "F#3", "Bb2"), shared with
// the engine CLI and with external collaborators as the interchange format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The seven letter steps of the staff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Step {
    /// All steps in staff order, indexable by `letter_index`.
    pub const ALL: [Step; 7] = [
        Step::C,
        Step::D,
        Step::E,
        Step::F,
        Step::G,
        Step::A,
        Step::B,
    ];

    /// Position of the letter in the staff cycle starting at C (C=0 .. B=6).
    pub fn letter_index(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 1,
            Step::E => 2,
            Step::F => 3,
            Step::G => 4,
            Step::A => 5,
            Step::B => 6,
        }
    }

    /// Semitones of the natural letter above C (C=0, D=2, E=4, F=5, G=7,
    /// A=9, B=11).
    pub fn semitone_offset(self) -> i32 {
        match self {
            Step::C => 0,
            Step::D => 2,
            Step::E => 4,
            Step::F => 5,
            Step::G => 7,
            Step::A => 9,
            Step::B => 11,
        }
    }

    /// Parse an uppercase letter. Lowercase is rejected, matching the strict
    /// interchange format.
    pub fn from_letter(c: char) -> Option<Step> {
        match c {
            'C' => Some(Step::C),
            'D' => Some(Step::D),
            'E' => Some(Step::E),
            'F' => Some(Step::F),
            'G' => Some(Step::G),
            'A' => Some(Step::A),
            'B' => Some(Step::B),
            _ => None,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Step::C => 'C',
            Step::D => 'D',
            Step::E => 'E',
            Step::F => 'F',
            Step::G => 'G',
            Step::A => 'A',
            Step::B => 'B',
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A spelled pitch in scientific pitch notation (C4 = middle C = MIDI 60).
///
/// Immutable value type with structural equality: two pitches are equal only
/// if step, octave, and alter all match. Hashable so searches can memoize on
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pitch {
    pub step: Step,
    pub octave: i32,
    /// -1 flat, 0 natural, +1 sharp. Parsing and candidate enumeration only
    /// ever produce these three values.
    pub alter: i8,
}

impl Pitch {
    pub const fn new(step: Step, octave: i32, alter: i8) -> Pitch {
        Pitch {
            step,
            octave,
            alter,
        }
    }

    pub const fn natural(step: Step, octave: i32) -> Pitch {
        Pitch::new(step, octave, 0)
    }

    /// MIDI note number: (octave+1)*12 + letter offset + alter.
    /// C4 = 60, A4 = 69. Negative octaves map below MIDI 0 without wrapping.
    pub fn midi(&self) -> i32 {
        (self.octave + 1) * 12 + self.step.semitone_offset() + i32::from(self.alter)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let accidental = match self.alter {
            1 => "#",
            -1 => "b",
            _ => "",
        };
        write!(f, "{}{}{}", self.step, accidental, self.octave)
    }
}

/// Error for a string that does not match `Step[#|b]Octave`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pitch format: {text:?} (expected e.g. \"C4\", \"F#3\", \"Bb2\")")]
pub struct ParsePitchError {
    text: String,
}

/// Octave ceiling for the textual format. G9 is MIDI 127, the top of the
/// MIDI range, and an unbounded octave would overflow `midi()`.
const MAX_PARSE_OCTAVE: i32 = 9;

impl FromStr for Pitch {
    type Err = ParsePitchError;

    /// Strict full-match parse: one uppercase letter, an optional `#` or `b`,
    /// then the octave, 0 through 9. No sign, no whitespace.
    fn from_str(s: &str) -> Result<Pitch, ParsePitchError> {
        let fail = || ParsePitchError {
            text: s.to_string(),
        };

        let mut chars = s.chars();
        let step = chars
            .next()
            .and_then(Step::from_letter)
            .ok_or_else(fail)?;
        let rest = chars.as_str();

        let (alter, digits) = match rest.bytes().next() {
            Some(b'#') => (1, &rest[1..]),
            Some(b'b') => (-1, &rest[1..]),
            _ => (0, rest),
        };

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(fail());
        }
        let octave = digits.parse::<i32>().map_err(|_| fail())?;
        if octave > MAX_PARSE_OCTAVE {
            return Err(fail());
        }

        Ok(Pitch {
            step,
            octave,
            alter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(text: &str) -> Pitch {
        text.parse().unwrap()
    }

    #[test]
    fn test_parse_naturals() {
        assert_eq!(p("C4"), Pitch::natural(Step::C, 4));
        assert_eq!(p("G2"), Pitch::natural(Step::G, 2));
        assert_eq!(p("B0"), Pitch::natural(Step::B, 0));
        assert_eq!(p("G9"), Pitch::natural(Step::G, 9));
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!(p("F#3"), Pitch::new(Step::F, 3, 1));
        assert_eq!(p("Bb3"), Pitch::new(Step::B, 3, -1));
        assert_eq!(p("C#4"), Pitch::new(Step::C, 4, 1));
        assert_eq!(p("Eb5"), Pitch::new(Step::E, 5, -1));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "", "C", "C#", "Cb", "H4", "c4", "C##4", "C#b4", "C4x", " C4", "C 4", "C-1", "4C",
            "Cx4",
        ] {
            assert!(
                bad.parse::<Pitch>().is_err(),
                "{bad:?} should fail to parse"
            );
        }
    }

    #[test]
    fn test_parse_bounds_the_octave() {
        // The top of the MIDI range still parses.
        assert_eq!(p("G9").midi(), 127);
        // Anything above octave 9 is rejected before midi() can overflow.
        for out_of_range in ["C10", "A473", "C178956970", "C99999999999999999999"] {
            assert!(
                out_of_range.parse::<Pitch>().is_err(),
                "{out_of_range:?} should be out of range"
            );
        }
    }

    #[test]
    fn test_midi_reference_points() {
        assert_eq!(p("C4").midi(), 60);
        assert_eq!(p("A4").midi(), 69);
        assert_eq!(p("B3").midi(), 59);
        assert_eq!(p("C#4").midi(), 61);
        assert_eq!(p("Bb3").midi(), 58);
        assert_eq!(p("C0").midi(), 12);
        // Below the textual range but still well-defined.
        assert_eq!(Pitch::natural(Step::C, -1).midi(), 0);
        assert_eq!(Pitch::new(Step::C, -1, -1).midi(), -1);
    }

    #[test]
    fn test_enharmonics_are_distinct() {
        let c_sharp = p("C#4");
        let d_flat = p("Db4");
        assert_eq!(c_sharp.midi(), d_flat.midi());
        assert_ne!(c_sharp, d_flat);
    }

    #[test]
    fn test_display_parse_roundtrip() {
        for step in Step::ALL {
            for octave in 0..=8 {
                for alter in [-1i8, 0, 1] {
                    let pitch = Pitch::new(step, octave, alter);
                    let text = pitch.to_string();
                    assert_eq!(
                        text.parse::<Pitch>().unwrap(),
                        pitch,
                        "roundtrip failed for {text}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_parse_error_names_offender() {
        let err = "Q7".parse::<Pitch>().unwrap_err();
        assert!(err.to_string().contains("Q7"));
    }

    #[test]
    fn test_serde_roundtrip() {
        let pitch = p("Bb3");
        let json = serde_json::to_string(&pitch).unwrap();
        let back: Pitch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pitch);
    }
}
