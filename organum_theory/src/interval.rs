// Interval measurement between spelled pitches.
//
// Two distances coexist: the generic size counts staff letters (C4 to E4 is
// a third whatever the accidentals say), while semitones count the sounding
// distance. Quality reconciles the two through a fixed lookup table.
// Combinations outside the table (an augmented second, a diminished octave)
// come back as Unknown; callers treat Unknown as not consonant and not a
// tritone, never as an error.
//
// Consumed by the engine's constraint pipeline, scorer, and analysis.

use serde::{Deserialize, Serialize};

use crate::pitch::Pitch;

/// Interval quality from the lookup table, or Unknown when the spelling and
/// the semitone count do not name a standard interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    Perfect,
    Major,
    Minor,
    Augmented,
    Diminished,
    Unknown,
}

/// Consonance classes of two-voice medieval writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Consonance {
    /// Unison, fourth, fifth, and octave at perfect quality.
    Perfect,
    /// Major and minor thirds and sixths.
    Imperfect,
    /// Everything else, including every augmented or diminished interval.
    Dissonant,
}

/// A measured interval between an ordered pair of pitches.
///
/// Sizes and semitones are absolute distances; only `direction` remembers
/// the order of the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    /// Staff-letter distance plus one, octaves included: a unison is 1, an
    /// octave 8, a twelfth 12. Always >= 1.
    pub generic_size: i32,
    /// Generic size folded into one octave, 1..=7. An octave folds to 1.
    pub simple_size: i32,
    /// Absolute sounding distance in semitones.
    pub semitones: i32,
    pub quality: Quality,
    /// +1 if `b` is at or above `a`, -1 if below.
    pub direction: i8,
}

impl Interval {
    /// Measure the interval from `a` to `b`.
    pub fn between(a: Pitch, b: Pitch) -> Interval {
        let staff_span =
            (b.step.letter_index() - a.step.letter_index()) + 7 * (b.octave - a.octave);
        let generic_size = staff_span.abs() + 1;
        let simple_size = (generic_size - 1) % 7 + 1;

        let midi_delta = b.midi() - a.midi();
        let semitones = midi_delta.abs();

        Interval {
            generic_size,
            simple_size,
            semitones,
            quality: quality_of(simple_size, semitones % 12),
            direction: if midi_delta < 0 { -1 } else { 1 },
        }
    }

    /// The forbidden tritone in either spelling: augmented fourth or
    /// diminished fifth.
    pub fn is_tritone(&self) -> bool {
        (self.simple_size == 4 && self.quality == Quality::Augmented)
            || (self.simple_size == 5 && self.quality == Quality::Diminished)
    }

    /// Medieval consonance class. Augmented, diminished, and Unknown
    /// qualities are all dissonant regardless of size. Octaves and larger
    /// compounds classify by their folded simple size, so a perfect octave
    /// lands on the unison arm.
    pub fn consonance(&self) -> Consonance {
        match (self.simple_size, self.quality) {
            (1 | 4 | 5, Quality::Perfect) => Consonance::Perfect,
            (3 | 6, Quality::Major | Quality::Minor) => Consonance::Imperfect,
            _ => Consonance::Dissonant,
        }
    }
}

/// Quality table keyed by (simple size, semitones mod 12).
fn quality_of(simple_size: i32, class_semitones: i32) -> Quality {
    match (simple_size, class_semitones) {
        (1, 0) => Quality::Perfect,
        (2, 1) => Quality::Minor,
        (2, 2) => Quality::Major,
        (3, 3) => Quality::Minor,
        (3, 4) => Quality::Major,
        (4, 5) => Quality::Perfect,
        (4, 6) => Quality::Augmented,
        (5, 7) => Quality::Perfect,
        (5, 6) => Quality::Diminished,
        (6, 8) => Quality::Minor,
        (6, 9) => Quality::Major,
        (7, 10) => Quality::Minor,
        (7, 11) => Quality::Major,
        _ => Quality::Unknown,
    }
}
