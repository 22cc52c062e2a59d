// Relative motion between two voices.
//
// Motion is classified over two successive vertical dyads. The classes are
// the ones the treatises argue about: parallel motion keeps the same generic
// interval (fifths chained to fifths, thirds to thirds), similar motion moves
// the same direction into a different interval, contrary motion moves the
// voices apart or together, oblique holds one voice while the other moves.
//
// The classification drives both the style scorer (parallel/contrary costs)
// and the analysis table.

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::pitch::Pitch;

/// A simultaneous chant/organum pitch pair at one time index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dyad {
    pub cantus: Pitch,
    pub organum: Pitch,
}

impl Dyad {
    pub const fn new(cantus: Pitch, organum: Pitch) -> Dyad {
        Dyad { cantus, organum }
    }

    /// Vertical interval of the pair, measured cantus to organum.
    pub fn interval(&self) -> Interval {
        Interval::between(self.cantus, self.organum)
    }
}

/// Relative motion between two successive dyads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Neither voice moves.
    Static,
    /// Exactly one voice moves.
    Oblique,
    /// The voices move in opposite directions.
    Contrary,
    /// Same direction, same generic interval.
    Parallel,
    /// Same direction, different interval.
    Similar,
}

impl Motion {
    /// Classify the motion from `prev` to `curr`.
    pub fn classify(prev: Dyad, curr: Dyad) -> Motion {
        let cantus_delta = curr.cantus.midi() - prev.cantus.midi();
        let organum_delta = curr.organum.midi() - prev.organum.midi();

        if cantus_delta == 0 && organum_delta == 0 {
            return Motion::Static;
        }
        if cantus_delta == 0 || organum_delta == 0 {
            return Motion::Oblique;
        }

        let same_direction = (cantus_delta > 0) == (organum_delta > 0);
        if !same_direction {
            return Motion::Contrary;
        }

        // Parallel keeps the full generic size constant, compounds included:
        // a tenth moving to a third is similar, not parallel.
        if prev.interval().generic_size == curr.interval().generic_size {
            Motion::Parallel
        } else {
            Motion::Similar
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Motion::Static => "Static",
            Motion::Oblique => "Oblique",
            Motion::Contrary => "Contrary",
            Motion::Parallel => "Parallel",
            Motion::Similar => "Similar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dyad(cantus: &str, organum: &str) -> Dyad {
        Dyad::new(cantus.parse().unwrap(), organum.parse().unwrap())
    }

    #[test]
    fn test_static_motion() {
        let d = dyad("C4", "G3");
        assert_eq!(Motion::classify(d, d), Motion::Static);
    }

    #[test]
    fn test_oblique_motion() {
        // Chant moves, organum holds.
        assert_eq!(
            Motion::classify(dyad("C4", "C4"), dyad("D4", "C4")),
            Motion::Oblique
        );
        // Organum moves, chant holds.
        assert_eq!(
            Motion::classify(dyad("C4", "C4"), dyad("C4", "A3")),
            Motion::Oblique
        );
    }

    #[test]
    fn test_contrary_motion() {
        assert_eq!(
            Motion::classify(dyad("C4", "C4"), dyad("D4", "B3")),
            Motion::Contrary
        );
    }

    #[test]
    fn test_parallel_fifths() {
        assert_eq!(
            Motion::classify(dyad("C4", "G3"), dyad("D4", "A3")),
            Motion::Parallel
        );
    }

    #[test]
    fn test_parallel_requires_equal_generic_size() {
        // Both voices ascend, fifth narrows to a third: similar.
        assert_eq!(
            Motion::classify(dyad("C4", "F3"), dyad("D4", "B3")),
            Motion::Similar
        );
    }

    #[test]
    fn test_compound_sizes_compare_in_full() {
        // Tenths chained to tenths are parallel even though both fold to
        // thirds.
        assert_eq!(
            Motion::classify(dyad("E5", "C4"), dyad("F5", "D4")),
            Motion::Parallel
        );
        // A tenth widening to an eleventh is similar.
        assert_eq!(
            Motion::classify(dyad("E5", "C4"), dyad("G5", "D4")),
            Motion::Similar
        );
    }

    #[test]
    fn test_one_voice_moving_is_never_static() {
        let motion = Motion::classify(dyad("C4", "G3"), dyad("C4", "E3"));
        assert_ne!(motion, Motion::Static);
        assert_eq!(motion, Motion::Oblique);
    }
}
