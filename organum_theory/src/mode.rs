// Modal finals of the chant repertoire.
//
// Medieval theory groups chants into four maneriae by their final note: D
// (Protus), E (Deuterus), F (Tritus), G (Tetrardus). The final is a property
// of the chant, chosen by the caller independently of the organum style, and
// the cadence rule requires the generated voice to land on it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pitch::{Pitch, Step};

/// The four modal finals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeFinal {
    D,
    E,
    F,
    G,
}

impl ModeFinal {
    pub const ALL: [ModeFinal; 4] = [ModeFinal::D, ModeFinal::E, ModeFinal::F, ModeFinal::G];

    /// The letter step a cadence must land on.
    pub fn step(self) -> Step {
        match self {
            ModeFinal::D => Step::D,
            ModeFinal::E => Step::E,
            ModeFinal::F => Step::F,
            ModeFinal::G => Step::G,
        }
    }

    /// The maneria name of the mode pair on this final.
    pub fn name(self) -> &'static str {
        match self {
            ModeFinal::D => "Protus",
            ModeFinal::E => "Deuterus",
            ModeFinal::F => "Tritus",
            ModeFinal::G => "Tetrardus",
        }
    }

    /// True when the pitch's letter step matches this final, any octave, any
    /// alteration.
    pub fn matches(self, pitch: Pitch) -> bool {
        pitch.step == self.step()
    }

    /// Parse a final from its letter. Only D, E, F, and G are finals; other
    /// letters return None.
    pub fn parse(text: &str) -> Option<ModeFinal> {
        match text {
            "D" | "d" => Some(ModeFinal::D),
            "E" | "e" => Some(ModeFinal::E),
            "F" | "f" => Some(ModeFinal::F),
            "G" | "g" => Some(ModeFinal::G),
            _ => None,
        }
    }

    /// The final for a given step, when that step is a valid final.
    pub fn from_step(step: Step) -> Option<ModeFinal> {
        match step {
            Step::D => Some(ModeFinal::D),
            Step::E => Some(ModeFinal::E),
            Step::F => Some(ModeFinal::F),
            Step::G => Some(ModeFinal::G),
            _ => None,
        }
    }
}

impl fmt::Display for ModeFinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.step().letter())
    }
}
