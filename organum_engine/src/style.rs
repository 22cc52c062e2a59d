// Style regimes of organum writing.
//
// Three treatises, three rule sets, spanning two centuries of practice:
// Musica enchiriadis (c.900) wants strict parallel motion at the perfect
// consonances with the organal voice kept below the chant; Guido's
// Micrologus (c.1025) admits thirds and the occasional crossing on the way
// to the occursus; Ad organum faciendum (c.1100) embraces contrary motion
// and sixths. Each regime is pure data here (the vertical sizes it accepts,
// its crossing policy, and the heuristic weights), consumed by rules.rs and
// scoring.rs.

use serde::{Deserialize, Serialize};

/// The three style regimes, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Style {
    /// Musica enchiriadis, c.900.
    Enchiriadis,
    /// Guido of Arezzo's Micrologus, c.1025.
    Micrologus,
    /// Ad organum faciendum, c.1100.
    AdOrganumFaciendum,
}

impl Style {
    pub const ALL: [Style; 3] = [
        Style::Enchiriadis,
        Style::Micrologus,
        Style::AdOrganumFaciendum,
    ];

    /// Stable identifier slug, used in logs and by external tooling.
    pub fn id(self) -> &'static str {
        match self {
            Style::Enchiriadis => "musica_enchiriadis",
            Style::Micrologus => "micrologus",
            Style::AdOrganumFaciendum => "ad_organum_faciendum",
        }
    }

    /// Human-facing name with the treatise's approximate date.
    pub fn display_name(self) -> &'static str {
        match self {
            Style::Enchiriadis => "Musica enchiriadis (c.900)",
            Style::Micrologus => "Micrologus (c.1025)",
            Style::AdOrganumFaciendum => "Ad organum faciendum (c.1100)",
        }
    }

    /// Parse a user-facing style name. Accepts the slug, the bare treatise
    /// name, and hyphenated spellings, case-insensitively.
    pub fn parse(text: &str) -> Option<Style> {
        match text.to_ascii_lowercase().as_str() {
            "enchiriadis" | "musica_enchiriadis" | "musica-enchiriadis" => {
                Some(Style::Enchiriadis)
            }
            "micrologus" => Some(Style::Micrologus),
            "ad_organum" | "ad-organum" | "ad_organum_faciendum" | "ad-organum-faciendum" => {
                Some(Style::AdOrganumFaciendum)
            }
            _ => None,
        }
    }

    /// The immutable configuration record for this style.
    pub fn config(self) -> &'static StyleConfig {
        match self {
            Style::Enchiriadis => &ENCHIRIADIS,
            Style::Micrologus => &MICROLOGUS,
            Style::AdOrganumFaciendum => &AD_ORGANUM_FACIENDUM,
        }
    }
}

/// Heuristic weights for one style. Each weight is added to a candidate's
/// cost when its condition holds; lower totals win, and negative weights act
/// as rewards.
#[derive(Debug, Clone, Copy)]
pub struct Weights {
    /// Cost of parallel motion into this step.
    pub parallel: f64,
    /// Cost of contrary motion (negative to reward it).
    pub contrary: f64,
    /// Cost of sounding above the chant.
    pub crossing: f64,
    /// Cost of any accidental other than the soft B♭.
    pub semitone_vice: f64,
    /// Extra cost of continuing a chain of parallel perfect fourths or
    /// fifths.
    pub parallel_perfect_chain: f64,
}

/// One style's full rule-and-preference configuration. Three static
/// instances exist, one per [`Style`]; they are passed by reference into the
/// constraint pipeline and the scorer and never mutated.
#[derive(Debug, Clone, Copy)]
pub struct StyleConfig {
    pub style: Style,
    /// Vertical simple sizes the style accepts. Listed as the treatises give
    /// them, octave included, though a measured octave folds to simple
    /// size 1.
    pub allowed_vertical_sizes: &'static [i32],
    /// Whether the organal voice may sound above the chant.
    pub allow_voice_crossing: bool,
    pub weights: Weights,
}

impl StyleConfig {
    pub fn allows_vertical(&self, simple_size: i32) -> bool {
        self.allowed_vertical_sizes.contains(&simple_size)
    }
}

static ENCHIRIADIS: StyleConfig = StyleConfig {
    style: Style::Enchiriadis,
    allowed_vertical_sizes: &[1, 4, 5, 8],
    allow_voice_crossing: false,
    weights: Weights {
        parallel: 0.0,               // parallel motion is the style
        contrary: 10.0,              // tolerated at phrase boundaries only
        crossing: 100.0,             // organum stays below the chant
        semitone_vice: 0.0,          // indifferent to accidentals
        parallel_perfect_chain: 0.0, // chains are the idiom, no penalty
    },
};

static MICROLOGUS: StyleConfig = StyleConfig {
    style: Style::Micrologus,
    allowed_vertical_sizes: &[1, 4, 5, 8, 3],
    allow_voice_crossing: true,
    weights: Weights {
        parallel: 5.0,
        contrary: 0.0,                // Guido likes contrary approach
        crossing: 20.0,               // sparingly, near the occursus
        semitone_vice: 50.0,          // Guido's "vice" semitones
        parallel_perfect_chain: 10.0, // discourage long chains
    },
};

static AD_ORGANUM_FACIENDUM: StyleConfig = StyleConfig {
    style: Style::AdOrganumFaciendum,
    allowed_vertical_sizes: &[1, 4, 5, 8, 3, 6],
    allow_voice_crossing: true,
    weights: Weights {
        parallel: 10.0,
        contrary: -5.0, // actively rewarded
        crossing: 5.0,
        semitone_vice: 10.0,
        parallel_perfect_chain: 20.0, // fifth chains now old-fashioned
    },
};
