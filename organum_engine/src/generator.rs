// Backtracking search for a complete organal voice.
//
// Depth-first and heuristic-first: at each chant position the generator
// enumerates a bounded window of candidate pitches, filters them through
// rules.rs, orders the survivors by scoring.rs cost, and recurses into the
// cheapest first. A dead end pops the partial voice back one note and tries
// the next candidate; exhausting the first position means no counterpoint
// exists within the window. The search prefers locally cheaper steps but
// does not promise a globally cheapest line.
//
// Two guards bound the work. Whether a position can be completed depends
// only on the previous organal note, so known-dead (index, previous-note)
// states are memoized and never re-explored. On top of that, a step budget
// converts pathological searches into a reported error instead of unbounded
// computation.

use std::collections::HashSet;

use organum_theory::{ModeFinal, Pitch, Step};

use crate::rules::{self, StepContext};
use crate::scoring;
use crate::style::{Style, StyleConfig};

/// Candidate window below the chant note, in semitones.
pub const DEFAULT_WINDOW_BELOW: i32 = 14;
/// Candidate window above the chant note, in semitones.
pub const DEFAULT_WINDOW_ABOVE: i32 = 7;
/// Default cap on candidate explorations per generation call.
pub const DEFAULT_MAX_STEPS: usize = 100_000;

/// Canonical spelling for each pitch class in the candidate window: white
/// keys, B♭ and E♭ as the only flats, sharps elsewhere. The scorer charges
/// every accidental except the soft B♭, so the off-key spellings stay rare
/// in practice.
const PITCH_CLASS_SPELLINGS: [(Step, i8); 12] = [
    (Step::C, 0),
    (Step::C, 1),
    (Step::D, 0),
    (Step::E, -1),
    (Step::E, 0),
    (Step::F, 0),
    (Step::F, 1),
    (Step::G, 0),
    (Step::G, 1),
    (Step::A, 0),
    (Step::B, -1),
    (Step::B, 0),
];

/// Spell a MIDI number with the fixed candidate table. Total for any value,
/// negative MIDI included.
fn spell_midi(midi: i32) -> Pitch {
    let (step, alter) = PITCH_CLASS_SPELLINGS[midi.rem_euclid(12) as usize];
    Pitch::new(step, midi.div_euclid(12) - 1, alter)
}

/// Search parameters. The asymmetric window is a historical default, not a
/// derived rule; treat it as tunable.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Semitones below the chant note to enumerate.
    pub window_below: i32,
    /// Semitones above the chant note to enumerate.
    pub window_above: i32,
    /// Cap on candidate explorations before the search gives up.
    pub max_steps: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            window_below: DEFAULT_WINDOW_BELOW,
            window_above: DEFAULT_WINDOW_ABOVE,
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// A finished generation: the organal voice plus search statistics.
#[derive(Debug, Clone)]
pub struct Generation {
    /// One organal pitch per chant note.
    pub organum: Vec<Pitch>,
    /// Candidate explorations spent.
    pub steps: usize,
    /// Dead ends popped during the search.
    pub backtracks: usize,
}

/// Why generation failed. Both variants are ordinary return values; the
/// search never panics and never returns a partial voice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// No full-length legal voice exists within the candidate window.
    #[error("No valid counterpoint could be generated.")]
    NoSolution,
    /// The step budget ran out before the search concluded either way.
    #[error("generation gave up after {budget} candidate explorations")]
    BudgetExhausted { budget: usize },
}

/// Generate an organal voice against `chant` with default search settings.
///
/// The chant is read-only; on success the returned voice has exactly one
/// pitch per chant note. An empty chant succeeds with an empty voice.
pub fn generate(
    chant: &[Pitch],
    style: Style,
    mode_final: ModeFinal,
) -> Result<Vec<Pitch>, GenerateError> {
    generate_with(chant, style, mode_final, &SearchConfig::default()).map(|g| g.organum)
}

/// Generate with explicit search settings, reporting statistics.
pub fn generate_with(
    chant: &[Pitch],
    style: Style,
    mode_final: ModeFinal,
    config: &SearchConfig,
) -> Result<Generation, GenerateError> {
    let mut search = Search {
        chant,
        style_config: style.config(),
        mode_final,
        config,
        organum: Vec::with_capacity(chant.len()),
        dead: HashSet::new(),
        steps: 0,
        backtracks: 0,
    };

    if search.solve(0)? {
        Ok(Generation {
            organum: search.organum,
            steps: search.steps,
            backtracks: search.backtracks,
        })
    } else {
        Err(GenerateError::NoSolution)
    }
}

struct Search<'a> {
    chant: &'a [Pitch],
    style_config: &'static StyleConfig,
    mode_final: ModeFinal,
    config: &'a SearchConfig,
    /// The growing partial voice. Pushed on descent, popped on backtrack.
    organum: Vec<Pitch>,
    /// (index, previous organal note) states known to admit no completion.
    dead: HashSet<(usize, Option<Pitch>)>,
    steps: usize,
    backtracks: usize,
}

impl Search<'_> {
    /// Extend the partial voice from `index`. Ok(true) when a full voice is
    /// built, Ok(false) on a dead end; Err only when the budget runs out.
    fn solve(&mut self, index: usize) -> Result<bool, GenerateError> {
        if index >= self.chant.len() {
            return Ok(true);
        }

        let prev_organum = self.organum.last().copied();
        let state = (index, prev_organum);
        if self.dead.contains(&state) {
            return Ok(false);
        }

        let chant_note = self.chant[index];
        let ctx = StepContext {
            chant: chant_note,
            prev_organum,
            prev_chant: index.checked_sub(1).map(|i| self.chant[i]),
            index,
            total_len: self.chant.len(),
        };

        let base_midi = chant_note.midi();
        let mut moves: Vec<(f64, Pitch)> = Vec::new();
        for offset in -self.config.window_below..=self.config.window_above {
            let candidate = spell_midi(base_midi + offset);
            if rules::check_step(&ctx, candidate, self.style_config, self.mode_final).is_ok() {
                moves.push((scoring::score_step(&ctx, candidate, self.style_config), candidate));
            }
        }

        // Stable ascending sort: equal costs keep enumeration order, which
        // keeps the whole search deterministic.
        moves.sort_by(|a, b| a.0.total_cmp(&b.0));

        for (_, candidate) in moves {
            self.steps += 1;
            if self.steps > self.config.max_steps {
                return Err(GenerateError::BudgetExhausted {
                    budget: self.config.max_steps,
                });
            }

            self.organum.push(candidate);
            if self.solve(index + 1)? {
                return Ok(true);
            }
            self.organum.pop();
            self.backtracks += 1;
        }

        self.dead.insert(state);
        Ok(false)
    }
}
