// Heuristic cost of a candidate organal note.
//
// The hard rules in rules.rs decide what is possible; this module decides
// what is preferred among the survivors. The cost is an additive sum of
// style-weighted terms (motion class, register, accidentals, opening) with
// lower totals preferred and negative terms acting as rewards. There are no
// bounds: a style that rewards contrary motion can push a candidate's total
// below zero.
//
// `score_step` is a pure function of its inputs. The generator relies on
// that for deterministic candidate ordering.

use organum_theory::{Dyad, Interval, Motion, Pitch, Quality, Step};

use crate::rules::StepContext;
use crate::style::StyleConfig;

/// Surcharge for the soft B♭, the one accidental the era routinely accepts.
/// Every other accidental pays the style's full semitone-vice weight.
pub const SOFT_B_COST: f64 = 5.0;

/// Reward for opening the line on a perfect consonance.
pub const OPENING_PERFECT_REWARD: f64 = 10.0;

/// Cost of placing `candidate` against the context's chant note under the
/// given style. Lower is better.
pub fn score_step(ctx: &StepContext, candidate: Pitch, config: &StyleConfig) -> f64 {
    let weights = &config.weights;
    let mut cost = 0.0;

    // ── Motion ──
    if let (Some(prev_organum), Some(prev_chant)) = (ctx.prev_organum, ctx.prev_chant) {
        let prev_dyad = Dyad::new(prev_chant, prev_organum);
        let curr_dyad = Dyad::new(ctx.chant, candidate);

        match Motion::classify(prev_dyad, curr_dyad) {
            Motion::Contrary => cost += weights.contrary,
            Motion::Parallel => {
                cost += weights.parallel;

                // Chained parallel perfect fourths or fifths pick up an
                // extra charge on top of the plain parallel cost.
                let prev_size = prev_dyad.interval().simple_size;
                let curr_size = curr_dyad.interval().simple_size;
                if prev_size == curr_size && (prev_size == 4 || prev_size == 5) {
                    cost += weights.parallel_perfect_chain;
                }
            }
            Motion::Static | Motion::Oblique | Motion::Similar => {}
        }
    }

    // ── Register ──
    if candidate.midi() > ctx.chant.midi() {
        cost += weights.crossing;
    }

    // ── Accidentals ──
    if candidate.alter != 0 {
        if candidate.step == Step::B && candidate.alter == -1 {
            cost += SOFT_B_COST;
        } else {
            cost += weights.semitone_vice;
        }
    }

    // ── Opening ──
    if ctx.prev_organum.is_none() {
        let vertical = Interval::between(candidate, ctx.chant);
        if vertical.quality == Quality::Perfect {
            cost -= OPENING_PERFECT_REWARD;
        }
    }

    cost
}
