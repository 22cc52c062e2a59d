// Organum Engine
//
// A note-against-note counterpoint generator for the earliest written
// polyphony. Given a chant melody, a historical style, and a mode final,
// the engine adds a second voice (the vox organalis) below or around the
// chant by depth-first search: hard treatise rules prune the candidates and
// style-weighted costs order the survivors, with backtracking to recover
// from dead ends. Three styles span two centuries of practice, from strict
// parallel motion to free contrary-motion writing.
//
// Architecture:
// - style.rs: The three treatise styles (allowed intervals, crossing
//   policy, motion weights)
// - rules.rs: Ordered hard-constraint pipeline with stable rejection codes
// - scoring.rs: Additive soft-cost function over motion, register, and
//   accidentals
// - generator.rs: Backtracking search with dead-state memoization and a
//   step budget
// - analysis.rs: Per-position interval/consonance/motion annotation and a
//   text table
// - midi.rs: Two-track MIDI file output for listening
//
// Generation is fully deterministic: equal inputs produce equal voices.

pub mod analysis;
pub mod generator;
pub mod midi;
pub mod rules;
pub mod scoring;
pub mod style;
