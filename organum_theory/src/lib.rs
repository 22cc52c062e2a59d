// organum_theory: pitch, interval, and mode types for organum generation.
//
// This crate defines the boundary types shared by the generation engine
// (`organum_engine`) and by downstream consumers (notation rendering, export,
// playback), none of which live here. It has no knowledge of styles, rules,
// or search; it only measures.
//
// Module overview:
// - `pitch.rs`:    `Step` and spelled `Pitch` with MIDI mapping and the
//                  `Step[#|b]Octave` textual format.
// - `interval.rs`: `Interval` measurement (generic/simple size, semitones,
//                  quality), tritone detection, consonance classes.
// - `motion.rs`:   `Dyad` and two-voice `Motion` classification.
// - `mode.rs`:     The four modal finals (Protus through Tetrardus).
//
// Design decisions:
// - **Spelling is identity.** C#4 and Db4 are distinct pitches; MIDI numbers
//   are derived on demand, never stored, so exports keep the spelling.
// - **Unknown quality is data, not an error.** Interval combinations outside
//   the quality table classify as Unknown and flow through every consumer as
//   plain non-consonant values.
// - **Plain serde values throughout.** Every type here derives
//   Serialize/Deserialize so export collaborators can key off fields
//   directly.

pub mod interval;
pub mod mode;
pub mod motion;
pub mod pitch;

pub use interval::{Consonance, Interval, Quality};
pub use mode::ModeFinal;
pub use motion::{Dyad, Motion};
pub use pitch::{ParsePitchError, Pitch, Step};
