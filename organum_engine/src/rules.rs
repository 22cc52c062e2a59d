// Hard constraint pipeline for candidate organal notes.
//
// Every candidate passes through an ordered short-circuit sequence of
// checks; the first failure wins and its reason is reported. The order is
// part of the contract: a vertical tritone is always reported as
// VERTICAL_TRITONE even when its size would also be forbidden, and cadence
// reasons only ever surface at the final index.
//
// Stages, in order: vertical consonance against the chant, melodic legality
// from the previous organal note, range and crossing limits, cadence rules.
// Rejections are data for the generator and the analysis tooling, not
// errors; a rejected candidate is simply not a move.

use serde::{Deserialize, Serialize};

use organum_theory::{Interval, ModeFinal, Pitch, Quality};

use crate::style::StyleConfig;

/// Widest allowed gap between the voices: an octave plus a fifth, in
/// semitones.
pub const MAX_VOICE_DISTANCE: i32 = 19;

/// Largest allowed melodic leap in generic size. Octaves are exempted
/// separately.
pub const MAX_LEAP: i32 = 5;

/// One search position as seen by the rule filter and the scorer.
///
/// `prev_organum` and `prev_chant` are None at the first position and always
/// present together afterwards.
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    pub chant: Pitch,
    pub prev_organum: Option<Pitch>,
    pub prev_chant: Option<Pitch>,
    pub index: usize,
    pub total_len: usize,
}

impl StepContext {
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total_len
    }
}

/// Reasons a candidate is rejected. Closed set, matched exhaustively by the
/// generator and the analysis tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// The chant/candidate dyad is a tritone. Forbidden in every style.
    VerticalTritone,
    /// The vertical simple size is not in the style's allowed set.
    ForbiddenIntervalSize,
    /// The vertical quality is augmented or diminished.
    BadIntervalQuality,
    /// The melodic step from the previous organal note is a tritone.
    MelodicTritone,
    /// A melodic leap beyond a fifth, and not an octave.
    LeapTooLarge,
    /// A chromatic step on one staff position, F to F# and the like.
    ChromaticSemistep,
    /// The candidate sounds above the chant in a style that forbids it.
    VoiceCrossingForbidden,
    /// The voices are more than an octave plus a fifth apart.
    ExcessiveDistance,
    /// The closing dyad is not a unison or octave.
    CadenceMustBeUnisonOrOctave,
    /// The closing organal note is not on the mode final.
    CadenceMustMatchFinal,
}

impl Rejection {
    /// Canonical reason code, stable for logs and external tooling.
    pub fn code(self) -> &'static str {
        match self {
            Rejection::VerticalTritone => "VERTICAL_TRITONE",
            Rejection::ForbiddenIntervalSize => "FORBIDDEN_INTERVAL_SIZE",
            Rejection::BadIntervalQuality => "BAD_INTERVAL_QUALITY",
            Rejection::MelodicTritone => "MELODIC_TRITONE",
            Rejection::LeapTooLarge => "LEAP_TOO_LARGE",
            Rejection::ChromaticSemistep => "CHROMATIC_SEMISTEP",
            Rejection::VoiceCrossingForbidden => "VOICE_CROSSING_FORBIDDEN",
            Rejection::ExcessiveDistance => "EXCESSIVE_DISTANCE",
            Rejection::CadenceMustBeUnisonOrOctave => "CADENCE_MUST_BE_U_OR_8",
            Rejection::CadenceMustMatchFinal => "CADENCE_MUST_MATCH_FINAL",
        }
    }
}

/// Run the whole pipeline for one candidate. `Ok(())` means the candidate is
/// legal at this position.
pub fn check_step(
    ctx: &StepContext,
    candidate: Pitch,
    config: &StyleConfig,
    mode_final: ModeFinal,
) -> Result<(), Rejection> {
    check_vertical(ctx.chant, candidate, config)?;
    if let Some(prev) = ctx.prev_organum {
        check_melodic(prev, candidate)?;
    }
    check_spacing(ctx.chant, candidate, config)?;
    if ctx.is_last() {
        check_cadence(ctx.chant, candidate, mode_final)?;
    }
    Ok(())
}

/// Stage 1: the simultaneous interval against the chant.
fn check_vertical(chant: Pitch, candidate: Pitch, config: &StyleConfig) -> Result<(), Rejection> {
    let vertical = Interval::between(candidate, chant);

    if vertical.is_tritone() {
        return Err(Rejection::VerticalTritone);
    }
    if !config.allows_vertical(vertical.simple_size) {
        return Err(Rejection::ForbiddenIntervalSize);
    }
    if matches!(vertical.quality, Quality::Augmented | Quality::Diminished) {
        return Err(Rejection::BadIntervalQuality);
    }
    Ok(())
}

/// Stage 2: the melodic step of the organal voice itself.
fn check_melodic(prev: Pitch, candidate: Pitch) -> Result<(), Rejection> {
    let melodic = Interval::between(prev, candidate);

    if melodic.is_tritone() {
        return Err(Rejection::MelodicTritone);
    }
    if melodic.generic_size > MAX_LEAP && melodic.generic_size != 8 {
        return Err(Rejection::LeapTooLarge);
    }
    // A chromatic semistep stays on one staff letter while moving in pitch:
    // the residue test lets perfect octave leaps through (12 semitones) while
    // catching augmented unisons and mistuned octaves.
    if melodic.simple_size == 1 && melodic.semitones % 12 != 0 {
        return Err(Rejection::ChromaticSemistep);
    }
    Ok(())
}

/// Stage 3: register limits between the voices.
fn check_spacing(chant: Pitch, candidate: Pitch, config: &StyleConfig) -> Result<(), Rejection> {
    if !config.allow_voice_crossing && candidate.midi() > chant.midi() {
        return Err(Rejection::VoiceCrossingForbidden);
    }
    if (chant.midi() - candidate.midi()).abs() > MAX_VOICE_DISTANCE {
        return Err(Rejection::ExcessiveDistance);
    }
    Ok(())
}

/// Stage 4: the occursus. Only evaluated at the final index.
fn check_cadence(chant: Pitch, candidate: Pitch, mode_final: ModeFinal) -> Result<(), Rejection> {
    let vertical = Interval::between(candidate, chant);

    // Unisons and octaves both fold to simple size 1.
    if vertical.simple_size != 1 {
        return Err(Rejection::CadenceMustBeUnisonOrOctave);
    }
    if !mode_final.matches(candidate) {
        return Err(Rejection::CadenceMustMatchFinal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Style;

    fn p(text: &str) -> Pitch {
        text.parse().unwrap()
    }

    /// Mid-line context: position 0 of a ten-note chant, so cadence rules
    /// stay out of the way unless a test asks for them.
    fn ctx(chant: &str) -> StepContext {
        StepContext {
            chant: p(chant),
            prev_organum: None,
            prev_chant: None,
            index: 0,
            total_len: 10,
        }
    }

    fn ctx_after(chant: &str, prev_organum: &str, prev_chant: &str) -> StepContext {
        StepContext {
            chant: p(chant),
            prev_organum: Some(p(prev_organum)),
            prev_chant: Some(p(prev_chant)),
            index: 1,
            total_len: 10,
        }
    }

    fn last_ctx(chant: &str, index: usize, total_len: usize) -> StepContext {
        StepContext {
            chant: p(chant),
            prev_organum: None,
            prev_chant: None,
            index,
            total_len,
        }
    }

    #[test]
    fn test_enchiriadis_rejects_thirds_micrologus_allows() {
        let third = check_step(
            &ctx("G4"),
            p("E4"),
            Style::Enchiriadis.config(),
            ModeFinal::G,
        );
        assert_eq!(third, Err(Rejection::ForbiddenIntervalSize));

        let fifth = check_step(
            &ctx("G4"),
            p("C4"),
            Style::Enchiriadis.config(),
            ModeFinal::G,
        );
        assert_eq!(fifth, Ok(()));

        let third = check_step(
            &ctx("G4"),
            p("E4"),
            Style::Micrologus.config(),
            ModeFinal::G,
        );
        assert_eq!(third, Ok(()));
    }

    #[test]
    fn test_vertical_tritone_forbidden_in_every_style() {
        for style in Style::ALL {
            assert_eq!(
                check_step(&ctx("B4"), p("F4"), style.config(), ModeFinal::G),
                Err(Rejection::VerticalTritone),
                "tritone must fail under {}",
                style.id()
            );
        }
    }

    #[test]
    fn test_octave_leap_allowed_seventh_rejected() {
        let octave = check_step(
            &ctx_after("G4", "C4", "G4"),
            p("C5"),
            Style::AdOrganumFaciendum.config(),
            ModeFinal::G,
        );
        assert_eq!(octave, Ok(()));

        let seventh = check_step(
            &ctx_after("G4", "C4", "G4"),
            p("B4"),
            Style::AdOrganumFaciendum.config(),
            ModeFinal::G,
        );
        assert_eq!(seventh, Err(Rejection::LeapTooLarge));
    }

    #[test]
    fn test_melodic_tritone_rejected() {
        // F4 to B4 melodically, while B4 sits consonant against the chant E4.
        let result = check_step(
            &ctx_after("E4", "F4", "C4"),
            p("B4"),
            Style::Micrologus.config(),
            ModeFinal::G,
        );
        assert_eq!(result, Err(Rejection::MelodicTritone));
    }

    #[test]
    fn test_chromatic_semistep_rejected() {
        // F4 to F#4: same staff letter, one semitone.
        let result = check_step(
            &ctx_after("B3", "F4", "C4"),
            p("F#4"),
            Style::Micrologus.config(),
            ModeFinal::G,
        );
        assert_eq!(result, Err(Rejection::ChromaticSemistep));
    }

    #[test]
    fn test_crossing_forbidden_only_where_style_says() {
        // D5 sounds a fifth above the chant G4.
        let crossed = check_step(&ctx("G4"), p("D5"), Style::Enchiriadis.config(), ModeFinal::G);
        assert_eq!(crossed, Err(Rejection::VoiceCrossingForbidden));

        let crossed = check_step(&ctx("G4"), p("D5"), Style::Micrologus.config(), ModeFinal::G);
        assert_eq!(crossed, Ok(()));
    }

    #[test]
    fn test_excessive_distance() {
        // Two octaves below the chant: 24 semitones, past the octave+fifth cap.
        let result = check_step(
            &ctx("G4"),
            p("G2"),
            Style::Micrologus.config(),
            ModeFinal::G,
        );
        assert_eq!(result, Err(Rejection::ExcessiveDistance));

        // Exactly an octave plus a fifth is still legal.
        let result = check_step(
            &ctx("G4"),
            p("C3"),
            Style::Micrologus.config(),
            ModeFinal::G,
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_cadence_unison_or_octave_on_the_final() {
        let last = last_ctx("G4", 9, 10);

        // Octave below the chant, on the final: a proper occursus.
        assert_eq!(
            check_step(&last, p("G3"), Style::Micrologus.config(), ModeFinal::G),
            Ok(())
        );
        // Unison works too.
        assert_eq!(
            check_step(&last, p("G4"), Style::Micrologus.config(), ModeFinal::G),
            Ok(())
        );
        // A fifth below is consonant mid-line but not a cadence.
        assert_eq!(
            check_step(&last, p("C4"), Style::Micrologus.config(), ModeFinal::G),
            Err(Rejection::CadenceMustBeUnisonOrOctave)
        );
    }

    #[test]
    fn test_cadence_must_match_final() {
        // Chant ends on D, mode final is G: the unison D organum is a
        // unison but on the wrong step.
        let last = last_ctx("D4", 9, 10);
        assert_eq!(
            check_step(&last, p("D4"), Style::Micrologus.config(), ModeFinal::G),
            Err(Rejection::CadenceMustMatchFinal)
        );
    }

    #[test]
    fn test_cadence_rules_silent_mid_line() {
        // Same dyad passes at index 0 of a longer chant.
        assert_eq!(
            check_step(&ctx("D4"), p("D4"), Style::Micrologus.config(), ModeFinal::G),
            Ok(())
        );
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(Rejection::VerticalTritone.code(), "VERTICAL_TRITONE");
        assert_eq!(
            Rejection::CadenceMustBeUnisonOrOctave.code(),
            "CADENCE_MUST_BE_U_OR_8"
        );
        assert_eq!(
            Rejection::CadenceMustMatchFinal.code(),
            "CADENCE_MUST_MATCH_FINAL"
        );
        assert_eq!(Rejection::ChromaticSemistep.code(), "CHROMATIC_SEMISTEP");
    }
}
