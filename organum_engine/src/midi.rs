// MIDI output for a finished two-voice setting.
//
// Writes a Standard MIDI File with the chant and the organal voice on
// separate tracks, note against note at a fixed pace. Meant for listening
// to a generation, not for engraving; spelling is lost in the key numbers.
//
// Uses the `midly` crate for MIDI writing. Output is SMF Format 1
// (multi-track): a tempo track plus one track per voice.

use std::path::Path;

use midly::{
    Format, Header, MidiMessage, Smf, Timing, Track, TrackEvent, TrackEventKind,
    num::{u4, u7, u15, u24, u28},
};
use organum_theory::Pitch;

/// Ticks per quarter note in MIDI output.
const TICKS_PER_QUARTER: u16 = 480;

/// Every note lasts a half note: organum moves syllable by syllable, so a
/// stately fixed pace reads better than any rhythm we could invent.
const TICKS_PER_NOTE: u32 = TICKS_PER_QUARTER as u32 * 2;

/// Microseconds per quarter note (120 beats per minute).
const TEMPO: u32 = 500_000;

/// Write both voices to a MIDI file at `path`.
pub fn write_midi(
    chant: &[Pitch],
    organum: &[Pitch],
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let smf = voices_to_smf(chant, organum);
    let mut buf = Vec::new();
    smf.write(&mut buf)?;
    std::fs::write(path, &buf)?;
    Ok(())
}

/// Build the in-memory SMF for both voices.
fn voices_to_smf(chant: &[Pitch], organum: &[Pitch]) -> Smf<'static> {
    let mut smf = Smf::new(Header::new(
        Format::Parallel,
        Timing::Metrical(u15::new(TICKS_PER_QUARTER)),
    ));

    // Track 0: tempo track
    let mut tempo_track: Track<'static> = Vec::new();
    tempo_track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::Tempo(u24::new(TEMPO))),
    });
    tempo_track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
    });
    smf.tracks.push(tempo_track);

    smf.tracks
        .push(voice_track("Vox Principalis", u4::new(0), chant));
    smf.tracks
        .push(voice_track("Vox Organalis", u4::new(1), organum));

    smf
}

fn voice_track(name: &'static str, channel: u4, voice: &[Pitch]) -> Track<'static> {
    let mut track: Track<'static> = Vec::new();

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::TrackName(name.as_bytes())),
    });

    // Choir aahs (program 52) for a sung sound.
    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Midi {
            channel,
            message: MidiMessage::ProgramChange {
                program: u7::new(52),
            },
        },
    });

    for pitch in voice {
        // Extreme octaves fold into the playable MIDI range.
        let key = u7::new(pitch.midi().clamp(0, 127) as u8);
        track.push(TrackEvent {
            delta: u28::new(0),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOn {
                    key,
                    vel: u7::new(80),
                },
            },
        });
        track.push(TrackEvent {
            delta: u28::new(TICKS_PER_NOTE),
            kind: TrackEventKind::Midi {
                channel,
                message: MidiMessage::NoteOff {
                    key,
                    vel: u7::new(0),
                },
            },
        });
    }

    track.push(TrackEvent {
        delta: u28::new(0),
        kind: TrackEventKind::Meta(midly::MetaMessage::EndOfTrack),
    });

    track
}
