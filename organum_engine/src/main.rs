// Organum generator CLI entry point.
//
// Generates a second voice against a chant melody in one of three
// historical organum styles, prints the vertical intervals position by
// position, and optionally writes both voices to a MIDI file.
//
// Usage:
//   organum [OPTIONS] NOTE [NOTE ...]
//     --style <NAME>      enchiriadis | micrologus | ad-organum (default: micrologus)
//     --final <LETTER>    Mode final D, E, F, or G (default: last chant note)
//     --midi <PATH>       Write both voices to a MIDI file
//     --max-steps <N>     Search budget in candidate explorations
//
// Notes are spelled letter + optional accidental + octave: D4, F#3, Bb2.

use std::path::Path;

use organum_engine::analysis::{analyze, render_table};
use organum_engine::generator::{SearchConfig, generate_with};
use organum_engine::midi::write_midi;
use organum_engine::style::Style;
use organum_theory::{ModeFinal, Pitch};

/// The CLI refuses chants longer than this. The library itself is bounded
/// by the step budget instead.
const MAX_CHANT_LEN: usize = 32;

struct CliArgs {
    style: Style,
    mode_final: Option<ModeFinal>,
    midi_path: Option<String>,
    search: SearchConfig,
    notes: Vec<String>,
}

fn main() {
    let args = parse_args();

    if args.notes.is_empty() {
        eprintln!("No chant notes given.");
        print_usage();
        std::process::exit(1);
    }
    if args.notes.len() > MAX_CHANT_LEN {
        eprintln!(
            "Chant too long: {} notes (limit {MAX_CHANT_LEN}).",
            args.notes.len()
        );
        std::process::exit(1);
    }

    let mut chant: Vec<Pitch> = Vec::with_capacity(args.notes.len());
    for token in &args.notes {
        match token.parse() {
            Ok(pitch) => chant.push(pitch),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
    }

    let mode_final = match args.mode_final {
        Some(f) => f,
        None => {
            let last = chant[chant.len() - 1];
            match ModeFinal::from_step(last.step) {
                Some(f) => f,
                None => {
                    eprintln!(
                        "The chant ends on {last}, which is not a mode final; pass --final D|E|F|G."
                    );
                    std::process::exit(1);
                }
            }
        }
    };

    let spelled: Vec<String> = chant.iter().map(|p| p.to_string()).collect();

    println!("=== Organum Generator ===");
    println!("Style: {}", args.style.display_name());
    println!("Final: {} ({})", mode_final, mode_final.name());
    println!("Chant: {} ({} notes)", spelled.join(" "), spelled.len());
    println!();

    println!("[1/3] Generating organal voice...");
    let generation = match generate_with(&chant, args.style, mode_final, &args.search) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    println!(
        "  Steps: {}, backtracks: {}",
        generation.steps, generation.backtracks
    );

    println!("[2/3] Vertical intervals:");
    let rows = analyze(&chant, &generation.organum);
    print!("{}", render_table(&rows));

    match &args.midi_path {
        Some(path) => {
            println!("[3/3] Writing MIDI to {path}...");
            if let Err(e) = write_midi(&chant, &generation.organum, Path::new(path)) {
                eprintln!("  Error writing MIDI: {e}");
                std::process::exit(1);
            }
            println!("  Done. Play with: timidity {path} (or any MIDI player)");
        }
        None => {
            println!("[3/3] No --midi path; skipping MIDI output.");
        }
    }
}

/// Parse command-line arguments. Uses simple `std::env::args()` matching,
/// no clap dependency.
fn parse_args() -> CliArgs {
    let mut parsed = CliArgs {
        style: Style::Micrologus,
        mode_final: None,
        midi_path: None,
        search: SearchConfig::default(),
        notes: Vec::new(),
    };
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--style" => {
                i += 1;
                parsed.style = args
                    .get(i)
                    .and_then(|s| Style::parse(s))
                    .unwrap_or_else(|| {
                        eprintln!("--style requires one of: enchiriadis, micrologus, ad-organum");
                        std::process::exit(1);
                    });
            }
            "--final" => {
                i += 1;
                let mode_final = args
                    .get(i)
                    .and_then(|s| ModeFinal::parse(s))
                    .unwrap_or_else(|| {
                        eprintln!("--final requires one of: D, E, F, G");
                        std::process::exit(1);
                    });
                parsed.mode_final = Some(mode_final);
            }
            "--midi" => {
                i += 1;
                parsed.midi_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--midi requires a path");
                    std::process::exit(1);
                }));
            }
            "--max-steps" => {
                i += 1;
                parsed.search.max_steps =
                    args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                        eprintln!("--max-steps requires a valid number");
                        std::process::exit(1);
                    });
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
            note => parsed.notes.push(note.to_string()),
        }
        i += 1;
    }

    parsed
}

fn print_usage() {
    println!("Usage: organum [OPTIONS] NOTE [NOTE ...]");
    println!();
    println!("Notes are letter + optional accidental + octave: D4 F#3 Bb2");
    println!();
    println!("Options:");
    println!("  --style <NAME>     enchiriadis | micrologus | ad-organum (default: micrologus)");
    println!("  --final <LETTER>   Mode final: D, E, F, or G (default: last chant note)");
    println!("  --midi <PATH>      Write both voices to a MIDI file");
    println!("  --max-steps <N>    Search budget in candidate explorations (default: 100000)");
    println!("  --help, -h         Show this help");
}
