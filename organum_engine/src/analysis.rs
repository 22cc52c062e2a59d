// Per-position annotation of a finished two-voice setting.
//
// The generator returns bare pitches; this module pairs them back up with
// the chant and measures what a reader of the score would see: the vertical
// interval, its consonance class, and the motion from the previous pair.
// Rows serialize for external tooling and render as an aligned text table
// for the command line.

use serde::{Deserialize, Serialize};

use organum_theory::{Consonance, Dyad, Interval, Motion, Pitch, Quality};

/// One analyzed position: the sounding dyad plus its measurements.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub index: usize,
    pub cantus: Pitch,
    pub organum: Pitch,
    pub interval: Interval,
    pub consonance: Consonance,
    /// Motion from the previous row. None on the first row.
    pub motion: Option<Motion>,
}

/// Annotate the voices position by position. When the voices differ in
/// length the extra tail is ignored.
pub fn analyze(chant: &[Pitch], organum: &[Pitch]) -> Vec<AnalysisRow> {
    let len = chant.len().min(organum.len());
    let mut rows = Vec::with_capacity(len);

    for index in 0..len {
        let dyad = Dyad::new(chant[index], organum[index]);
        let motion = index
            .checked_sub(1)
            .map(|prev| Motion::classify(Dyad::new(chant[prev], organum[prev]), dyad));
        let interval = dyad.interval();

        rows.push(AnalysisRow {
            index,
            cantus: dyad.cantus,
            organum: dyad.organum,
            interval,
            consonance: interval.consonance(),
            motion,
        });
    }
    rows
}

/// Render rows as an aligned text table, one position per line, with a
/// header row. Intended for terminal output.
pub fn render_table(rows: &[AnalysisRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:>6}  {:>7}  {:>8}  {:<9}  {}\n",
        "pos", "cantus", "organum", "interval", "class", "motion"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:>7}  {:>8}  {:<9}  {}\n",
            row.index,
            row.cantus.to_string(),
            row.organum.to_string(),
            interval_label(&row.interval),
            consonance_label(row.consonance),
            row.motion.map(Motion::name).unwrap_or("-"),
        ));
    }
    out
}

fn interval_label(interval: &Interval) -> String {
    let quality = match interval.quality {
        Quality::Perfect => "P",
        Quality::Major => "M",
        Quality::Minor => "m",
        Quality::Augmented => "A",
        Quality::Diminished => "d",
        Quality::Unknown => "?",
    };
    format!("{}{}", quality, interval.generic_size)
}

fn consonance_label(consonance: Consonance) -> &'static str {
    match consonance {
        Consonance::Perfect => "perfect",
        Consonance::Imperfect => "imperfect",
        Consonance::Dissonant => "dissonant",
    }
}
