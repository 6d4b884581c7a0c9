pub mod plot;

use std::fmt::Write as _;
use std::fs;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use strum::IntoEnumIterator;

use dropsize::error::DsResult;
use dropsize::knee::KneeFit;
use dropsize::psd::{Analysis, MomentKind, Summary};

fn cutoff_label(cutoff: f64) -> String {
    if cutoff.fract() == 0.0 {
        format!("D{:.0}", cutoff)
    } else {
        format!("D{}", cutoff)
    }
}

pub fn print_summary_table(summary: &Summary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new(format!("{} particles", summary.particles))
        .add_attribute(Attribute::Bold)];
    for kind in MomentKind::iter() {
        header.push(Cell::new(kind.to_string()).add_attribute(Attribute::Bold));
    }
    table.add_row(header);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let cutoff_rows: [(String, fn(&Summary, MomentKind) -> f64, Option<Color>); 6] = [
        (cutoff_label(summary.cutoffs[0]), |s, k| s.moment(k).d10, None),
        (
            cutoff_label(summary.cutoffs[1]),
            |s, k| s.moment(k).d50,
            Some(Color::Cyan),
        ),
        (cutoff_label(summary.cutoffs[2]), |s, k| s.moment(k).d90, None),
        ("Span".to_string(), |s, k| s.moment(k).span, None),
        ("Mode".to_string(), |s, k| s.moment(k).mode, None),
        ("Median".to_string(), |s, k| s.moment(k).median, None),
    ];

    for (label, value, color) in cutoff_rows {
        let mut row = vec![Cell::new(&label).add_attribute(Attribute::Bold)];
        for kind in MomentKind::iter() {
            let cell = Cell::new(format!("{:.3}", value(summary, kind)));
            row.push(match color {
                Some(c) => cell.fg(c),
                None => cell,
            });
        }
        table.add_row(row);
    }

    for (label, value) in [
        ("D[1,0]", summary.d_1_0),
        ("D[3,2]", summary.d_3_2),
        ("D[4,3]", summary.d_4_3),
    ] {
        table.add_row(vec![
            Cell::new(label).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", value)),
            Cell::new(""),
            Cell::new(""),
        ]);
    }

    println!("\n{}", table);
}

/// Classic fixed-width report block, byte-compatible with the historical
/// console output.
pub fn format_report(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total number of particles: {}", summary.particles);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}Number    Surface   Volume", " ".repeat(9));
    let _ = writeln!(out, "{}", "=".repeat(36));

    let cutoff_rows = [
        (cutoff_label(summary.cutoffs[0]), 0),
        (cutoff_label(summary.cutoffs[1]), 1),
        (cutoff_label(summary.cutoffs[2]), 2),
    ];
    for (label, idx) in cutoff_rows {
        let pick = |k: MomentKind| match idx {
            0 => summary.moment(k).d10,
            1 => summary.moment(k).d50,
            _ => summary.moment(k).d90,
        };
        let _ = writeln!(
            out,
            "{:<8}{:6.3}    {:6.3}    {:6.3}",
            format!("{}:", label),
            pick(MomentKind::Number),
            pick(MomentKind::Surface),
            pick(MomentKind::Volume),
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(36));

    let stat_rows: [(&str, fn(&Summary, MomentKind) -> f64); 3] = [
        ("Span:", |s, k| s.moment(k).span),
        ("Mode:", |s, k| s.moment(k).mode),
        ("Median:", |s, k| s.moment(k).median),
    ];
    for (label, value) in stat_rows {
        let _ = writeln!(
            out,
            "{:<8}{:6.3}    {:6.3}    {:6.3}",
            label,
            value(summary, MomentKind::Number),
            value(summary, MomentKind::Surface),
            value(summary, MomentKind::Volume),
        );
    }
    let _ = writeln!(out, "{}", "-".repeat(36));

    let _ = writeln!(out, "{:<8}{:6.3}", "D[1,0]:", summary.d_1_0);
    let _ = writeln!(out, "{:<8}{:6.3}", "D[3,2]:", summary.d_3_2);
    let _ = writeln!(out, "{:<8}{:6.3}", "D[4,3]:", summary.d_4_3);

    out
}

pub fn write_report(path: &str, summary: &Summary) -> DsResult<()> {
    fs::write(path, format_report(summary))?;
    Ok(())
}

/// Per-bin distribution table: diameter, number%, surface%, volume%,
/// tab-delimited, zero-padded fixed-width fields. One row per bin-table
/// entry; the at-or-above-maximum slot has no diameter and is not emitted.
pub fn write_distribution_data(path: &str, analysis: &Analysis) -> DsResult<()> {
    let mut wtr = csv::WriterBuilder::new().delimiter(b'\t').from_path(path)?;

    let number = analysis.distribution(MomentKind::Number);
    let surface = analysis.distribution(MomentKind::Surface);
    let volume = analysis.distribution(MomentKind::Volume);

    for (slot, &diameter) in analysis.bins.representative.iter().enumerate() {
        wtr.write_record([
            format!("{:08.3}", diameter),
            format!("{:08.3}", number.percent[slot]),
            format!("{:08.3}", surface.percent[slot]),
            format!("{:08.3}", volume.percent[slot]),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_knee_table(results: &[(String, KneeFit)]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Case").add_attribute(Attribute::Bold),
        Cell::new("Rise Slope"),
        Cell::new("Plateau Slope"),
        Cell::new("Knee TMP").fg(Color::Cyan),
        Cell::new("Knee Flux"),
    ]);

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, fit) in results {
        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", fit.rise.slope)),
            Cell::new(format!("{:.4}", fit.plateau.slope)),
            Cell::new(format!("{:.3}", fit.knee_pressure)).fg(Color::Cyan),
            Cell::new(format!("{:.3}", fit.knee_flux)),
        ]);
    }
    println!("\n{}", table);
}
