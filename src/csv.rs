// src/csv.rs
use std::io::{self, Write};

use crate::reconcile::Report;

pub const REPORT_HEADERS: [&str; 6] = ["Category", "Rank", "Player", "Line", "Projected", "Difference"];

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// One row per reported record; rank is 1-based within its category.
pub fn report_rows(report: &Report) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for section in &report.sections {
        for (rank, r) in section.records.iter().enumerate() {
            rows.push(vec![
                s!(section.category.label()),
                (rank + 1).to_string(),
                r.player.clone(),
                r.line.to_string(),
                r.stat_sum.to_string(),
                r.abs_difference.to_string(),
            ]);
        }
    }
    rows
}

/// Whole report as delimited text, header line first.
pub fn report_to_string(report: &Report, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, &REPORT_HEADERS, sep);
    for r in report_rows(report) {
        let _ = write_row(&mut buf, &r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
