// src/specs/projections.rs
//! Scraping *spec* for the forecast page's projection tables.
//!
//! The page renders two side-by-side tables: one column of player names, and a grid of
//! numbers with six columns per player. Neither carries ids or row keys, so a row's
//! name and its numbers are tied together only by position:
//!
//! ```text
//! <table class="…names…">        names region
//!   Player                       header (dropped)
//!   Jayson Tatum
//!   Jaylen Brown
//! <table class="…stats…">        stats region
//!   MIN PTS REB AST STL BLK      6 header tokens (dropped)
//!   36.1 27.4 8.2 4.6 1.0 0.6
//!   33.0 23.9 5.5 3.5 1.1 0.4
//! ```
//!
//! Pairing stays positional; the one check we can make is that the counts agree, and
//! a disagreement is an error rather than a silently shifted table.

use crate::config::consts::{NAME_HEADER_LINES, STAT_HEADER_TOKENS, STAT_WIDTH};
use crate::config::landmarks::ProjectionLandmarks;
use crate::core::html::{region, text_lines};
use crate::error::ParseError;
use crate::types::StatVector;

/// Recover `(name, stats)` rows from a flattened forecast page, in page order.
pub fn extract(block: &str, marks: &ProjectionLandmarks) -> Result<Vec<(String, StatVector)>, ParseError> {
    let names = read_names(block, marks)?;
    let tokens = read_stat_tokens(block, marks)?;

    ensure_parse!(
        tokens.len() % STAT_WIDTH == 0 && tokens.len() / STAT_WIDTH == names.len(),
        ParseError::RowMismatch { names: names.len(), tokens: tokens.len(), width: STAT_WIDTH },
    );

    let mut rows = Vec::with_capacity(names.len());
    for (name, chunk) in names.into_iter().zip(tokens.chunks_exact(STAT_WIDTH)) {
        let mut values = [0.0; STAT_WIDTH];
        for (slot, tok) in values.iter_mut().zip(chunk) {
            *slot = parse_stat(tok)?;
        }
        rows.push((name, StatVector::new(values)));
    }

    logd!("projections: extracted {} rows", rows.len());
    Ok(rows)
}

fn read_names(block: &str, marks: &ProjectionLandmarks) -> Result<Vec<String>, ParseError> {
    let names_region = region(block, &marks.names_open, &marks.names_close)?;
    let names: Vec<String> = text_lines(names_region).skip(NAME_HEADER_LINES).collect();
    ensure_parse!(!names.is_empty(), ParseError::EmptyRegion { region: "names" });
    Ok(names)
}

fn read_stat_tokens(block: &str, marks: &ProjectionLandmarks) -> Result<Vec<String>, ParseError> {
    let stats_region = region(block, &marks.stats_open, &marks.stats_close)?;
    let tokens: Vec<String> = text_lines(stats_region).skip(STAT_HEADER_TOKENS).collect();
    ensure_parse!(!tokens.is_empty(), ParseError::EmptyRegion { region: "stats" });
    Ok(tokens)
}

/// Numbers only: a leading letter (`inf`, `NaN`, a stray label) is a parse error.
fn parse_stat(tok: &str) -> Result<f64, ParseError> {
    let numeric_start = tok
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'));
    let bad = || ParseError::NonNumeric { region: "stats", token: s!(tok) };

    if !numeric_start {
        return Err(bad());
    }
    tok.parse::<f64>().map_err(|_| bad())
}
