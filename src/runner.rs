// src/runner.rs
use std::path::PathBuf;

use crate::{
    config::options::{Credentials, RunOptions},
    error::Result,
    file::export_report,
    progress::{NullProgress, Progress},
    reconcile::{self, Report},
    scrape::{self, LineBoard, ProjectionSource},
};

/// What a run produced.
pub struct RunSummary {
    pub report: Report,
    pub projected_players: usize,
    pub board_players: usize,
    pub exported: Option<PathBuf>,
}

/// Top-level run: board lines, then forecast projections, then the ranking.
///
/// Both aggregates are built here and handed to the reconciler; nothing is kept
/// between runs. `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run<S, B>(
    opts: &RunOptions,
    credentials: Option<&Credentials>,
    source: &mut S,
    board: &mut B,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary>
where
    S: ProjectionSource + ?Sized,
    B: LineBoard + ?Sized,
{
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    let lines = scrape::aggregate_lines(board, credentials, &opts.fetch, &mut *progress)?;
    let projections = scrape::aggregate_day(source, opts, &mut *progress)?;

    let joined = lines.keys().filter(|name| projections.contains_key(*name)).count();
    logf!(
        "run: {} board players, {} projected players, {} in both",
        lines.len(),
        projections.len(),
        joined
    );
    progress.log(&format!("{joined} players on both the board and the forecasts"));

    let report = reconcile::report(&projections, &lines, &opts.report.categories, opts.report.top_n);

    let exported = match &opts.export {
        Some(export) => Some(export_report(export, &report)?),
        None => None,
    };

    Ok(RunSummary {
        report,
        projected_players: projections.len(),
        board_players: lines.len(),
        exported,
    })
}
