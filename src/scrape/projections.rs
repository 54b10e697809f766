// src/scrape/projections.rs
use super::schedule::forecast_url;
use super::source::ProjectionSource;
use crate::config::options::{FetchOptions, RunOptions};
use crate::core::{html, net::with_retry};
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::{projections, slate};
use crate::types::{Matchup, Projections, StatVector};

/// Build the day's name → projection map from every game on the slate.
///
/// A game whose pages cannot be fetched (after one retry) or read is skipped and
/// reported; the slate itself failing ends the run. On a name seen twice the later
/// row wins.
pub fn aggregate_day<S: ProjectionSource + ?Sized>(
    source: &mut S,
    opts: &RunOptions,
    progress: &mut dyn Progress,
) -> Result<Projections> {
    let fetch = &opts.fetch;
    let slate_doc = with_retry("slate", fetch.retry_attempts, fetch.retry_backoff_ms, || source.fetch_slate())?;
    let matchups = slate::resolve_matchups(&html::flatten(&slate_doc), &opts.landmarks.slate)?;
    logf!("projections: {} games on the slate", matchups.len());

    progress.begin("projections", matchups.len());

    let mut players = Projections::new();
    for m in &matchups {
        match collect_matchup(source, m, opts) {
            Ok(rows) => {
                logd!("projections: {} → {} players", m.game_tag, rows.len());
                for (name, stats) in rows {
                    players.insert(name, stats);
                }
                progress.item_done(&m.game_tag);
            }
            Err(e) => {
                loge!("projections: skipping {}: {e}", m.game_tag);
                progress.item_failed(&m.game_tag, &e.to_string());
            }
        }
    }

    progress.finish();
    logf!("projections: {} players", players.len());
    Ok(players)
}

/// Away rows first, then home rows.
fn collect_matchup<S: ProjectionSource + ?Sized>(
    source: &mut S,
    m: &Matchup,
    opts: &RunOptions,
) -> Result<Vec<(String, StatVector)>> {
    let url = forecast_url(m)?;
    let home = slate::normalize_home(&m.home_label);
    let FetchOptions { retry_attempts, retry_backoff_ms, .. } = opts.fetch;

    let away_doc = with_retry(&url, retry_attempts, retry_backoff_ms, || source.fetch_markup(&url))?;
    let home_doc = with_retry(&join!(&url, " [", home, "]"), retry_attempts, retry_backoff_ms, || {
        source.fetch_markup_home(&url, home)
    })?;

    let marks = &opts.landmarks.projections;
    let mut rows = projections::extract(&html::flatten(&away_doc), marks)?;
    rows.extend(projections::extract(&html::flatten(&home_doc), marks)?);
    Ok(rows)
}
