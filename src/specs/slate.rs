// src/specs/slate.rs
//! Scraping *spec* for the picks page (the day's slate).
//!
//! The slate block interleaves three kinds of text line per game: an embedded event
//! blob (`{"name":"BOS@NYK","startDate":"…",…}`), the away label and the home label,
//! mixed with odds noise (`+150`, `-3.5`, `O/U 221.5`, `Matchup`, times ending `UTC`).
//! After the noise is dropped the survivors come in fixed triples:
//!
//! ```text
//! (event blob, away label, home label)
//! ```
//!
//! The blob is not parsed as JSON; `game_tag` and `scheduled_time_utc` are sliced out
//! between landmark anchors like everything else on these pages.

use crate::config::consts::{HOME_ALIASES, SLATE_GROUP};
use crate::config::landmarks::SlateLandmarks;
use crate::core::html::{between, region, text_lines};
use crate::error::ParseError;
use crate::types::Matchup;

pub fn resolve_matchups(slate: &str, marks: &SlateLandmarks) -> Result<Vec<Matchup>, ParseError> {
    let block = region(slate, &marks.region_open, &marks.region_close)?;
    let lines: Vec<String> = text_lines(block).filter(|l| !is_noise(l)).collect();
    ensure_parse!(!lines.is_empty(), ParseError::EmptyRegion { region: "slate" });

    let groups = lines.chunks_exact(SLATE_GROUP);
    if !groups.remainder().is_empty() {
        logw!("slate: {} trailing line(s) do not form a full game, ignored", groups.remainder().len());
    }

    let mut out = Vec::with_capacity(lines.len() / SLATE_GROUP);
    for group in groups {
        let (blob, home) = (&group[0], &group[2]);
        match read_blob(blob, marks) {
            Ok((game_tag, scheduled_time_utc)) => out.push(Matchup {
                game_tag,
                scheduled_time_utc,
                home_label: home.clone(),
            }),
            Err(e) => loge!("slate: skipping game with home `{home}`: {e}"),
        }
    }
    Ok(out)
}

/// Odds, totals, column captions and clock lines.
fn is_noise(line: &str) -> bool {
    line.starts_with('+')
        || line.starts_with('-')
        || line.starts_with("O/U")
        || line.starts_with("Matchup")
        || line.starts_with(|c: char| c.is_ascii_digit())
        || line.ends_with("UTC")
}

fn read_blob(blob: &str, marks: &SlateLandmarks) -> Result<(String, String), ParseError> {
    let tag = between(blob, &marks.tag_open, &marks.tag_close)
        .ok_or_else(|| ParseError::LandmarkNotFound { landmark: marks.tag_open.clone() })?;
    let time = between(blob, &marks.time_open, &marks.time_close)
        .ok_or_else(|| ParseError::LandmarkNotFound { landmark: marks.time_open.clone() })?;
    ensure_parse!(!tag.is_empty(), ParseError::EmptyRegion { region: "game tag" });
    Ok((s!(tag), s!(time)))
}

/// Map the slate's home label to the text on the forecast page's team toggle.
pub fn normalize_home(label: &str) -> &str {
    HOME_ALIASES
        .iter()
        .find(|(alias, _)| *alias == label)
        .map_or(label, |(_, canonical)| *canonical)
}
