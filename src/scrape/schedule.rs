// src/scrape/schedule.rs
// Forecast URLs are keyed by the local game date, not the UTC one.

use chrono::{Duration, NaiveDateTime};

use crate::config::consts::{FORECAST_PREFIX, FORECAST_SUFFIX, LOCAL_OFFSET_HOURS};
use crate::error::ParseError;
use crate::types::Matchup;

/// Leading `YYYY-MM-DDTHH:MM` of the published timestamp; seconds and zone are ignored.
const STAMP_LEN: usize = 16;

/// `2024-01-05T03:30…` → `20240104` with the fixed offset applied.
pub fn local_date(scheduled_time_utc: &str) -> Result<String, ParseError> {
    let bad = || ParseError::Timestamp(s!(scheduled_time_utc));
    let stamp = scheduled_time_utc.get(..STAMP_LEN).ok_or_else(bad)?;
    let utc = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M").map_err(|_| bad())?;
    let local = utc + Duration::hours(LOCAL_OFFSET_HOURS);
    Ok(local.format("%Y%m%d").to_string())
}

/// Prefix + local date + `_` + game tag + suffix.
pub fn forecast_url(m: &Matchup) -> Result<String, ParseError> {
    let date = local_date(&m.scheduled_time_utc)?;
    Ok(join!(FORECAST_PREFIX, &date, "_", &m.game_tag, FORECAST_SUFFIX))
}
