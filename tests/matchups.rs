// tests/matchups.rs
mod common;

use common::{event_blob, slate_page};
use propgap::config::consts::{FORECAST_PREFIX, FORECAST_SUFFIX};
use propgap::config::landmarks::LandmarkSet;
use propgap::core::html;
use propgap::error::ParseError;
use propgap::scrape::schedule::{forecast_url, local_date};
use propgap::specs::slate::{normalize_home, resolve_matchups};
use propgap::types::Matchup;

fn resolve(page: &str) -> Result<Vec<Matchup>, ParseError> {
    resolve_matchups(&html::flatten(page), &LandmarkSet::latest().slate)
}

#[test]
fn triples_survive_the_noise_filter() {
    let page = slate_page(&[
        ("BOS@NYK", "2024-01-05T00:30:00.000Z", "Boston", "New York"),
        ("GSW@LAL", "2024-01-05T03:30:00.000Z", "Golden St.", "L.A. Lakers"),
    ]);
    let got = resolve(&page).unwrap();

    assert_eq!(
        got,
        vec![
            Matchup {
                game_tag: "BOS@NYK".into(),
                scheduled_time_utc: "2024-01-05T00:30:00.000Z".into(),
                home_label: "New York".into(),
            },
            Matchup {
                game_tag: "GSW@LAL".into(),
                scheduled_time_utc: "2024-01-05T03:30:00.000Z".into(),
                home_label: "L.A. Lakers".into(),
            },
        ]
    );
}

#[test]
fn resolving_twice_gives_the_same_list() {
    let page = slate_page(&[
        ("MIA@CHI", "2024-02-10T01:00:00.000Z", "Miami", "Chicago"),
        ("DEN@PHX", "2024-02-10T02:00:00.000Z", "Denver", "Phoenix"),
    ]);
    assert_eq!(resolve(&page).unwrap(), resolve(&page).unwrap());
}

#[test]
fn game_with_unreadable_blob_is_skipped() {
    let good = ("BOS@NYK", "2024-01-05T00:30:00.000Z", "Boston", "New York");
    let page = slate_page(&[good, ("DAL@HOU", "2024-01-05T01:00:00.000Z", "Dallas", "Houston")]);
    let broken = page.replace(&event_blob("DAL@HOU", "2024-01-05T01:00:00.000Z"), r#"{"@type":"SportsEvent"}"#);

    let got = resolve(&broken).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].game_tag, "BOS@NYK");
}

#[test]
fn slate_without_its_landmark_is_an_error() {
    let page = slate_page(&[("BOS@NYK", "2024-01-05T00:30:00.000Z", "Boston", "New York")])
        .replace("fhgbQJ", "renamed");
    assert!(matches!(resolve(&page), Err(ParseError::LandmarkNotFound { .. })));
}

#[test]
fn empty_slate_is_an_empty_region() {
    let page = slate_page(&[]);
    assert_eq!(resolve(&page), Err(ParseError::EmptyRegion { region: "slate" }));
}

#[test]
fn home_aliases_map_to_toggle_labels() {
    assert_eq!(normalize_home("Golden St."), "Golden State");
    assert_eq!(normalize_home("L.A. Clippers"), "Los Angeles");
    assert_eq!(normalize_home("L.A. Lakers"), "Los Angeles");
    assert_eq!(normalize_home("Boston"), "Boston");
    assert_eq!(normalize_home(""), "");
}

#[test]
fn late_utc_games_roll_back_a_day() {
    assert_eq!(local_date("2024-01-05T03:30:00.000Z").unwrap(), "20240104");
    assert_eq!(local_date("2024-01-05T17:00:00.000Z").unwrap(), "20240105");
    assert_eq!(local_date("2024-03-01T04:59").unwrap(), "20240229");
    assert_eq!(local_date("2024-01-01T02:00:00Z").unwrap(), "20231231");
}

#[test]
fn malformed_timestamps_are_rejected() {
    assert_eq!(local_date("2024-01-05"), Err(ParseError::Timestamp("2024-01-05".into())));
    assert!(local_date("tomorrow at eight pm").is_err());
}

#[test]
fn forecast_url_uses_local_date_and_tag() {
    let m = Matchup {
        game_tag: "GSW@LAL".into(),
        scheduled_time_utc: "2024-01-05T03:30:00.000Z".into(),
        home_label: "L.A. Lakers".into(),
    };
    assert_eq!(forecast_url(&m).unwrap(), format!("{FORECAST_PREFIX}20240104_GSW@LAL{FORECAST_SUFFIX}"));
}
