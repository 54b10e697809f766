// tests/common/mod.rs
// Small hand-written pages shaped like the live ones, built against the latest landmarks.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

/// Forecast page with a names table and a six-column stats table.
pub fn forecast_page(names: &[&str], rows: &[[&str; 6]]) -> String {
    let mut html = String::from("<html><body><div class=\"sc-header\">Game Forecast</div>\n");
    html.push_str("<table class=\"sc-af84713a-1 lcrxDg\">\n<thead><tr><th>Player</th></tr></thead>\n<tbody>\n");
    for name in names {
        html.push_str(&format!("  <tr><td><a href=\"/p/{name}\">{name}</a></td></tr>\n"));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("<table class=\"sc-cb8dd678-1 iknkQC\">\n<thead><tr>");
    for h in ["MIN", "PTS", "REB", "AST", "STL", "BLK"] {
        html.push_str(&format!("<th>{h}</th>"));
    }
    html.push_str("</tr></thead>\n<tbody>\n");
    for row in rows {
        html.push_str("  <tr>");
        for v in row {
            html.push_str(&format!("<td>{v}</td>"));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody></table>\n<div class=\"sc-ed7d8b84-0 iqOEpP no-padding\">Odds</div></body></html>\n");
    html
}

/// One slate game: `(game tag, start time, away label, home label)`.
pub type Game<'a> = (&'a str, &'a str, &'a str, &'a str);

pub fn event_blob(tag: &str, start: &str) -> String {
    format!(
        r#"{{"@context":"https://schema.org","@type":"SportsEvent","name":"{tag}","startDate":"{start}","location":{{"@type":"Place","name":"Arena"}}}}"#
    )
}

/// Picks page with odds noise mixed between the teams.
pub fn slate_page(games: &[Game]) -> String {
    let mut html = String::from("<html><body><nav>Picks</nav>\n");
    html.push_str("<div class=\"sc-5780ff56-0 fhgbQJ sc-9e842b7e-0 eAePBl\">\n<span>Matchup</span>\n");
    for (tag, start, away, home) in games {
        html.push_str(&format!("<div class=\"game\"><script type=\"application/ld+json\">{}</script>\n", event_blob(tag, start)));
        html.push_str(&format!("  <span>7:30 PM UTC</span>\n  <span>{away}</span><span>+150</span><span>-3.5</span>\n"));
        html.push_str(&format!("  <span>{home}</span><span>-170</span><span>O/U 221.5</span>\n</div>\n"));
    }
    html.push_str("</div>\n<div class=\"sc-5780ff56-0 sc-ab308bf4-1 eqambb\">More</div></body></html>\n");
    html
}

/// Board card: player name plus `(stat line, outcome buttons)` cells.
pub fn board_card(player: &str, cells: &[(&str, usize)]) -> String {
    let mut html = String::from("<div class=\"styles__overUnderCell__KgzNn\">\n");
    html.push_str(&format!("  <div class=\"styles__player__x\"><h1 class=\"styles__playerName__jW6mb\">{player}</h1></div>\n"));
    for (stat, buttons) in cells {
        html.push_str("  <div class=\"styles__overUnderListCell__tbRod\">\n");
        html.push_str(&format!("    <div class=\"styles__statLine__K1NYh\"><svg><path d=\"M0\"/></svg><p>{stat}</p></div>\n"));
        html.push_str("    <div class=\"styles__options\">");
        for i in 0..*buttons {
            html.push_str(&format!("<button class=\"styles__pickEmButton__OS_iW\">Option {i}</button>"));
        }
        html.push_str("</div>\n  </div>\n");
    }
    html.push_str("  <button class=\"styles__toggleButton__jrfS7\">More picks</button>\n</div>\n");
    html
}

pub fn board_page(cards: &[String]) -> String {
    let mut html = String::from("<html><body><div id=\"root\"><div class=\"styles__board\">\n");
    for c in cards {
        html.push_str(c);
    }
    html.push_str("</div></div></body></html>\n");
    html
}

pub fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("propgap_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}
