// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use propgap::{
    config::landmarks::LandmarkSet,
    core::html,
    specs::{projections, props},
};

/// A saved forecast page if one is around, otherwise a synthetic 15-player table.
fn load_forecast() -> String {
    std::fs::read_to_string(".ignore/page_samples/forecast.html").unwrap_or_else(|_| synthetic_forecast(15))
}

fn synthetic_forecast(players: usize) -> String {
    let mut html = String::from("<table class=\"sc-af84713a-1 lcrxDg\"><tr><th>Player</th></tr>");
    for i in 0..players {
        html.push_str(&format!("<tr><td><a href=\"/p/{i}\">Player {i}</a></td></tr>"));
    }
    html.push_str("</table><table class=\"sc-cb8dd678-1 iknkQC\"><tr>");
    for h in ["MIN", "PTS", "REB", "AST", "STL", "BLK"] {
        html.push_str(&format!("<th>{h}</th>"));
    }
    html.push_str("</tr>");
    for i in 0..players {
        html.push_str("<tr>");
        for c in 0..6 {
            html.push_str(&format!("<td>{}.{}</td>", i + c, c));
        }
        html.push_str("</tr>");
    }
    html.push_str("</table><div class=\"sc-ed7d8b84-0 iqOEpP no-padding\"></div>");
    html
}

fn synthetic_cell(stat: &str, buttons: usize) -> String {
    let mut cell = format!(
        "<div class=\"styles__overUnderListCell__tbRod\"><div class=\"styles__statLine__K1NYh\"><p>{stat}</p></div>"
    );
    for _ in 0..buttons {
        cell.push_str("<button class=\"styles__pickEmButton__OS_iW\">Pick</button>");
    }
    cell.push_str("</div>");
    cell
}

fn bench_extract(c: &mut Criterion) {
    let marks = LandmarkSet::latest();
    let doc = load_forecast();

    c.bench_function("flatten_forecast", |b| {
        b.iter(|| black_box(html::flatten(black_box(&doc)).len()))
    });

    let flat = html::flatten(&doc);
    c.bench_function("extract_projections", |b| {
        b.iter(|| {
            let rows = projections::extract(black_box(&flat), &marks.projections);
            black_box(rows.map(|r| r.len()).unwrap_or(0))
        })
    });

    let mut card = String::from(
        "<div class=\"styles__overUnderCell__KgzNn\"><h1 class=\"styles__playerName__jW6mb\">Player</h1>",
    );
    for (stat, buttons) in [("24.5 Points", 2), ("8.5 Rebounds", 2), ("40.5 Pts + Rebs + Asts", 3)] {
        card.push_str(&synthetic_cell(stat, buttons));
    }
    card.push_str("</div>");
    let board = card.repeat(120);

    c.bench_function("board_cells", |b| {
        b.iter(|| {
            let mut kept = 0usize;
            for (s, e) in props::card_ranges(black_box(&board), &marks.board) {
                let card = &board[s..e];
                for (cs, ce) in props::cell_ranges(card, &marks.board) {
                    let cell = &card[cs..ce];
                    if props::outcome_count(cell, &marks.board) == props::BINARY_OUTCOMES {
                        kept += props::stat_line_text(cell, &marks.board).map_or(0, |t| t.len());
                    }
                }
            }
            black_box(kept)
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
