// src/scrape/lines.rs
use super::board::LineBoard;
use crate::config::options::{Credentials, FetchOptions};
use crate::core::net::with_retry;
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::props::{self, BINARY_OUTCOMES};
use crate::types::{Lines, PlayerLines, PropLine};

/// Build player → (category → line) from every card on the board.
///
/// Only plain over/under cells are kept. A card that cannot be read is skipped and
/// reported; failing to log in, find any cards or expand them ends the run.
pub fn aggregate_lines<B: LineBoard + ?Sized>(
    board: &mut B,
    credentials: Option<&Credentials>,
    fetch: &FetchOptions,
    progress: &mut dyn Progress,
) -> Result<Lines<B::Cell>> {
    let FetchOptions { retry_attempts, retry_backoff_ms, .. } = *fetch;

    let session = with_retry("board login", retry_attempts, retry_backoff_ms, || board.login(credentials))?;
    let cards = with_retry("board cards", retry_attempts, retry_backoff_ms, || {
        board.locate_player_prop_cards(&session)
    })?;
    with_retry("board expand", retry_attempts, retry_backoff_ms, || board.expand_all_props(&session, &cards))?;
    logf!("lines: {} cards on the board", cards.len());

    progress.begin("lines", cards.len());

    let mut lines: Lines<B::Cell> = Lines::new();
    for (ix, card) in cards.iter().enumerate() {
        let label = format!("card {ix}");
        match read_card(board, card) {
            Ok((name, player_lines)) => {
                logd!("lines: {name}: {} binary props", player_lines.len());
                progress.item_done(&name);
                lines.insert(name, player_lines);
            }
            Err(e) => {
                loge!("lines: skipping {label}: {e}");
                progress.item_failed(&label, &e.to_string());
            }
        }
    }

    progress.finish();
    logf!("lines: {} players", lines.len());
    Ok(lines)
}

fn read_card<B: LineBoard + ?Sized>(board: &mut B, card: &B::Card) -> Result<(String, PlayerLines<B::Cell>)> {
    let name = board.player_name(card)?;

    let mut player_lines = PlayerLines::new();
    for cell in board.prop_cells(card)? {
        let outcomes = board.outcome_count(&cell)?;
        if outcomes != BINARY_OUTCOMES {
            logd!("lines: {name}: dropping cell with {outcomes} outcomes");
            continue;
        }
        let text = board.stat_line(&cell)?;
        let (line, category) = props::parse_stat_line(&text)?;
        player_lines.insert(category.clone(), PropLine { category, line, handle: cell });
    }
    Ok((name, player_lines))
}
