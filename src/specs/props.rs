// src/specs/props.rs
//! Scraping *spec* for the pick'em board.
//!
//! A board page is a list of player cards. Each card holds the player's name and a list
//! of prop cells; a cell shows one stat line (`"24.5 Points"`) and its pick buttons.
//! Plain over/under cells have exactly two buttons; boosted or multi-way cells have
//! more (or fewer) and are not comparable to a projection.
//!
//! These helpers read a captured board page. The aggregator only sees them through the
//! `LineBoard` adapter, so a live browser-backed board can slot in without changes here.

use crate::config::landmarks::BoardLandmarks;
use crate::core::html::{blocks_with_class, class_block_ranges, count_openers_with, first_element, inner_after_open_tag, strip_tags};
use crate::error::ParseError;

/// Outcome buttons on a plain over/under cell.
pub const BINARY_OUTCOMES: usize = 2;

/// `"<line> <label>"` → `(line, label)`. Split at the first space; the label is kept verbatim.
pub fn parse_stat_line(text: &str) -> Result<(f64, String), ParseError> {
    let bad = || ParseError::StatLine(s!(text));
    let (number, label) = text.split_once(' ').ok_or_else(bad)?;

    ensure_parse!(!label.is_empty(), bad());
    let numeric_start = number.starts_with(|c: char| c.is_ascii_digit() || c == '.');
    ensure_parse!(numeric_start, bad());

    let line = number.parse::<f64>().map_err(|_| bad())?;
    Ok((line, s!(label)))
}

/// Byte ranges of the cards on a board page.
pub fn card_ranges(page: &str, marks: &BoardLandmarks) -> Vec<(usize, usize)> {
    class_block_ranges(page, &marks.card)
}

pub fn player_name(card: &str, marks: &BoardLandmarks) -> Option<String> {
    let block = blocks_with_class(card, &marks.player_name).into_iter().next()?;
    let name = strip_tags(block);
    (!name.is_empty()).then_some(name)
}

/// Byte ranges of the prop cells, relative to the card.
pub fn cell_ranges(card: &str, marks: &BoardLandmarks) -> Vec<(usize, usize)> {
    class_block_ranges(card, &marks.prop_cell)
}

pub fn outcome_count(cell: &str, marks: &BoardLandmarks) -> usize {
    count_openers_with(cell, &marks.outcome_button)
}

/// Text of the `<p>` (or configured tag) inside the cell's stat-line element.
pub fn stat_line_text(cell: &str, marks: &BoardLandmarks) -> Option<String> {
    let stat_block = blocks_with_class(cell, &marks.stat_line).into_iter().next()?;
    // The stat-line element may itself be the text tag; look inside it first.
    let inner = inner_after_open_tag(stat_block);
    let text = match first_element(&inner, &marks.stat_text_tag) {
        Some(el) => strip_tags(el),
        None => strip_tags(stat_block),
    };
    (!text.is_empty()).then_some(text)
}
