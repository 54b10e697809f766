// src/scrape/board.rs
//! Source-B retrieval: the pick'em board.
//!
//! The board is a logged-in, stateful UI. `LineBoard` is the narrow set of calls the
//! line aggregator makes against it; handles (`Card`, `Cell`) are the adapter's own and
//! are passed through untouched.

use std::path::{Path, PathBuf};

use crate::config::landmarks::BoardLandmarks;
use crate::config::options::Credentials;
use crate::error::RetrievalError;
use crate::specs::props;

pub trait LineBoard {
    type Session;
    type Card;
    type Cell: Clone;

    fn login(&mut self, credentials: Option<&Credentials>) -> Result<Self::Session, RetrievalError>;
    fn locate_player_prop_cards(&mut self, session: &Self::Session) -> Result<Vec<Self::Card>, RetrievalError>;
    /// Open every card's "more props" toggle so all cells are present.
    fn expand_all_props(&mut self, session: &Self::Session, cards: &[Self::Card]) -> Result<(), RetrievalError>;

    fn player_name(&mut self, card: &Self::Card) -> Result<String, RetrievalError>;
    fn prop_cells(&mut self, card: &Self::Card) -> Result<Vec<Self::Cell>, RetrievalError>;
    fn outcome_count(&mut self, cell: &Self::Cell) -> Result<usize, RetrievalError>;
    /// The cell's `"<line> <label>"` text.
    fn stat_line(&mut self, cell: &Self::Cell) -> Result<String, RetrievalError>;
}

/// A board page saved after login with every card expanded.
pub struct MarkupBoard {
    page: String,
    marks: BoardLandmarks,
    source: Option<PathBuf>,
}

pub struct MarkupSession {
    pub user: Option<String>,
}

/// Byte range of a card in the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardRef {
    pub index: usize,
    start: usize,
    end: usize,
}

/// Byte range of a cell in the page; the handle carried on each line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellRef {
    pub card: usize,
    pub index: usize,
    start: usize,
    end: usize,
}

impl MarkupBoard {
    pub fn new(page: String, marks: BoardLandmarks) -> Self {
        Self { page, marks, source: None }
    }

    pub fn open(path: &Path, marks: BoardLandmarks) -> Result<Self, RetrievalError> {
        let page = std::fs::read_to_string(path)?;
        Ok(Self { page, marks, source: Some(path.to_path_buf()) })
    }

    fn slice(&self, start: usize, end: usize) -> Result<&str, RetrievalError> {
        self.page
            .get(start..end)
            .ok_or_else(|| RetrievalError::Board(format!("stale handle {start}..{end}")))
    }
}

impl LineBoard for MarkupBoard {
    type Session = MarkupSession;
    type Card = CardRef;
    type Cell = CellRef;

    fn login(&mut self, credentials: Option<&Credentials>) -> Result<MarkupSession, RetrievalError> {
        // The capture was taken after login; credentials only label the session.
        let user = credentials.map(|c| c.email.clone());
        match &self.source {
            Some(path) => logf!("board: replaying capture {} (user: {:?})", path.display(), user),
            None => logf!("board: replaying in-memory capture (user: {:?})", user),
        }
        Ok(MarkupSession { user })
    }

    fn locate_player_prop_cards(&mut self, _session: &MarkupSession) -> Result<Vec<CardRef>, RetrievalError> {
        let cards = props::card_ranges(&self.page, &self.marks)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| CardRef { index, start, end })
            .collect::<Vec<_>>();

        if cards.is_empty() {
            return Err(RetrievalError::Board(format!("no cards matching `{}`", self.marks.card)));
        }
        Ok(cards)
    }

    fn expand_all_props(&mut self, _session: &MarkupSession, cards: &[CardRef]) -> Result<(), RetrievalError> {
        logd!("board: {} cards already expanded in capture", cards.len());
        Ok(())
    }

    fn player_name(&mut self, card: &CardRef) -> Result<String, RetrievalError> {
        let block = self.slice(card.start, card.end)?;
        props::player_name(block, &self.marks)
            .ok_or_else(|| RetrievalError::Board(format!("card {} has no player name", card.index)))
    }

    fn prop_cells(&mut self, card: &CardRef) -> Result<Vec<CellRef>, RetrievalError> {
        let block = self.slice(card.start, card.end)?;
        let cells = props::cell_ranges(block, &self.marks)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| CellRef {
                card: card.index,
                index,
                start: card.start + start,
                end: card.start + end,
            })
            .collect();
        Ok(cells)
    }

    fn outcome_count(&mut self, cell: &CellRef) -> Result<usize, RetrievalError> {
        let block = self.slice(cell.start, cell.end)?;
        Ok(props::outcome_count(block, &self.marks))
    }

    fn stat_line(&mut self, cell: &CellRef) -> Result<String, RetrievalError> {
        let block = self.slice(cell.start, cell.end)?;
        props::stat_line_text(block, &self.marks).ok_or_else(|| {
            RetrievalError::Board(format!("card {} cell {} has no stat line", cell.card, cell.index))
        })
    }
}
