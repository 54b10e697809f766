// tests/board_lines.rs
mod common;

use common::{board_card, board_page};
use propgap::config::landmarks::LandmarkSet;
use propgap::config::options::{Credentials, FetchOptions};
use propgap::error::{Error, ParseError, RetrievalError};
use propgap::progress::NullProgress;
use propgap::scrape::board::{LineBoard, MarkupBoard};
use propgap::scrape::lines::aggregate_lines;
use propgap::specs::props::parse_stat_line;

fn board(cards: &[String]) -> MarkupBoard {
    MarkupBoard::new(board_page(cards), LandmarkSet::latest().board)
}

fn fetch() -> FetchOptions {
    FetchOptions { retry_backoff_ms: 0, ..FetchOptions::default() }
}

#[test]
fn stat_line_splits_at_first_space() {
    assert_eq!(parse_stat_line("24.5 Points").unwrap(), (24.5, "Points".to_string()));
    assert_eq!(
        parse_stat_line("38.5 Pts + Rebs + Asts").unwrap(),
        (38.5, "Pts + Rebs + Asts".to_string())
    );
    assert_eq!(parse_stat_line("7 Assists").unwrap(), (7.0, "Assists".to_string()));
}

#[test]
fn malformed_stat_lines_are_errors() {
    for bad in ["Points", "Points 24.5", "24.5", "24.5 ", "nan Points", "abc Rebounds"] {
        assert_eq!(parse_stat_line(bad), Err(ParseError::StatLine(bad.to_string())), "{bad}");
    }
}

#[test]
fn markup_board_reads_cards_and_cells() {
    let mut b = board(&[
        board_card("Jones", &[("18.5 Points", 2), ("7.5 Rebounds", 2)]),
        board_card("Smith", &[("4.5 Assists", 2)]),
    ]);
    let session = b.login(None).unwrap();
    let cards = b.locate_player_prop_cards(&session).unwrap();
    assert_eq!(cards.len(), 2);

    assert_eq!(b.player_name(&cards[0]).unwrap(), "Jones");
    assert_eq!(b.player_name(&cards[1]).unwrap(), "Smith");

    let cells = b.prop_cells(&cards[0]).unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(b.outcome_count(&cells[0]).unwrap(), 2);
    assert_eq!(b.stat_line(&cells[1]).unwrap(), "7.5 Rebounds");
}

#[test]
fn three_outcome_cells_never_reach_the_aggregate() {
    let mut b = board(&[
        board_card("Jones", &[("18.5 Points", 2), ("30.5 Pts + Rebs + Asts", 3), ("7.5 Rebounds", 2)]),
        board_card("Brown", &[("24.5 Points", 3)]),
    ]);
    let lines = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap();

    let jones = &lines["Jones"];
    assert_eq!(jones.keys().collect::<Vec<_>>(), ["Points", "Rebounds"]);
    assert_eq!(jones["Points"].line, 18.5);
    assert!(!jones.contains_key("Pts + Rebs + Asts"));
    assert!(lines["Brown"].is_empty());
}

#[test]
fn single_outcome_cells_are_excluded_too() {
    let mut b = board(&[board_card("Jones", &[("18.5 Points", 1)])]);
    let lines = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap();
    assert!(lines["Jones"].is_empty());
}

#[test]
fn duplicate_category_on_a_card_keeps_the_last() {
    let mut b = board(&[board_card("Jones", &[("18.5 Points", 2), ("19.5 Points", 2)])]);
    let lines = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap();

    let points = &lines["Jones"]["Points"];
    assert_eq!(points.line, 19.5);
    assert_eq!(points.handle.index, 1);
}

#[test]
fn unreadable_card_is_skipped() {
    let nameless = board_card("", &[("18.5 Points", 2)]);
    let broken_line = board_card("Smith", &[("Points", 2)]);
    let mut b = board(&[nameless, broken_line, board_card("Brown", &[("24.5 Points", 2)])]);
    let lines = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap();

    assert_eq!(lines.keys().collect::<Vec<_>>(), ["Brown"]);
}

#[test]
fn board_without_cards_fails_after_a_retry() {
    let mut b = MarkupBoard::new("<html><body>Log in</body></html>".into(), LandmarkSet::latest().board);
    let err = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap_err();
    assert!(matches!(err, Error::Retrieval(RetrievalError::Board(_))));
}

#[test]
fn credentials_label_the_session() {
    let mut b = board(&[board_card("Jones", &[("18.5 Points", 2)])]);
    let creds = Credentials { email: "me@example.com".into(), password: "hunter2".into() };
    let session = b.login(Some(&creds)).unwrap();
    assert_eq!(session.user.as_deref(), Some("me@example.com"));
    assert!(!format!("{creds:?}").contains("hunter2"));
}

/// Board whose expand step fails a set number of times before it works.
struct FlakyBoard {
    inner: MarkupBoard,
    expand_failures: usize,
    expand_calls: usize,
}

impl LineBoard for FlakyBoard {
    type Session = <MarkupBoard as LineBoard>::Session;
    type Card = <MarkupBoard as LineBoard>::Card;
    type Cell = <MarkupBoard as LineBoard>::Cell;

    fn login(&mut self, credentials: Option<&Credentials>) -> Result<Self::Session, RetrievalError> {
        self.inner.login(credentials)
    }
    fn locate_player_prop_cards(&mut self, session: &Self::Session) -> Result<Vec<Self::Card>, RetrievalError> {
        self.inner.locate_player_prop_cards(session)
    }
    fn expand_all_props(&mut self, session: &Self::Session, cards: &[Self::Card]) -> Result<(), RetrievalError> {
        self.expand_calls += 1;
        if self.expand_calls <= self.expand_failures {
            return Err(RetrievalError::Timeout { what: "more picks".into() });
        }
        self.inner.expand_all_props(session, cards)
    }
    fn player_name(&mut self, card: &Self::Card) -> Result<String, RetrievalError> {
        self.inner.player_name(card)
    }
    fn prop_cells(&mut self, card: &Self::Card) -> Result<Vec<Self::Cell>, RetrievalError> {
        self.inner.prop_cells(card)
    }
    fn outcome_count(&mut self, cell: &Self::Cell) -> Result<usize, RetrievalError> {
        self.inner.outcome_count(cell)
    }
    fn stat_line(&mut self, cell: &Self::Cell) -> Result<String, RetrievalError> {
        self.inner.stat_line(cell)
    }
}

fn flaky(expand_failures: usize) -> FlakyBoard {
    FlakyBoard {
        inner: board(&[board_card("Jones", &[("18.5 Points", 2)])]),
        expand_failures,
        expand_calls: 0,
    }
}

#[test]
fn expand_timeout_is_retried_once() {
    let mut b = flaky(1);
    let lines = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap();
    assert_eq!(b.expand_calls, 2);
    assert_eq!(lines["Jones"]["Points"].line, 18.5);
}

#[test]
fn expand_failing_twice_ends_the_run() {
    let mut b = flaky(2);
    let err = aggregate_lines(&mut b, None, &fetch(), &mut NullProgress).unwrap_err();
    assert_eq!(b.expand_calls, 2);
    assert!(matches!(err, Error::Retrieval(RetrievalError::Timeout { .. })));
}
