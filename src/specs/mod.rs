// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific readers. Each one knows **where the ground truth lives** on a single
//! page and how to cut it out with landmarks and line filters; none of them fetch.
//!
//! ## What lives here
//! - **Pure text extraction** from captured or freshly fetched markup: the forecast
//!   page's projection tables (`projections`), the picks page slate (`slate`) and the
//!   pick'em board's cards (`props`).
//! - **Landmark use**: every anchor comes from `config::landmarks`, never inline.
//! - **Small shape checks** that turn a shifted table into a `ParseError` instead of a
//!   wrong answer.
//!
//! ## What does **not** live here
//! - **Networking, retries, sessions** – `core::net` and the `scrape` adapters.
//! - **Merging across pages** – `scrape::projections` / `scrape::lines` own that.
//! - **Ranking** – `reconcile`.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::projections::aggregate_day → specs::slate::resolve_matchups
//!                                             → specs::projections::extract (×2 per game)
//!        → scrape::lines::aggregate_lines     → specs::props (via MarkupBoard)
//!        → reconcile::report
//! ```
//!
//! ## Testing notes
//! Every spec is testable offline against small hand-written fixtures; see `tests/`.
pub mod projections;
pub mod props;
pub mod slate;
