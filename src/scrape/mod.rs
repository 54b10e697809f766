// src/scrape/mod.rs
pub mod board;
pub mod lines;
pub mod projections;
pub mod schedule;
pub mod source;

pub use board::{LineBoard, MarkupBoard};
pub use lines::aggregate_lines;
pub use projections::aggregate_day;
pub use source::{PageFetcher, ProjectionSource};
