// src/error.rs
use std::io;

use thiserror::Error;

/// Text recovery failures. Scoped to one page: the caller skips the matchup or card.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("landmark not found: {landmark}")]
    LandmarkNotFound { landmark: String },

    #[error("{region} region is empty after filtering")]
    EmptyRegion { region: &'static str },

    #[error("expected a number in {region}, found `{token}`")]
    NonNumeric { region: &'static str, token: String },

    #[error("{names} names but {tokens} stat tokens ({width} per row)")]
    RowMismatch { names: usize, tokens: usize, width: usize },

    #[error("malformed stat line `{0}`")]
    StatLine(String),

    #[error("malformed timestamp `{0}`")]
    Timestamp(String),

    #[error("landmark file line {line}: {reason}")]
    LandmarkFile { line: usize, reason: String },
}

#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("timed out fetching {what}")]
    Timeout { what: String },

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },

    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    #[error("no captured page for {what} (looked in {path})")]
    NotCaptured { what: String, path: String },

    #[error("board: {0}")]
    Board(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RetrievalError {
    /// A missing capture stays missing; everything else may be transient.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, RetrievalError::NotCaptured { .. })
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ReconcileError {
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    #[error("config: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
