// src/config/options.rs
use std::fmt;
use std::path::PathBuf;

use super::consts::*;
use super::landmarks::LandmarkSet;
use crate::reconcile::Category;

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub landmarks: LandmarkSet,
    pub fetch: FetchOptions,
    pub report: ReportOptions,
    pub export: Option<ExportOptions>,
    /// Captured board page (Source-B).
    pub board_page: Option<PathBuf>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            landmarks: LandmarkSet::latest(),
            fetch: FetchOptions::default(),
            report: ReportOptions::default(),
            export: None,
            board_page: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    /// Where captured forecast pages live (and where live fetches are saved).
    pub pages_dir: Option<PathBuf>,
    /// Never touch the network; every page must be captured.
    pub offline: bool,
    pub timeout_secs: u64,
    pub retry_attempts: usize,
    pub retry_backoff_ms: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            pages_dir: Some(PathBuf::from(DEFAULT_PAGES_DIR)),
            offline: false,
            timeout_secs: FETCH_TIMEOUT_SECS,
            retry_attempts: RETRY_ATTEMPTS,
            retry_backoff_ms: RETRY_BACKOFF_MS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ReportOptions {
    pub categories: Vec<Category>,
    pub top_n: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            categories: Category::REPORT.to_vec(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub path: PathBuf,
    pub format: ExportFormat,
}

/// Board login. Read from the environment (or `.env`), never from code.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// `Ok(None)` when neither variable is set; an error when only one is.
    pub fn from_env() -> Result<Option<Self>, crate::error::Error> {
        let _ = dotenvy::dotenv();
        let email = std::env::var(ENV_EMAIL).ok().filter(|v| !v.is_empty());
        let password = std::env::var(ENV_PASSWORD).ok().filter(|v| !v.is_empty());

        match (email, password) {
            (Some(email), Some(password)) => Ok(Some(Self { email, password })),
            (None, None) => Ok(None),
            (Some(_), None) => Err(crate::error::Error::Config(format!("{ENV_EMAIL} set without {ENV_PASSWORD}"))),
            (None, Some(_)) => Err(crate::error::Error::Config(format!("{ENV_PASSWORD} set without {ENV_EMAIL}"))),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
