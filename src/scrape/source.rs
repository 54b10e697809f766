// src/scrape/source.rs
//! Source-A retrieval: the picks page and each game's forecast page.

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::blocking::Client;

use crate::config::consts::SLATE_URL;
use crate::config::options::FetchOptions;
use crate::core::net;
use crate::error::RetrievalError;

/// Where forecast markup comes from. One session; calls are made one at a time.
pub trait ProjectionSource {
    /// The day's picks page (slate).
    fn fetch_slate(&mut self) -> Result<String, RetrievalError>;

    /// A forecast page as served (away team selected).
    fn fetch_markup(&mut self, url: &str) -> Result<String, RetrievalError>;

    /// The same page after its team toggle was switched to `home_label`.
    fn fetch_markup_home(&mut self, url: &str, home_label: &str) -> Result<String, RetrievalError>;
}

/// HTTP fetcher with a capture directory.
///
/// Online, served pages always come from the network and every fetch overwrites its
/// capture. Offline, captures are the only source. The home view only exists after a
/// client-side click, so it must be captured (`<page>.home-<label>.html`); this fetcher
/// never fabricates it.
pub struct PageFetcher {
    client: Option<Client>,
    pages_dir: Option<PathBuf>,
    slate_url: String,
}

impl PageFetcher {
    pub fn new(opts: &FetchOptions) -> Result<Self, RetrievalError> {
        let client = if opts.offline { None } else { Some(net::client(opts.timeout_secs)?) };
        Ok(Self {
            client,
            pages_dir: opts.pages_dir.clone(),
            slate_url: s!(SLATE_URL),
        })
    }

    pub fn with_slate_url(mut self, url: &str) -> Self {
        self.slate_url = s!(url);
        self
    }

    /// Capture file for a URL, optionally for a toggled view of it.
    pub fn capture_path(&self, url: &str, view: Option<&str>) -> Option<PathBuf> {
        self.pages_dir.as_ref().map(|dir| dir.join(capture_name(url, view)))
    }

    fn load_capture(&self, url: &str, view: Option<&str>) -> Option<String> {
        let path = self.capture_path(url, view)?;
        if !path.exists() {
            return None;
        }
        logd!("loading capture {}", path.display());
        fs::read_to_string(&path).ok()
    }

    fn save_capture(&self, url: &str, body: &str) {
        let Some(path) = self.capture_path(url, None) else { return };
        if let Err(e) = write_file(&path, body) {
            // cache only; the run goes on
            logw!("could not save capture {}: {e}", path.display());
        }
    }

    fn not_captured(&self, what: String, view: Option<&str>) -> RetrievalError {
        let path = self
            .capture_path(&what, view)
            .map_or(s!("<no capture dir>"), |p| p.display().to_string());
        RetrievalError::NotCaptured { what, path }
    }
}

impl ProjectionSource for PageFetcher {
    fn fetch_slate(&mut self) -> Result<String, RetrievalError> {
        let url = self.slate_url.clone();
        self.fetch_markup(&url)
    }

    fn fetch_markup(&mut self, url: &str) -> Result<String, RetrievalError> {
        let Some(client) = &self.client else {
            return self.load_capture(url, None).ok_or_else(|| self.not_captured(s!(url), None));
        };
        let body = net::http_get(client, url)?;
        self.save_capture(url, &body);
        Ok(body)
    }

    fn fetch_markup_home(&mut self, url: &str, home_label: &str) -> Result<String, RetrievalError> {
        let view = join!("home-", home_label);
        self.load_capture(url, Some(&view))
            .ok_or_else(|| self.not_captured(s!(url), Some(&view)))
    }
}

/// `https://host/a/b/` + `home-Golden State` → `host_a_b_.home-Golden_State.html`
pub fn capture_name(url: &str, view: Option<&str>) -> String {
    let safe = |s: &str| {
        s.replace("https://", "")
            .replace("http://", "")
            .replace(['/', '?', '&', '=', '#', ' ', ':'], "_")
    };
    match view {
        Some(v) => join!(&safe(url), ".", &safe(v), ".html"),
        None => join!(&safe(url), ".html"),
    }
}

fn write_file(path: &Path, body: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, body)
}
