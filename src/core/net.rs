// src/core/net.rs
// Blocking HTTP GET with a hard timeout, plus the one-retry policy every retrieval uses.

use std::{thread, time::Duration};

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::RetrievalError;

pub fn client(timeout_secs: u64) -> Result<Client, RetrievalError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| RetrievalError::Transport { url: s!("<client>"), reason: e.to_string() })
}

pub fn http_get(client: &Client, url: &str) -> Result<String, RetrievalError> {
    let resp = client.get(url).send().map_err(|e| classify(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(RetrievalError::Status { status: status.as_u16(), url: s!(url) });
    }
    resp.text().map_err(|e| classify(url, e))
}

fn classify(url: &str, e: reqwest::Error) -> RetrievalError {
    if e.is_timeout() {
        RetrievalError::Timeout { what: s!(url) }
    } else {
        RetrievalError::Transport { url: s!(url), reason: e.to_string() }
    }
}

/// Run `op` up to `attempts` times, sleeping `backoff_ms * n` before retry n.
/// Returns the last error when every attempt fails, or the first one that
/// [`RetrievalError::is_retryable`] rules out.
pub fn with_retry<T, F>(what: &str, attempts: usize, backoff_ms: u64, mut op: F) -> Result<T, RetrievalError>
where
    F: FnMut() -> Result<T, RetrievalError>,
{
    let attempts = attempts.max(1);
    let mut n = 1;
    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(e) if n < attempts && e.is_retryable() => {
                logw!("{what}: attempt {n}/{attempts} failed: {e}; retrying");
                thread::sleep(Duration::from_millis(backoff_ms * n as u64));
                n += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
