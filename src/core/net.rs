// src/core/net.rs

// One blocking GET per call; no retry, no rate limiting.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .map_err(|e| Error::fetch(url, e))?;

    log::debug!("GET {url}");
    let resp = client.get(url).send().map_err(|e| Error::fetch(url, e))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::fetch(url, format!("HTTP {status}")));
    }
    let body = resp.text().map_err(|e| Error::fetch(url, e))?;
    log::debug!("GET {url} → {} bytes", body.len());
    Ok(body)
}
