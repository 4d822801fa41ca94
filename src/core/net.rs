// src/core/net.rs

// Blocking HTTPS GET against the companion service. Every request carries a
// browser-like UA and a bounded timeout; callers treat any error as
// "no stats available" rather than retrying.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;

use crate::config::consts::{
    ASSET_TIMEOUT_SECS, PAGE_TIMEOUT_SECS, SERVICE_ORIGIN, TRAINERS_PREFIX, USER_AGENT,
};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP 404 on the profile page: almost always a bad username.
    #[error("profile not found for username: {username}")]
    ProfileNotFound { username: String },
    #[error("unexpected status {status}")]
    HttpStatus { status: StatusCode },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub struct Client {
    http: HttpClient,
}

impl Client {
    pub fn new() -> Result<Self, FetchError> {
        let http = HttpClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http })
    }

    /// GET the trainer profile page and decode the body to text.
    pub fn fetch_profile_page(&self, username: &str) -> Result<String, FetchError> {
        let url = format!("{SERVICE_ORIGIN}{TRAINERS_PREFIX}{username}");
        logd!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(PAGE_TIMEOUT_SECS))
            .send()?;

        match resp.status() {
            StatusCode::NOT_FOUND => Err(FetchError::ProfileNotFound {
                username: username.to_string(),
            }),
            status if !status.is_success() => Err(FetchError::HttpStatus { status }),
            _ => Ok(resp.text()?),
        }
    }

    /// GET a page-relative asset (sprite image), raw bytes.
    pub fn fetch_asset(&self, relative_path: &str) -> Result<Vec<u8>, FetchError> {
        let url = format!("{SERVICE_ORIGIN}{relative_path}");
        logd!("GET {url}");
        let resp = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(ASSET_TIMEOUT_SECS))
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus { status });
        }
        Ok(resp.bytes()?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_the_username() {
        let e = FetchError::ProfileNotFound { username: "PeaceMonk".into() };
        assert_eq!(e.to_string(), "profile not found for username: PeaceMonk");
    }

    #[test]
    fn status_message_carries_the_code() {
        let e = FetchError::HttpStatus { status: StatusCode::BAD_GATEWAY };
        assert!(e.to_string().contains("502"));
    }
}
