use std::time::Instant;

use tracing::{debug, info};

use crate::date::RequestPath;
use crate::error::WodError;

/// A fetched page: where it came from and the undecoded body.
#[derive(Debug)]
pub struct RawPage {
    pub url: String,
    pub body: Vec<u8>,
}

/// Fetches WOD posts from one blog origin.
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    /// Some hosts turn away default client identifiers, so the user agent is
    /// always set explicitly.
    pub fn new(base_url: &str, user_agent: &str) -> Result<Self, WodError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|source| WodError::Fetch {
                url: base_url.to_string(),
                source,
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn url_for(&self, path: &RequestPath) -> String {
        format!("{}/{}", self.base_url, path.as_str().trim_start_matches('/'))
    }

    /// One GET, no retries.
    pub async fn fetch(&self, path: &RequestPath) -> Result<RawPage, WodError> {
        let url = self.url_for(path);
        info!("Fetching {}", url);

        let start = Instant::now();
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| classify(&url, e))?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            return Err(WodError::NotFound { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| classify(&url, e))?
            .to_vec();
        debug!(
            status = status.as_u16(),
            bytes = body.len(),
            latency_ms = start.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(RawPage { url, body })
    }
}

fn classify(url: &str, source: reqwest::Error) -> WodError {
    let url = url.to_string();
    if source.is_connect() {
        WodError::Unreachable { url, source }
    } else {
        WodError::Fetch { url, source }
    }
}

// ── Tests ──
