use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// How long a single request may take before it is abandoned.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues the HTTP exchange for a prepared request URL.
///
/// The production implementation is [`HttpTransport`]; tests substitute a
/// stub via [`Client::with_transport`](crate::Client::with_transport).
#[async_trait]
pub trait Transport: Send + Sync {
    /// Performs a GET against `url` and returns the response body.
    async fn get(&self, url: &str) -> Result<String>;
}

/// reqwest-backed transport with a fixed per-request timeout.
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build reqwest client");
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
