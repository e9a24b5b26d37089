use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;

use crate::error::TransportError;

/// Timeout applied to every event POST.
pub const POST_TIMEOUT: Duration = Duration::from_secs(20);

/// Timeout for the connectivity probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// A completed HTTP exchange, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status_code: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The network seam. The dispatcher and probe only talk to this.
pub trait Transport {
    fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError>;

    fn get(&self, url: &str) -> Result<HttpReply, TransportError>;
}

/// Blocking `reqwest` client. Certificate verification stays on.
pub struct ReqwestTransport {
    client: Client,
    post_timeout: Duration,
    probe_timeout: Duration,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self> {
        Self::with_timeouts(POST_TIMEOUT, PROBE_TIMEOUT)
    }

    pub fn with_timeouts(post_timeout: Duration, probe_timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self::from_client(client, post_timeout, probe_timeout))
    }

    pub fn from_client(client: Client, post_timeout: Duration, probe_timeout: Duration) -> Self {
        Self {
            client,
            post_timeout,
            probe_timeout,
        }
    }
}

impl Transport for ReqwestTransport {
    fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .timeout(self.post_timeout)
            .send()
            .map_err(classify)?;

        read_reply(response)
    }

    fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        let response = self
            .client
            .get(url)
            .timeout(self.probe_timeout)
            .send()
            .map_err(classify)?;

        read_reply(response)
    }
}

fn read_reply(response: Response) -> Result<HttpReply, TransportError> {
    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            (name.as_str().to_string(), value)
        })
        .collect();
    let body = response.text().map_err(classify)?;

    Ok(HttpReply {
        status_code,
        headers,
        body,
    })
}

/// Timeouts win over connection errors: a connect timeout reports as `Timeout`.
pub fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection
    } else {
        TransportError::Request(err.to_string())
    }
}
