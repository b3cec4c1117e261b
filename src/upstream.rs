//! Outbound HTTP client for the fetch proxy
//!
//! One GET per call, full body buffered. No timeout, no retry, no header
//! forwarding; redirects follow the client default.

use crate::error::ServeError;
use hyper::body::Bytes;
use hyper::StatusCode;
use reqwest::Client;

/// Status and body of a completed upstream GET
#[derive(Debug)]
pub struct FetchResult {
    pub status: StatusCode,
    pub body: Bytes,
}

/// Shared client, cheap to clone
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: Client,
}

impl UpstreamClient {
    pub fn new(use_env_proxy: bool) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if !use_env_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;
        Ok(Self { client })
    }

    /// GET `url` and buffer the whole response body
    pub async fn fetch(&self, url: Option<&str>) -> Result<FetchResult, ServeError> {
        let url = url.ok_or(ServeError::MissingUrl)?;

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        Ok(FetchResult { status, body })
    }
}
