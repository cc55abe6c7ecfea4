//! Outbound HTTP module.
//!
//! A thin, type-parameterized request/decode helper over a shared
//! `reqwest::Client`. The client is constructed once at startup and injected
//! into whatever needs it; it holds no per-request state.

use std::collections::HashMap;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Failure modes of a single outbound request.
#[derive(Debug)]
pub enum FetchError {
    /// The URL string did not parse as an absolute URL
    InvalidUrl(String),
    /// The request could not be built or the transport failed
    Request(String),
    /// The server answered with a non-200 status
    BadServerResponse,
    /// The 200 body was not valid JSON for the expected shape
    Decode(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::InvalidUrl(url) => write!(f, "invalid URL: {}", url),
            FetchError::Request(msg) => write!(f, "request failed: {}", msg),
            FetchError::BadServerResponse => write!(f, "bad server response"),
            FetchError::Decode(msg) => write!(f, "response decode failed: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request(err.to_string())
    }
}

/// Shared outbound HTTP client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().pool_max_idle_per_host(8).build()?;
        Ok(Self { client })
    }

    /// Issue one request and decode the 200 JSON body into `T`.
    ///
    /// `parameters`, when present, is sent as a JSON object body; the caller
    /// is responsible for pairing it with a method that permits one.
    /// `headers` are applied verbatim. The status must be exactly 200; there
    /// is no retry and no timeout beyond the transport default.
    pub async fn request<T: DeserializeOwned>(
        &self,
        url: &str,
        method: &str,
        parameters: Option<&HashMap<String, serde_json::Value>>,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<T, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|e| FetchError::Request(format!("invalid method: {}", e)))?;

        let mut request = self.client.request(method, url);

        if let Some(headers) = headers {
            request = request.headers(build_headers(headers)?);
        }

        if let Some(parameters) = parameters {
            request = request.json(parameters);
        }

        let response = request.send().await?;

        if response.status() != StatusCode::OK {
            return Err(FetchError::BadServerResponse);
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn build_headers(headers: &HashMap<String, String>) -> Result<HeaderMap, FetchError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| FetchError::Request(format!("invalid header {}: {}", name, e)))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| FetchError::Request(format!("invalid value for {}: {}", name, e)))?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
