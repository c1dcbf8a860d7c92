//! Blocking HTTP access to the job boards.
//!
//! Aggregation code only sees the [`Transport`] trait, so tests can script
//! page payloads without touching the network.

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::CollectError;

/// A single GET against a job board search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRequest {
    pub url: String,
    pub query: Vec<(&'static str, String)>,
    pub headers: Vec<(&'static str, String)>,
}

impl PageRequest {
    pub fn new(url: impl Into<String>) -> Self {
        PageRequest {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    pub fn header(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.headers.push((name, value.into()));
        self
    }

    /// Value of a query parameter, if set.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Fetches a page and hands back its JSON body.
pub trait Transport {
    fn get_json(&self, request: &PageRequest) -> Result<Value, CollectError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, CollectError> {
        // api.hh.ru answers 400 to requests without a User-Agent.
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("salary-collector/", env!("CARGO_PKG_VERSION"))),
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(CollectError::Client)?;

        Ok(HttpTransport { client })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, request: &PageRequest) -> Result<Value, CollectError> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(*name, value.as_str());
        }

        let response = builder.send().map_err(|source| CollectError::Transport {
            url: request.url.clone(),
            source,
        })?;

        let status = response.status();
        debug!(url = %request.url, %status, "page fetched");
        if !status.is_success() {
            return Err(CollectError::Status {
                url: request.url.clone(),
                status,
            });
        }

        let body = response.text().map_err(|source| CollectError::Transport {
            url: request.url.clone(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| CollectError::InvalidJson {
            url: request.url.clone(),
            source,
        })
    }
}
