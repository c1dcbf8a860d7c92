use thiserror::Error;

/// Fatal failures while talking to a job board. None of these are retried.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("{url} returned a body that is not valid JSON")]
    InvalidJson {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected {board} response on page {page}")]
    Decode {
        board: &'static str,
        page: u32,
        #[source]
        source: serde_json::Error,
    },
}
