use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while turning a coordinate into a forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to NWS failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("NWS request to {url} failed with status {status}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse NWS response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No forecast periods available from {url}")]
    NoForecastAvailable { url: String },
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
