use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("invalid request url: {0}")]
    InvalidUrl(String),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("position service returned {status}: {body}")]
    FailedRequest { status: StatusCode, body: String },
    #[error("undecodable response body: {0}")]
    Decode(#[source] serde_json::Error),
}
