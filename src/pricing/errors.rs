use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PriceError {
    #[error("Price request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Price service returned HTTP {0}")]
    Status(StatusCode),
    #[error("Price service error: {0}")]
    Service(String),
    #[error("Malformed price payload: {0}")]
    Payload(String),
}
