use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("menu page request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("menu page returned HTTP {0}")]
    Status(StatusCode),
    #[error("menu page response could not be read: {0}")]
    Body(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Telegram API request failed: {0}")]
    Network(#[source] reqwest::Error),
    #[error("Telegram rejected the message: {0}")]
    Rejected(String),
}
