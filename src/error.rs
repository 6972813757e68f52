use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Another operation is already in progress")]
    Busy,
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
