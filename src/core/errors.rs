use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
    #[error("Invalid scoring configuration: {0}")]
    InvalidConfiguration(String),
}
