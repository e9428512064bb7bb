use thiserror::Error;

/// Errors raised while reading, validating or writing pricing documents.
///
/// The engine itself is total; these only surface at the I/O boundary.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, PricingError>;
