//! Error types for hubdig-core

use thiserror::Error;

/// Result type alias using hubdig-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for hubdig
#[derive(Error, Debug)]
pub enum Error {
    /// Required input variable missing or empty
    #[error("Input variable '{name}' not specified!")]
    MissingInput { name: String },

    /// Empty image reference handed to the parser
    #[error("No image specified")]
    NoImageSpecified,

    /// Malformed image reference (more than author/name segments)
    #[error("Invalid image format")]
    InvalidImageFormat,

    /// Registry answered with a non-200 status
    #[error("Bad statuscode (got {status}, expected 200)")]
    BadStatus { status: u16 },

    /// Pagination exhausted without a matching tag/platform
    #[error("Image-Tag not found!")]
    TagNotFound,

    /// Exhausted twice: the requested arm64/v8 and the relaxed arm64 pass
    #[error("Image-Tag not found (even as just arm64)!")]
    TagNotFoundEvenArm64,

    /// HTTP transport error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing input error
    pub fn missing_input(name: impl Into<String>) -> Self {
        Self::MissingInput { name: name.into() }
    }

    /// Create a bad status error
    pub fn bad_status(status: u16) -> Self {
        Self::BadStatus { status }
    }
}
