use std::io;
use thiserror::Error;

/// Custom error type for Striker
#[derive(Error, Debug)]
pub enum StrikerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request failed with status code {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing data: {0}")]
    MissingData(String),

    #[error("GPU not available: {0}")]
    GpuNotAvailable(String),

    #[error("Metric collection failed: {0}")]
    MetricCollection(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Striker
pub type Result<T> = std::result::Result<T, StrikerError>;

impl StrikerError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StrikerError::Config(msg.into())
    }

    /// Create a missing data error
    pub fn missing_data<S: Into<String>>(msg: S) -> Self {
        StrikerError::MissingData(msg.into())
    }

    /// Create an API error from an HTTP status and the server's message
    pub fn api<S: Into<String>>(status: u16, msg: S) -> Self {
        StrikerError::Api {
            status,
            message: msg.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        StrikerError::Other(msg.into())
    }

    pub fn gpu_not_available<S: Into<String>>(msg: S) -> Self {
        StrikerError::GpuNotAvailable(msg.into())
    }

    pub fn metric_collection<S: Into<String>>(msg: S) -> Self {
        StrikerError::MetricCollection(msg.into())
    }
}
