//! Error types for the pairing engine

use thiserror::Error;

/// Failures raised by the pairing entry points
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingError {
    /// A required coffee or pastry selection is absent
    #[error("Missing selection for {field}: {message}")]
    MissingSelection { field: String, message: String },
}

impl PairingError {
    /// Request field that failed
    pub fn field(&self) -> &str {
        match self {
            PairingError::MissingSelection { field, .. } => field,
        }
    }

    /// Text shown next to the form
    pub fn user_message(&self) -> &str {
        match self {
            PairingError::MissingSelection { message, .. } => message,
        }
    }
}

/// Failures while writing a downloadable report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer error: {0}")]
    CsvWriter(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Template render error: {0}")]
    Render(#[from] askama::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Unknown report format: {0}")]
    UnknownFormat(String),
}
