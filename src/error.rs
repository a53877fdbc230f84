//! Error handling for the resume ranker

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),

    #[error("Worker task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

/// Join failures from the batch worker pool surface as task errors
impl From<tokio::task::JoinError> for ResumeRankerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ResumeRankerError::Task(err.to_string())
    }
}
