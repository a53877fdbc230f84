//! Input manager routing resume files to the matching extractor

use crate::error::{Result, ResumeRankerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::debug;
use std::path::Path;

/// Stateless front door for text extraction.
///
/// Holds no per-file state, so one instance can be shared by every worker in
/// a batch.
#[derive(Debug, Clone, Default)]
pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    pub async fn extract_text(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(ResumeRankerError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let text = match FileType::from_path(path) {
            FileType::Pdf => {
                debug!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            },
            FileType::Text => {
                debug!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            },
            FileType::Markdown => {
                debug!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            },
            FileType::Unknown => {
                return Err(ResumeRankerError::UnsupportedFormat(
                    format!("Unsupported file type for: {}", path.display())
                ));
            }
        };

        Ok(text)
    }
}
