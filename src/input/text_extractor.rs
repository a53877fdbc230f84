//! Text extraction from resume file formats

use crate::error::{Result, ResumeRankerError};
use pulldown_cmark::{html, Parser};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tokio::fs;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex"));

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await?;

        // pdf-extract is CPU bound; keep it off the async workers
        let display = path.display().to_string();
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
                ResumeRankerError::PdfExtraction(format!(
                    "Failed to extract text from PDF '{}': {}",
                    display, e
                ))
            })
        })
        .await?
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path).await?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    pub fn markdown_to_text(markdown: &str) -> String {
        let parser = Parser::new(markdown);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        Self::html_to_text(&html_output)
    }

    fn html_to_text(html: &str) -> String {
        let text = html.replace("<br>", "\n").replace("</p>", "\n\n");
        let clean_text = HTML_TAG.replace_all(&text, "");

        // &amp; last so "&amp;lt;" decodes to "&lt;" and not "<"
        clean_text
            .lines()
            .map(|line| {
                line.trim()
                    .replace("&nbsp;", " ")
                    .replace("&lt;", "<")
                    .replace("&gt;", ">")
                    .replace("&quot;", "\"")
                    .replace("&#39;", "'")
                    .replace("&amp;", "&")
            })
            .filter(|line| !line.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_text_strips_formatting() {
        let text = MarkdownExtractor::markdown_to_text(
            "## Skills\n\n- **Rust** & Go\n- 5+ years of SQL\n",
        );
        assert!(text.contains("Skills"));
        assert!(text.contains("Rust & Go"));
        assert!(text.contains("5+ years of SQL"));
        assert!(!text.contains("**"));
        assert!(!text.contains("##"));
        assert!(!text.contains("<li>"));
    }
}
