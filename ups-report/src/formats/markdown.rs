//! Markdown format: the report text as generated (or as edited through chat).

use crate::error::ReportError;
use crate::format::Format;
use crate::report::Report;

/// Format implementation for the raw report markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Report markdown, unchanged"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn render(&self, report: &Report) -> Result<String, ReportError> {
        Ok(report.markdown.clone())
    }
}
