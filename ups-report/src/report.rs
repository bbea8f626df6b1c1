//! The report handed to formats: generated markdown plus an optional title.

use once_cell::sync::Lazy;
use regex::Regex;

static FIRST_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^# (.+)$").expect("valid regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub title: Option<String>,
    pub markdown: String,
}

impl Report {
    pub fn from_markdown(markdown: impl Into<String>) -> Self {
        Report {
            title: None,
            markdown: markdown.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        self.title = if title.trim().is_empty() {
            None
        } else {
            Some(title)
        };
        self
    }

    /// Text of the first `# ` heading, if any.
    pub fn heading_title(&self) -> Option<&str> {
        FIRST_HEADING
            .captures(&self.markdown)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    }

    /// Explicit title, else the first heading, else `fallback`.
    pub fn display_title<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title
            .as_deref()
            .or_else(|| self.heading_title())
            .unwrap_or(fallback)
    }
}
