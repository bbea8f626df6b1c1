//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::error::ReportError;
use crate::format::Format;
use crate::report::Report;
use std::collections::HashMap;
use tracing::debug;

/// Registry of report formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
///
/// let report = Report::from_markdown("# A3 Summary");
/// let html = registry.render(&report, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, ReportError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ReportError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// When several formats claim an extension the alphabetically first name wins, so the
    /// answer does not depend on hash order.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        let detected = self
            .list_formats()
            .into_iter()
            .find(|name| {
                self.formats
                    .get(name)
                    .is_some_and(|format| format.file_extensions().contains(&extension))
            });
        debug!(filename, ?detected, "detected format from extension");
        detected
    }

    /// Render a report using the specified format
    pub fn render(&self, report: &Report, format: &str) -> Result<String, ReportError> {
        self.get(format)?.render(report)
    }

    /// Render a report using the specified format and options
    pub fn render_with_options(
        &self,
        report: &Report,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ReportError> {
        debug!(format, options = options.len(), "rendering report");
        self.get(format)?.render_with_options(report, options)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::html::HtmlFragmentFormat);
        registry.register(crate::formats::html::A3HtmlFormat::default());
        registry.register(crate::formats::markdown::MarkdownFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
