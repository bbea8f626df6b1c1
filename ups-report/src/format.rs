//! Format trait definition
//!
//! Every rendering target for a [`Report`] implements [`Format`], which gives the registry and
//! the CLI one interface over all of them.

use crate::error::ReportError;
use crate::report::Report;
use std::collections::HashMap;

/// Trait for report output formats
///
/// # Examples
///
/// ```ignore
/// struct Shouting;
///
/// impl Format for Shouting {
///     fn name(&self) -> &str {
///         "shouting"
///     }
///
///     fn render(&self, report: &Report) -> Result<String, ReportError> {
///         Ok(report.markdown.to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "a3-html")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format, without the leading dot.
    ///
    /// Used to pick a format from an output file name.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Render a report
    fn render(&self, report: &Report) -> Result<String, ReportError>;

    /// Render a report with format-specific parameters.
    ///
    /// The default implementation only accepts an empty parameter map. Formats with knobs
    /// override this.
    fn render_with_options(
        &self,
        report: &Report,
        options: &HashMap<String, String>,
    ) -> Result<String, ReportError> {
        if options.is_empty() {
            self.render(report)
        } else {
            Err(ReportError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Read a boolean format option (`true`/`1`/`yes` or `false`/`0`/`no`).
pub fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, ReportError> {
    match options.get(key).map(|value| value.to_lowercase()) {
        None => Ok(default),
        Some(value) => match value.as_str() {
            "true" | "1" | "yes" | "y" => Ok(true),
            "false" | "0" | "no" | "n" => Ok(false),
            other => Err(ReportError::NotSupported(format!(
                "Invalid boolean value '{other}' for option '{key}'"
            ))),
        },
    }
}
