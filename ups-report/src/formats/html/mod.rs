//! HTML formats
//!
//! Two HTML targets share the markdown renderer:
//!
//! | Format    | Output                                       | Options                      |
//! |-----------|----------------------------------------------|------------------------------|
//! | `html`    | The bare fragment, as injected into the page | `escape`                     |
//! | `a3-html` | Standalone HTML5 page with embedded CSS      | `escape`, `layout`, `css`    |
//!
//! # Layouts
//!
//! The page format embeds `css/baseline.css` plus one layout stylesheet:
//! - `a3-landscape` (default): `@page` set to A3 landscape with 10mm margins, two-column grid.
//!   Printing it from a browser gives the one-page A3 sheet.
//! - `screen`: single column, for reading on screen.
//!
//! Text passed with the `css` option is appended after both, so it can override them.
//!
//! # Escaping
//!
//! Both formats render without escaping unless `escape` is set. The page title is always
//! escaped.

mod page;

use crate::error::ReportError;
use crate::format::{bool_option, Format};
use crate::markdown::{render_with_options, RenderOptions};
use crate::report::Report;
use std::collections::HashMap;

pub use page::{get_default_css, wrap_in_document};

/// Title used when the report has neither an explicit title nor a heading.
pub const DEFAULT_TITLE: &str = "A3 Summary";

/// Page layout for the standalone export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageLayout {
    /// A3 landscape print sheet
    #[default]
    A3Landscape,
    /// Single column screen layout
    Screen,
}

impl PageLayout {
    pub fn parse(value: &str) -> Result<Self, ReportError> {
        match value {
            "a3-landscape" | "a3" => Ok(PageLayout::A3Landscape),
            "screen" => Ok(PageLayout::Screen),
            other => Err(ReportError::NotSupported(format!(
                "Unknown page layout '{other}' (expected 'a3-landscape' or 'screen')"
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PageLayout::A3Landscape => "a3-landscape",
            PageLayout::Screen => "screen",
        }
    }
}

/// Options for the standalone page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub layout: PageLayout,
    pub render: RenderOptions,
    /// Extra CSS appended after the built-in stylesheets
    pub custom_css: Option<String>,
}

impl PageOptions {
    fn merged(&self, options: &HashMap<String, String>) -> Result<Self, ReportError> {
        let mut merged = self.clone();
        merged.render.escape_html = bool_option(options, "escape", self.render.escape_html)?;
        if let Some(layout) = options.get("layout") {
            merged.layout = PageLayout::parse(layout)?;
        }
        if let Some(css) = options.get("css") {
            merged.custom_css = Some(css.clone());
        }
        Ok(merged)
    }
}

/// Format implementation for the HTML fragment
pub struct HtmlFragmentFormat;

impl Format for HtmlFragmentFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for embedding"
    }

    fn file_extensions(&self) -> &[&str] {
        &["htm"]
    }

    fn render(&self, report: &Report) -> Result<String, ReportError> {
        Ok(crate::markdown::render(&report.markdown))
    }

    fn render_with_options(
        &self,
        report: &Report,
        options: &HashMap<String, String>,
    ) -> Result<String, ReportError> {
        if let Some(unknown) = options.keys().find(|key| key.as_str() != "escape") {
            return Err(ReportError::NotSupported(format!(
                "Format 'html' does not support parameter '{unknown}'"
            )));
        }
        let render = RenderOptions {
            escape_html: bool_option(options, "escape", false)?,
        };
        Ok(render_with_options(&report.markdown, &render))
    }
}

/// Format implementation for the standalone A3 page
#[derive(Default)]
pub struct A3HtmlFormat {
    options: PageOptions,
}

impl A3HtmlFormat {
    pub fn new(options: PageOptions) -> Self {
        Self { options }
    }

    pub fn with_layout(layout: PageLayout) -> Self {
        Self::new(PageOptions {
            layout,
            ..PageOptions::default()
        })
    }

    fn render_page(&self, report: &Report, options: &PageOptions) -> String {
        let body = render_with_options(&report.markdown, &options.render);
        wrap_in_document(&body, report.display_title(DEFAULT_TITLE), options)
    }
}

impl Format for A3HtmlFormat {
    fn name(&self) -> &str {
        "a3-html"
    }

    fn description(&self) -> &str {
        "Standalone HTML page with A3 print layout"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html"]
    }

    fn render(&self, report: &Report) -> Result<String, ReportError> {
        Ok(self.render_page(report, &self.options))
    }

    fn render_with_options(
        &self,
        report: &Report,
        options: &HashMap<String, String>,
    ) -> Result<String, ReportError> {
        let merged = self.options.merged(options)?;
        Ok(self.render_page(report, &merged))
    }
}
