//! The ordered substitution passes.
//!
//! Line passes run on a [`Document`] before table conversion; markup passes run on the
//! [`Markup`] the table fold produces. Each pass sees the output of the one before it.

use super::document::Document;
use super::RenderOptions;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// `R` makes `\r` a line terminator: `.` never matches it and `$` matches in front of it.
static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^# (.+)$").expect("valid regex"));
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^## (.+)$").expect("valid regex"));
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?R)\*\*(.+?)\*\*").expect("valid regex"));
static BLOCKQUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^> (.+)$").expect("valid regex"));
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?mR)^\* (.+)$").expect("valid regex"));
// `.` stops at `\n` and `\r`, so a run only continues when a `</li>` ends its line and the
// next line opens with `<li>`.
static LIST_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?R)(<li>.*</li>\n?)+").expect("valid regex"));
static HORIZONTAL_RULE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?mR)^---$").expect("valid regex"));

/// Passes over the line document, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePass {
    /// Escape HTML special characters in the text (opt-in).
    EscapeHtml,
    /// `# ` → `<h1>`, then `## ` → `<h2>`.
    Headings,
    /// `**x**` → `<strong>x</strong>`.
    Bold,
    /// `> ` → `<blockquote>`.
    Blockquotes,
    /// `* ` → `<li>`.
    ListItems,
    /// Runs of `<li>` lines → `<ul>`.
    Lists,
}

const STANDARD_LINE_PASSES: &[LinePass] = &[
    LinePass::Headings,
    LinePass::Bold,
    LinePass::Blockquotes,
    LinePass::ListItems,
    LinePass::Lists,
];

/// The line passes for a render with the given options.
pub fn line_passes(options: &RenderOptions) -> Vec<LinePass> {
    let mut passes = Vec::with_capacity(STANDARD_LINE_PASSES.len() + 1);
    if options.escape_html {
        passes.push(LinePass::EscapeHtml);
    }
    passes.extend_from_slice(STANDARD_LINE_PASSES);
    passes
}

impl LinePass {
    pub fn apply(self, doc: Document) -> Document {
        match self {
            LinePass::EscapeHtml => doc.map_lines(escape_line),
            LinePass::Headings => doc.map_lines(|text| {
                let text = HEADING_1.replace_all(text, "<h1>$1</h1>");
                HEADING_2.replace_all(&text, "<h2>$1</h2>").into_owned()
            }),
            LinePass::Bold => {
                doc.map_lines(|text| BOLD.replace_all(text, "<strong>$1</strong>").into_owned())
            }
            LinePass::Blockquotes => doc.map_lines(|text| {
                BLOCKQUOTE
                    .replace_all(text, "<blockquote>$1</blockquote>")
                    .into_owned()
            }),
            LinePass::ListItems => {
                doc.map_lines(|text| LIST_ITEM.replace_all(text, "<li>$1</li>").into_owned())
            }
            LinePass::Lists => doc.map_text(|text| {
                LIST_RUN
                    .replace_all(text, |caps: &Captures| format!("<ul>{}</ul>", &caps[0]))
                    .into_owned()
            }),
        }
    }
}

/// HTML produced by the table fold, before block-level wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new(html: String) -> Self {
        Markup(html)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Passes over the table-converted markup, in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupPass {
    /// `\n\n` → `</p><p>`, then wrap everything in one `<p>`.
    Paragraphs,
    /// A line that is exactly `---` → `<hr>`.
    HorizontalRules,
}

pub const MARKUP_PASSES: &[MarkupPass] = &[MarkupPass::Paragraphs, MarkupPass::HorizontalRules];

impl MarkupPass {
    pub fn apply(self, markup: Markup) -> Markup {
        match self {
            MarkupPass::Paragraphs => {
                Markup(format!("<p>{}</p>", markup.0.replace("\n\n", "</p><p>")))
            }
            MarkupPass::HorizontalRules => {
                Markup(HORIZONTAL_RULE.replace_all(&markup.0, "<hr>").into_owned())
            }
        }
    }
}

/// Escape HTML special characters in text
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

// A leading blockquote marker is markup, not text, but only when a quote follows it.
fn escape_line(line: &str) -> String {
    match line.strip_prefix("> ") {
        Some(rest) if rest.chars().next().is_some_and(|c| c != '\r') => {
            format!("> {}", escape_html(rest))
        }
        _ => escape_html(line),
    }
}
