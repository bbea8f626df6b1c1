//! Format implementations
//!
//! This module contains all formats a [`Report`](crate::report::Report) can be rendered to.

pub mod html;
pub mod markdown;

pub use html::{get_default_css, A3HtmlFormat, HtmlFragmentFormat, PageLayout, PageOptions};
pub use markdown::MarkdownFormat;
