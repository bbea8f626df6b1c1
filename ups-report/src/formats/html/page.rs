//! Standalone page wrapper for the A3 export

use super::{PageLayout, PageOptions};
use crate::markdown::escape_html;

const BASELINE_CSS: &str = include_str!("../../../css/baseline.css");
const A3_LANDSCAPE_CSS: &str = include_str!("../../../css/layouts/a3-landscape.css");
const SCREEN_CSS: &str = include_str!("../../../css/layouts/screen.css");

/// The baseline stylesheet every page embeds.
pub fn get_default_css() -> &'static str {
    BASELINE_CSS
}

fn layout_css(layout: PageLayout) -> &'static str {
    match layout {
        PageLayout::A3Landscape => A3_LANDSCAPE_CSS,
        PageLayout::Screen => SCREEN_CSS,
    }
}

/// Wrap a rendered fragment in a complete HTML document with embedded CSS
pub fn wrap_in_document(body_html: &str, title: &str, options: &PageOptions) -> String {
    let layout_css = layout_css(options.layout);
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = escape_html(title);
    let layout_class = options.layout.as_str();

    format!(
        r#"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="ups-report">
  <title>{escaped_title}</title>
  <style>
{BASELINE_CSS}
{layout_css}
{custom_css}
  </style>
</head>
<body>
<main class="a3-report layout-{layout_class}">
{body_html}
</main>
</body>
</html>"#
    )
}
