use std::collections::HashMap;
use ups_report::formats::{get_default_css, A3HtmlFormat, PageLayout, PageOptions};
use ups_report::{Format, FormatRegistry, Report};

fn options(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_page_wraps_rendered_fragment() {
    let report = Report::from_markdown("# Scrap Line 4\n\nText");
    let html = FormatRegistry::default().render(&report, "a3-html").unwrap();

    assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"de\">"));
    assert!(html.contains("<title>Scrap Line 4</title>"));
    assert!(html.contains("<p><h1>Scrap Line 4</h1></p><p>Text\n</p>"));
    assert!(html.contains(get_default_css()));
    assert!(html.contains("@page"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_title_falls_back_to_default() {
    let html = A3HtmlFormat::default()
        .render(&Report::from_markdown("no heading"))
        .unwrap();
    assert!(html.contains("<title>A3 Summary</title>"));
}

#[test]
fn test_explicit_title_wins() {
    let report = Report::from_markdown("# Heading").with_title("Project <X>");
    let html = A3HtmlFormat::default().render(&report).unwrap();
    assert!(html.contains("<title>Project &lt;X&gt;</title>"));
}

#[test]
fn test_options_override_configured_layout() {
    let format = A3HtmlFormat::new(PageOptions {
        layout: PageLayout::A3Landscape,
        ..PageOptions::default()
    });
    let html = format
        .render_with_options(
            &Report::from_markdown("<i>x</i>"),
            &options(&[("layout", "screen"), ("escape", "yes")]),
        )
        .unwrap();
    assert!(html.contains("layout-screen"));
    assert!(!html.contains("size: A3 landscape"));
    assert!(html.contains("<p>&lt;i&gt;x&lt;/i&gt;\n</p>"));
}

#[test]
fn test_invalid_layout_option() {
    let result = A3HtmlFormat::default()
        .render_with_options(&Report::default(), &options(&[("layout", "letter")]));
    assert!(result.is_err());
}
