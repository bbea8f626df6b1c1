use std::collections::HashMap;
use ups_report::{FormatRegistry, Report, ReportError};

#[test]
fn test_default_formats() {
    let registry = FormatRegistry::default();
    assert_eq!(registry.list_formats(), vec!["a3-html", "html", "markdown"]);
    assert!(registry.has("html"));
    assert!(!registry.has("pdf"));
}

#[test]
fn test_render_by_name() {
    let registry = FormatRegistry::default();
    let report = Report::from_markdown("# A3\n* one");

    let fragment = registry.render(&report, "html").unwrap();
    assert_eq!(fragment, "<p><h1>A3</h1>\n<ul><li>one</li></ul>\n</p>");

    let markdown = registry.render(&report, "markdown").unwrap();
    assert_eq!(markdown, "# A3\n* one");
}

#[test]
fn test_unknown_format() {
    let registry = FormatRegistry::default();
    let result = registry.render(&Report::default(), "docx");
    assert_eq!(result, Err(ReportError::FormatNotFound("docx".into())));
}

#[test]
fn test_markdown_rejects_options() {
    let registry = FormatRegistry::default();
    let mut options = HashMap::new();
    options.insert("escape".to_string(), "true".to_string());
    let result = registry.render_with_options(&Report::default(), "markdown", &options);
    assert!(matches!(result, Err(ReportError::NotSupported(_))));
}

#[test]
fn test_detect_from_output_file_name() {
    let registry = FormatRegistry::default();
    assert_eq!(
        registry.detect_format_from_filename("a3.html").as_deref(),
        Some("a3-html")
    );
    assert_eq!(
        registry.detect_format_from_filename("out/fragment.htm").as_deref(),
        Some("html")
    );
    assert_eq!(
        registry.detect_format_from_filename("report.md").as_deref(),
        Some("markdown")
    );
    assert_eq!(registry.detect_format_from_filename("a3.pdf"), None);
    assert_eq!(registry.detect_format_from_filename("noext"), None);
}
