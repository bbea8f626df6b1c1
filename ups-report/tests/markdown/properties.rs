use insta::assert_snapshot;
use proptest::prelude::*;
use ups_report::render;

#[test]
fn test_rendering_twice_wraps_twice() {
    let once = render("hello");
    let twice = render(&once);
    assert_ne!(once, twice);
    assert_eq!(twice, "<p><p>hello\n</p>\n</p>");
}

#[test]
fn test_plain_text_single_paragraph() {
    assert_snapshot!(render("hello").replace('\n', "\\n"), @r"<p>hello\n</p>");
}

#[test]
fn test_heading_levels() {
    assert_eq!(render("# Title"), "<p><h1>Title</h1>\n</p>");
    assert_eq!(render("## Problem"), "<p><h2>Problem</h2>\n</p>");
    // Deeper headings are not part of the dialect.
    assert_eq!(render("### Deep"), "<p>### Deep\n</p>");
}

#[test]
fn test_bold_spans() {
    assert_eq!(render("**bold**"), "<p><strong>bold</strong>\n</p>");
    assert_eq!(
        render("**a** and **b**"),
        "<p><strong>a</strong> and <strong>b</strong>\n</p>"
    );
}

#[test]
fn test_unordered_list_is_one_block() {
    let html = render("* one\n* two");
    assert_eq!(html, "<p><ul><li>one</li>\n<li>two</li></ul>\n</p>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
}

#[test]
fn test_list_followed_by_text_closes_on_next_line() {
    assert_eq!(
        render("* one\n* two\nafter"),
        "<p><ul><li>one</li>\n<li>two</li>\n</ul>after\n</p>"
    );
}

#[test]
fn test_horizontal_rule_between_single_newlines() {
    assert_eq!(render("Intro\n---\nMore"), "<p>Intro\n<hr>\nMore\n</p>");
}

#[test]
fn test_horizontal_rule_next_to_paragraph_break_stays_literal() {
    // The paragraph markup lands on the same line as the dashes.
    assert_eq!(render("---"), "<p>---\n</p>");
    assert_eq!(render("a\n\n---"), "<p>a</p><p>---\n</p>");
}

#[test]
fn test_blank_lines_split_paragraphs() {
    assert_eq!(render("a\n\nb"), "<p>a</p><p>b\n</p>");
    assert_eq!(render(""), "<p>\n</p>");
}

#[test]
fn test_blockquote() {
    assert_eq!(
        render("> Zu viel Ausschuss"),
        "<p><blockquote>Zu viel Ausschuss</blockquote>\n</p>"
    );
}

#[test]
fn test_malformed_markup_passes_through() {
    assert_eq!(render("**open"), "<p>**open\n</p>");
    assert_eq!(render("#NoSpace"), "<p>#NoSpace\n</p>");
    assert_eq!(render("*not a list"), "<p>*not a list\n</p>");
}

#[test]
fn test_generated_report_shape() {
    let md = "# A3\n\n## Problem\n> Zu viel Ausschuss\n\n* **Was:** Ausschuss\n* **Wo:** Linie 4\n\nEnde";
    assert_eq!(
        render(md),
        "<p><h1>A3</h1></p><p><h2>Problem</h2>\n\
         <blockquote>Zu viel Ausschuss</blockquote></p><p>\
         <ul><li><strong>Was:</strong> Ausschuss</li>\n\
         <li><strong>Wo:</strong> Linie 4</li>\n\
         </ul>\nEnde\n</p>"
    );
}

proptest! {
    #[test]
    fn test_marker_free_text_gets_exactly_one_paragraph(
        text in "[a-zA-Z0-9 ,.]{1,20}(\n[a-zA-Z0-9 ,.]{1,20}){0,3}"
    ) {
        let html = render(&text);
        prop_assert_eq!(html.clone(), format!("<p>{text}\n</p>"));
        prop_assert_eq!(html.matches("<p>").count(), 1);
        prop_assert_eq!(html.matches("</p>").count(), 1);
    }
}

#[test]
fn test_crlf_horizontal_rule() {
    assert_eq!(
        render("Intro\r\n---\r\nMore"),
        "<p>Intro\r\n<hr>\r\nMore\n</p>"
    );
}

#[test]
fn test_crlf_list_items_stay_out_of_one_run() {
    assert_eq!(
        render("* one\r\n* two"),
        "<p><ul><li>one</li></ul>\r\n<ul><li>two</li></ul>\n</p>"
    );
}
