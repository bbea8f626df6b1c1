use ups_report::{render, render_with_options, RenderOptions};

fn escaped(markdown: &str) -> String {
    render_with_options(markdown, &RenderOptions::escaped())
}

#[test]
fn test_default_render_does_not_escape() {
    assert_eq!(render("<b>x</b>"), "<p><b>x</b>\n</p>");
}

#[test]
fn test_script_tags_are_neutralised() {
    assert_eq!(
        escaped("<script>alert(1)</script>"),
        "<p>&lt;script&gt;alert(1)&lt;/script&gt;\n</p>"
    );
}

#[test]
fn test_blockquote_marker_survives_escaping() {
    assert_eq!(
        escaped("> a < b"),
        "<p><blockquote>a &lt; b</blockquote>\n</p>"
    );
}

#[test]
fn test_markup_rules_still_apply() {
    assert_eq!(escaped("**x & y**"), "<p><strong>x &amp; y</strong>\n</p>");
    assert_eq!(
        escaped("A | <b>\n1 | 2"),
        "<p><table><tr><th>A</th><th>&lt;b&gt;</th></tr><tr><td>1</td><td>2</td></tr></table></p>"
    );
    assert_eq!(escaped("Intro\n---\nMore"), "<p>Intro\n<hr>\nMore\n</p>");
}

#[test]
fn test_marker_free_text_renders_the_same_either_way() {
    let text = "Ausschussquote 4,2 Prozent";
    assert_eq!(escaped(text), render(text));
}

#[test]
fn test_bare_blockquote_marker_is_escaped() {
    assert_eq!(escaped("> "), "<p>&gt; \n</p>");
}
