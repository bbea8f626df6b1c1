use insta::assert_snapshot;
use ups_report::render;

#[test]
fn test_header_row_data_row_no_alignment_row() {
    assert_snapshot!(
        render("A | B\n--- | ---\n1 | 2"),
        @"<p><table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table></p>"
    );
}

#[test]
fn test_outer_pipes_and_colon_alignment() {
    assert_eq!(
        render("| A | B |\n|:---|---:|\n| 1 | 2 |"),
        render("A | B\n--- | ---\n1 | 2")
    );
}

#[test]
fn test_empty_cells_are_dropped() {
    let html = render("X | Y\nA | | C");
    assert_eq!(
        html,
        "<p><table><tr><th>X</th><th>Y</th></tr><tr><td>A</td><td>C</td></tr></table></p>"
    );
    assert_eq!(html.matches("<td>").count(), 2);
}

#[test]
fn test_header_follows_plain_line() {
    assert_eq!(
        render("Text\nA | B\nC | D"),
        "<p>Text\n<table><tr><th>A</th><th>B</th></tr><tr><td>C</td><td>D</td></tr></table></p>"
    );
}

#[test]
fn test_leading_alignment_row_makes_next_row_data() {
    assert_eq!(
        render("---|---\nA | B"),
        "<p><table><tr><td>A</td><td>B</td></tr></table></p>"
    );
}

#[test]
fn test_table_between_paragraphs() {
    assert_eq!(
        render("Intro\n\nA | B\n1 | 2\n\nOutro"),
        "<p>Intro</p><p><table><tr><th>A</th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table>\nOutro\n</p>"
    );
}

#[test]
fn test_inline_markup_inside_cells() {
    assert_eq!(
        render("**A** | B\n1 | 2"),
        "<p><table><tr><th><strong>A</strong></th><th>B</th></tr><tr><td>1</td><td>2</td></tr></table></p>"
    );
}

#[test]
fn test_rewritten_pipe_line_still_counts_as_previous_row() {
    // The heading pass rewrites the first line, which keeps its pipe.
    assert_eq!(
        render("# A | B\n1 | 2"),
        "<p><table><tr><th><h1>A</th><th>B</h1></th></tr><tr><td>1</td><td>2</td></tr></table></p>"
    );
}
