//! Restricted markdown → HTML renderer
//!
//! Converts the markdown dialect the generative API is asked to produce into an HTML fragment
//! for direct injection into the report area.
//!
//! # Element Mapping Table
//!
//! | Markdown              | HTML                                   | Notes                                   |
//! |-----------------------|----------------------------------------|-----------------------------------------|
//! | `# text`              | `<h1>text</h1>`                        | Text must be non-empty                  |
//! | `## text`             | `<h2>text</h2>`                        |                                         |
//! | `**text**`            | `<strong>text</strong>`                | Shortest match, several per line        |
//! | `> text`              | `<blockquote>text</blockquote>`        | One element per line                    |
//! | `* text`              | `<li>text</li>`                        | Consecutive items share one `<ul>`      |
//! | `a \| b`              | `<table><tr><th>/<td>…</tr></table>`   | Alignment rows dropped, empty cells too |
//! | blank line            | `</p><p>`                              | Whole output wrapped in one `<p>`       |
//! | `---` (whole line)    | `<hr>`                                 | Runs last                               |
//!
//! # Pipeline
//!
//! The rules are ordered substitutions and their interactions are part of the output contract
//! (a table surrounded by blank lines ends up inside `<p>`, a bold list line still becomes a
//! list item, ...). The pipeline is therefore spelled out as data:
//!
//! 1. The source is split into a [`Document`] of lines. Each line remembers whether it
//!    contained a `|` in the input; table rows are classified by that.
//! 2. The [`LinePass`]es run in order over the document.
//! 3. [`convert_tables`] folds the lines into [`Markup`].
//! 4. The [`MarkupPass`]es (paragraphs, rules) run over the markup.
//!
//! The renderer is total: anything that does not match a rule passes through as literal
//! text. It is not idempotent, rendering its own output wraps it again.
//!
//! # Escaping
//!
//! By default text is injected as is, which is fine for trusted input and what existing
//! reports rely on. With [`RenderOptions::escape_html`] the text is escaped before any markup
//! is generated; the rules themselves do not change.

pub mod document;
pub mod passes;
pub mod table;

pub use document::{Document, Line};
pub use passes::{escape_html, line_passes, LinePass, Markup, MarkupPass, MARKUP_PASSES};
pub use table::{convert_tables, RenderedRow, TableState};

/// Options for the renderer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Escape `&`, `<`, `>` and `"` in the source text before rendering.
    pub escape_html: bool,
}

impl RenderOptions {
    pub fn escaped() -> Self {
        Self { escape_html: true }
    }
}

/// Render markdown to an HTML fragment with default options.
pub fn render(markdown: &str) -> String {
    render_with_options(markdown, &RenderOptions::default())
}

/// Render markdown to an HTML fragment.
pub fn render_with_options(markdown: &str, options: &RenderOptions) -> String {
    let document = line_passes(options)
        .into_iter()
        .fold(Document::parse(markdown), |doc, pass| pass.apply(doc));

    MARKUP_PASSES
        .iter()
        .fold(convert_tables(&document), |markup, pass| pass.apply(markup))
        .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_one_paragraph() {
        assert_eq!(render("hello"), "<p>hello\n</p>");
    }

    #[test]
    fn heading() {
        assert_eq!(render("# Title"), "<p><h1>Title</h1>\n</p>");
    }

    #[test]
    fn list_items_share_one_list() {
        assert_eq!(
            render("* one\n* two"),
            "<p><ul><li>one</li>\n<li>two</li></ul>\n</p>"
        );
    }

    #[test]
    fn bold_list_item() {
        assert_eq!(
            render("* **key** value"),
            "<p><ul><li><strong>key</strong> value</li></ul>\n</p>"
        );
    }

    #[test]
    fn crlf_lines_keep_their_carriage_return_outside_markup() {
        assert_eq!(render("# Title\r\nBody"), "<p><h1>Title</h1>\r\nBody\n</p>");
        assert_eq!(render("Intro\r\n---\r\nMore"), "<p>Intro\r\n<hr>\r\nMore\n</p>");
    }

    #[test]
    fn escaping_is_opt_in() {
        assert_eq!(render("a <b> c"), "<p>a <b> c\n</p>");
        assert_eq!(
            render_with_options("a <b> c", &RenderOptions::escaped()),
            "<p>a &lt;b&gt; c\n</p>"
        );
    }
}
