//! Pipe table conversion.
//!
//! The only stateful pass: a fold over the document lines carrying whether a table is open,
//! the rows rendered so far and the pipe provenance of the previous input line.

use super::document::{Document, Line};
use super::passes::Markup;

/// One table row, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub header: bool,
    pub cells: Vec<String>,
}

impl RenderedRow {
    fn write_html(&self, out: &mut String) {
        let tag = if self.header { "th" } else { "td" };
        out.push_str("<tr>");
        for cell in &self.cells {
            out.push_str(&format!("<{tag}>{cell}</{tag}>"));
        }
        out.push_str("</tr>");
    }
}

/// Fold state for [`convert_tables`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableState {
    pub inside_table: bool,
    pub pending_rows: Vec<RenderedRow>,
    previous_had_pipe: bool,
    output: String,
}

impl TableState {
    fn step(mut self, line: &Line) -> Self {
        let follows_pipe_line = self.previous_had_pipe;
        self.previous_had_pipe = line.source_has_pipe;

        if !line.source_has_pipe {
            self.close_table();
            self.output.push_str(&line.text);
            self.output.push('\n');
            return self;
        }

        self.inside_table = true;
        let cells = split_cells(&line.text);
        if cells.iter().all(|cell| is_alignment_cell(cell)) {
            return self;
        }
        self.pending_rows.push(RenderedRow {
            header: !follows_pipe_line,
            cells,
        });
        self
    }

    fn close_table(&mut self) {
        if !self.inside_table {
            return;
        }
        self.output.push_str("<table>");
        for row in self.pending_rows.drain(..) {
            row.write_html(&mut self.output);
        }
        self.output.push_str("</table>");
        self.inside_table = false;
    }

    fn finish(mut self) -> Markup {
        self.close_table();
        Markup::new(self.output)
    }
}

/// Convert every run of pipe lines into a `<table>`.
///
/// Lines outside tables are emitted followed by `\n`; a table is emitted without one, directly
/// in front of the line that closes it.
pub fn convert_tables(doc: &Document) -> Markup {
    doc.lines()
        .iter()
        .fold(TableState::default(), TableState::step)
        .finish()
}

/// Split a row on `|`, trimming cells and dropping the empty ones.
pub fn split_cells(line: &str) -> Vec<String> {
    line.split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// `:?-+:?`
pub fn is_alignment_cell(cell: &str) -> bool {
    let cell = cell.strip_prefix(':').unwrap_or(cell);
    let cell = cell.strip_suffix(':').unwrap_or(cell);
    !cell.is_empty() && cell.chars().all(|c| c == '-')
}
