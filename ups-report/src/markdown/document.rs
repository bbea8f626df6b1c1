//! Line-oriented document the line passes operate on.

/// One line of the document being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Current text, after whatever passes already ran.
    pub text: String,
    /// Whether the line contained a `|` in the input.
    ///
    /// Table rows are classified (header vs data) by the adjacency of pipe lines in the input,
    /// so this travels with the line through every pass.
    pub source_has_pipe: bool,
}

impl Line {
    fn from_source(text: &str) -> Self {
        Line {
            text: text.to_string(),
            source_has_pipe: text.contains('|'),
        }
    }
}

/// A markdown source split on `\n`.
///
/// Splitting keeps a trailing empty line when the source ends with a newline, so joining the
/// lines back with `\n` always reproduces the text exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Document {
            lines: source.split('\n').map(Line::from_source).collect(),
        }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The current text of every line joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Rewrite every line independently.
    pub fn map_lines<F>(self, mut f: F) -> Self
    where
        F: FnMut(&str) -> String,
    {
        let lines = self
            .lines
            .into_iter()
            .map(|line| Line {
                text: f(&line.text),
                source_has_pipe: line.source_has_pipe,
            })
            .collect();
        Document { lines }
    }

    /// Rewrite the joined text as a whole.
    ///
    /// `f` must neither add nor remove newlines: the rewritten text is split again and line
    /// provenance is reattached positionally.
    pub fn map_text<F>(self, f: F) -> Self
    where
        F: FnOnce(&str) -> String,
    {
        let rewritten = f(&self.text());
        let new_texts: Vec<&str> = rewritten.split('\n').collect();
        debug_assert_eq!(new_texts.len(), self.lines.len());

        let lines = new_texts
            .into_iter()
            .enumerate()
            .map(|(index, text)| Line {
                text: text.to_string(),
                source_has_pipe: self
                    .lines
                    .get(index)
                    .map(|line| line.source_has_pipe)
                    .unwrap_or(false),
            })
            .collect();
        Document { lines }
    }
}
