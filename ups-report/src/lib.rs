//! Report toolkit for UPS/A3 problem-solving documents
//!
//!     This crate holds everything about an A3 report that is not UI: turning the report
//!     markdown into HTML, assembling the prompts sent to the generative-language API, building
//!     and decoding that API's JSON payloads, saving/loading project files and auto-filling a
//!     project from an uploaded spreadsheet.
//!
//!     This is a pure lib: no code here talks to the network, reads environment variables or
//!     prints. The `ups` binary (ups-cli) is the shell around it, and any other front end
//!     (a web UI, an editor plugin) should be able to use it as is.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ReportError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── report.rs               # The report being rendered (markdown + title)
//!     ├── markdown                # The restricted markdown -> HTML renderer
//!     │   ├── document.rs         # Line document carrying per-line provenance
//!     │   ├── passes.rs           # The ordered substitution passes
//!     │   └── table.rs            # Pipe table fold
//!     ├── formats                 # html, a3-html, markdown
//!     ├── project.rs              # Form data, JSON save/load
//!     ├── prompt.rs               # Generation prompt assembly
//!     ├── chat.rs                 # Chat refinement session
//!     ├── gemini.rs               # API request/response payloads
//!     └── extract.rs              # Upload checks and spreadsheet keyword scan
//!
//! Rendering
//!
//!     The markdown the API returns is a small, fixed dialect: `#`/`##` headings, `**bold**`,
//!     `> ` quotes, `* ` lists, pipe tables, blank-line paragraphs and `---` rules. We do not
//!     hand it to a CommonMark engine, the output of the renderer is a contract front ends
//!     already style against (tables nested in paragraphs included). See ./markdown/mod.rs.
//!
//!     Output is not sanitized by default. Callers that render text they do not trust should
//!     turn on [`markdown::RenderOptions::escape_html`].
//!
//! Formats
//!
//!     Rendering targets are implemented with the Format trait and discovered through the
//!     FormatRegistry, so the CLI can pick one from a name or an output file extension.
//!
//! Testing
//!     tests
//!     └── <area>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
pub mod chat;
pub mod error;
pub mod extract;
pub mod format;
pub mod formats;
pub mod gemini;
pub mod markdown;
pub mod project;
pub mod prompt;
pub mod registry;
pub mod report;

pub use error::ReportError;
pub use format::Format;
pub use markdown::{render, render_with_options, RenderOptions};
pub use project::{Countermeasure, ProjectData, ProjectFile, ReapplicationArea};
pub use registry::FormatRegistry;
pub use report::Report;
