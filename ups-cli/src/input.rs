//! Input files of the CLI
//!
//! The CLI reads three kinds of files besides configuration:
//!
//! - report markdown (`.md`), as returned by the API or edited by hand;
//! - project files (`.json`), as saved by the web front end or by `ups extract`;
//! - spreadsheet exports for auto-fill: a workbook as JSON, or one sheet as tab-separated text.
//!
//! Errors are returned as ready-to-print messages.

use std::fs;
use std::path::Path;
use ups_report::extract::{check_upload, Sheet, UploadKind, Workbook};
use ups_report::{ProjectFile, Report};

/// What a `render` input holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Markdown,
    Project,
}

impl InputKind {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "markdown" | "md" => Ok(InputKind::Markdown),
            "project" | "json" => Ok(InputKind::Project),
            other => Err(format!(
                "Unknown input kind '{other}' (expected 'markdown' or 'project')"
            )),
        }
    }

    /// `.json` files are projects, anything else is markdown.
    pub fn detect(path: &str) -> Self {
        match extension(path).as_deref() {
            Some("json") => InputKind::Project,
            _ => InputKind::Markdown,
        }
    }
}

fn extension(path: &str) -> Option<String> {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

pub fn read_file(path: &str) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("Error reading file '{path}': {e}"))
}

pub fn load_project(path: &str) -> Result<ProjectFile, String> {
    let source = read_file(path)?;
    ProjectFile::from_json(&source).map_err(|e| format!("Invalid project file '{path}': {e}"))
}

/// The report to render: the markdown itself, or the saved report of a project.
pub fn load_report(path: &str, kind: InputKind) -> Result<Report, String> {
    match kind {
        InputKind::Markdown => Ok(Report::from_markdown(read_file(path)?)),
        InputKind::Project => {
            let project = load_project(path)?;
            project.data.report().ok_or_else(|| {
                format!("Project '{path}' has no generated report (reportMarkdown is missing)")
            })
        }
    }
}

/// Read a spreadsheet export, enforcing the upload size limit.
pub fn load_workbook(path: &str, max_bytes: u64) -> Result<Workbook, String> {
    let name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);

    let parse = match extension(path).as_deref() {
        Some("json") => Format::Json,
        Some("tsv") | Some("txt") => Format::Tsv,
        _ => {
            return Err(match UploadKind::detect(name, None) {
                UploadKind::Pdf => format!(
                    "'{name}' is a PDF; PDFs are extracted by the generative API, not locally"
                ),
                UploadKind::Spreadsheet => format!(
                    "'{name}' is an Excel workbook; save it as JSON or tab-separated text first"
                ),
                UploadKind::Unknown => format!(
                    "Unsupported upload '{name}': expected a workbook .json or a .tsv sheet"
                ),
            })
        }
    };

    let size = fs::metadata(path)
        .map_err(|e| format!("Error reading file '{path}': {e}"))?
        .len();
    check_upload(name, UploadKind::Spreadsheet, size, max_bytes).map_err(|e| e.to_string())?;

    let source = read_file(path)?;
    match parse {
        Format::Json => {
            Workbook::from_json(&source).map_err(|e| format!("Invalid workbook '{path}': {e}"))
        }
        Format::Tsv => {
            let sheet_name = Path::new(path)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Sheet1");
            Ok(Sheet::from_tsv(sheet_name, &source).into())
        }
    }
}

enum Format {
    Json,
    Tsv,
}
