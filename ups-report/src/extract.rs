//! Document upload checks and spreadsheet auto-fill.
//!
//! PDFs go to the generative API (see [`crate::gemini::file_extraction_request`]). Spreadsheets
//! are scanned locally: every cell is matched against a few German/English keywords and the
//! value is taken from the cell to its right, or the cell below when that one is empty.
//!
//! Decoding `.xlsx` is left to the caller. A [`Workbook`] is plain rows of cell text, read
//! from JSON (`{"sheets": [{"name": ..., "rows": [[...]]}]}`) or from tab-separated text.

use crate::error::ReportError;
use crate::project::{Countermeasure, ProjectData, ReapplicationArea};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Upload size limit of the web front end.
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";
const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    Pdf,
    Spreadsheet,
    Unknown,
}

impl UploadKind {
    /// Classify by file extension or MIME type.
    pub fn detect(file_name: &str, mime: Option<&str>) -> Self {
        let name = file_name.to_lowercase();
        if name.ends_with(".pdf") || mime == Some(PDF_MIME) {
            UploadKind::Pdf
        } else if name.ends_with(".xlsx") || mime == Some(XLSX_MIME) {
            UploadKind::Spreadsheet
        } else {
            UploadKind::Unknown
        }
    }
}

/// Reject unknown file types and files over `max` bytes.
pub fn check_upload(
    file_name: &str,
    kind: UploadKind,
    size: u64,
    max: u64,
) -> Result<(), ReportError> {
    if kind == UploadKind::Unknown {
        return Err(ReportError::UnsupportedUpload(file_name.to_string()));
    }
    if size > max {
        return Err(ReportError::UploadTooLarge { size, max });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Sheet {
    /// One row per line, cells separated by tabs. A trailing `\r` is dropped.
    pub fn from_tsv(name: impl Into<String>, text: &str) -> Self {
        let rows = text
            .lines()
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect();
        Sheet {
            name: name.into(),
            rows,
        }
    }

    fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn from_json(source: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(source)?)
    }
}

impl From<Sheet> for Workbook {
    fn from(sheet: Sheet) -> Self {
        Workbook {
            sheets: vec![sheet],
        }
    }
}

/// What a spreadsheet scan found. Empty strings mean nothing was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedData {
    pub project_title: String,
    pub what: String,
    pub problem_statement: String,
    pub root_cause: String,
    pub whys: [String; 5],
    pub standardization: String,
    pub countermeasures: Vec<Countermeasure>,
    pub reapplication_areas: Vec<ReapplicationArea>,
}

impl ExtractedData {
    /// A fresh project holding only the extracted values.
    pub fn into_project(self) -> ProjectData {
        let [why1, why2, why3, why4, why5] = self.whys;
        ProjectData {
            project_title: self.project_title,
            what: self.what,
            problem_statement: self.problem_statement,
            root_cause: self.root_cause,
            why1,
            why2,
            why3,
            why4,
            why5,
            standardization: self.standardization,
            countermeasures: self.countermeasures,
            reapplication_areas: self.reapplication_areas,
            ..ProjectData::default()
        }
    }
}

impl ProjectData {
    /// Auto-fill from a scan. Only non-empty values overwrite; the lists are replaced only
    /// when the scan found entries.
    pub fn apply_extracted(&mut self, extracted: &ExtractedData) {
        fill(&mut self.project_title, &extracted.project_title);
        fill(&mut self.what, &extracted.what);
        fill(&mut self.problem_statement, &extracted.problem_statement);
        fill(&mut self.root_cause, &extracted.root_cause);
        for (n, why) in (1..=5).zip(extracted.whys.iter()) {
            if let Some(field) = self.why_mut(n) {
                fill(field, why);
            }
        }
        fill(&mut self.standardization, &extracted.standardization);
        if !extracted.countermeasures.is_empty() {
            self.countermeasures = extracted.countermeasures.clone();
        }
        if !extracted.reapplication_areas.is_empty() {
            self.reapplication_areas = extracted.reapplication_areas.clone();
        }
    }
}

fn fill(field: &mut String, value: &str) {
    if !value.is_empty() {
        *field = value.to_string();
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// `why N` / `warum N`, whitespace allowed before the digit.
fn is_why_label(text: &str) -> bool {
    ["why", "warum"].iter().any(|keyword| {
        text.match_indices(keyword).any(|(at, _)| {
            text[at + keyword.len()..]
                .trim_start()
                .starts_with(|c: char| ('1'..='5').contains(&c))
        })
    })
}

/// Number of the first 1-5 digit anywhere in the label.
fn why_number(text: &str) -> Option<usize> {
    text.chars()
        .find(|c| ('1'..='5').contains(c))
        .and_then(|c| c.to_digit(10))
        .map(|d| d as usize)
}

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Keyword scan over every cell of every sheet.
pub fn scan_workbook(workbook: &Workbook) -> ExtractedData {
    let mut found = ExtractedData::default();

    for sheet in &workbook.sheets {
        trace!(sheet = %sheet.name, rows = sheet.rows.len(), "scanning sheet");
        for (row, cells) in sheet.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    continue;
                }
                let label = cell.to_lowercase();
                let next = sheet.cell(row, col + 1);
                let below = sheet.cell(row + 1, col);
                let value = if next.is_empty() { below } else { next };

                if contains_any(&label, &["projekt", "title"]) {
                    found.project_title = value.to_string();
                }

                if contains_any(&label, &["abweichung", "problem"])
                    && !value.is_empty()
                    && found.problem_statement.is_empty()
                {
                    found.problem_statement = value.to_string();
                    found.what = value.to_string();
                }

                if contains_any(&label, &["ursache", "warum", "grundursache"])
                    && !value.is_empty()
                    && found.root_cause.is_empty()
                {
                    found.root_cause = value.to_string();
                }

                if is_why_label(&label) {
                    if let Some(n) = why_number(&label) {
                        found.whys[n - 1] = value.to_string();
                    }
                }

                if contains_any(&label, &["aktion", "maßnahme", "action"])
                    && !next.is_empty()
                    && !label.contains("plan")
                    && utf16_len(next) > 3
                {
                    found.countermeasures.push(Countermeasure {
                        action: next.to_string(),
                        status: "Offen".to_string(),
                        ..Countermeasure::default()
                    });
                }

                if contains_any(&label, &["standardis", "sop", "opl"])
                    && !next.is_empty()
                    && found.standardization.is_empty()
                {
                    found.standardization = next.to_string();
                }
            }
        }
    }

    let mut seen = HashSet::new();
    found
        .countermeasures
        .retain(|cm| !cm.action.is_empty() && seen.insert(cm.action.clone()));

    debug!(
        title = %found.project_title,
        countermeasures = found.countermeasures.len(),
        "spreadsheet scan finished"
    );
    found
}
