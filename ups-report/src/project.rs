//! Project data: everything the form wizard collects, and the JSON project file.
//!
//! Keys are camelCase and match the form field ids, so files saved by the web front end load
//! here unchanged and vice versa. Every field is optional on input.

use crate::error::ReportError;
use crate::report::Report;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// One row of the action plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Countermeasure {
    pub action: String,
    pub responsible: String,
    pub due_date: String,
    pub status: String,
}

/// An area the solution could be reapplied to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReapplicationArea {
    pub area: String,
    pub contact: String,
    pub status: String,
}

/// Form data of one A3 project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectData {
    pub project_title: String,
    pub team_name: String,
    pub business_impact: String,
    pub large_vague_problem: String,

    // 6W-2H
    pub what: String,
    #[serde(rename = "where")]
    pub location: String,
    pub when: String,
    pub who: String,
    pub which: String,
    pub how: String,
    pub how_much: String,
    pub problem_statement: String,

    // Ishikawa categories
    pub ishikawa_mensch: String,
    pub ishikawa_maschine: String,
    pub ishikawa_methode: String,
    pub ishikawa_material: String,
    pub ishikawa_umgebung: String,

    pub why1: String,
    pub why2: String,
    pub why3: String,
    pub why4: String,
    pub why5: String,
    pub root_cause: String,
    pub verification: String,

    pub validation: String,
    pub before_after: String,
    pub standardization: String,
    pub follow_up: String,

    pub countermeasures: Vec<Countermeasure>,
    pub reapplication_areas: Vec<ReapplicationArea>,

    /// Last generated (or chat-edited) report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_markdown: Option<String>,
}

impl ProjectData {
    /// The five whys in order.
    pub fn whys(&self) -> [&str; 5] {
        [
            &self.why1, &self.why2, &self.why3, &self.why4, &self.why5,
        ]
    }

    pub fn why_mut(&mut self, n: usize) -> Option<&mut String> {
        match n {
            1 => Some(&mut self.why1),
            2 => Some(&mut self.why2),
            3 => Some(&mut self.why3),
            4 => Some(&mut self.why4),
            5 => Some(&mut self.why5),
            _ => None,
        }
    }

    /// Generation needs at least a project title and a problem statement.
    pub fn ensure_ready_for_generation(&self) -> Result<(), ReportError> {
        if self.project_title.trim().is_empty() {
            return Err(ReportError::MissingField("projectTitle"));
        }
        if self.problem_statement.trim().is_empty() {
            return Err(ReportError::MissingField("problemStatement"));
        }
        Ok(())
    }

    /// Whether any reapplication area has been filled in.
    pub fn has_reapplication_areas(&self) -> bool {
        self.reapplication_areas
            .iter()
            .any(|area| !area.area.trim().is_empty())
    }

    /// The saved report, titled after the project.
    pub fn report(&self) -> Option<Report> {
        self.report_markdown
            .as_ref()
            .map(|markdown| Report::from_markdown(markdown.clone()).with_title(&self.project_title))
    }
}

/// A project as written to disk: the form data plus export metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    #[serde(flatten)]
    pub data: ProjectData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_version: Option<String>,
}

impl ProjectFile {
    /// Stamp project data for export.
    pub fn export(data: ProjectData, version: &str, now: DateTime<Utc>) -> Self {
        ProjectFile {
            data,
            export_timestamp: Some(now.to_rfc3339_opts(SecondsFormat::Millis, true)),
            export_version: Some(version.to_string()),
        }
    }

    /// Load a project file. Files without export metadata are accepted.
    pub fn from_json(source: &str) -> Result<Self, ReportError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Serialization(e.to_string()))
    }

    /// `UPS_Project_<title>_<epoch millis>.json`
    pub fn suggested_file_name(&self, now: DateTime<Utc>) -> String {
        let title = self.data.project_title.trim();
        let title = if title.is_empty() {
            "Untitled".to_string()
        } else {
            title.replace(['/', '\\'], "_")
        };
        format!("UPS_Project_{title}_{}.json", now.timestamp_millis())
    }
}
