use chrono::{TimeZone, Utc};
use std::fs;
use tempfile::TempDir;
use ups_report::{Countermeasure, ProjectData, ProjectFile, ReapplicationArea, ReportError};

fn sample() -> ProjectData {
    ProjectData {
        project_title: "Scrap Line 4".into(),
        team_name: "Gruppe 3".into(),
        location: "Linie 4, Maschine 17".into(),
        how_much: "4,2 %".into(),
        problem_statement: "Ausschuss an Maschine 17 über Ziel".into(),
        why1: "Werkzeug verschlissen".into(),
        countermeasures: vec![Countermeasure {
            action: "Wechselintervall festlegen".into(),
            responsible: "Herr Müller".into(),
            due_date: "2024-05-01".into(),
            status: "In Arbeit".into(),
        }],
        reapplication_areas: vec![ReapplicationArea {
            area: "Linie 5".into(),
            contact: "Frau Weber".into(),
            status: "Offen".into(),
        }],
        report_markdown: Some("# A3 Summary: Scrap Line 4".into()),
        ..ProjectData::default()
    }
}

#[test]
fn test_save_and_load_through_a_file() {
    let dir = TempDir::new().unwrap();
    let now = Utc.with_ymd_and_hms(2024, 4, 2, 8, 15, 30).unwrap();
    let file = ProjectFile::export(sample(), "UPS Finalizer v2.0", now);
    let path = dir.path().join(file.suggested_file_name(now));

    fs::write(&path, file.to_json_pretty().unwrap()).unwrap();
    let loaded = ProjectFile::from_json(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(loaded, file);
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "UPS_Project_Scrap Line 4_1712045730000.json"
    );
}

#[test]
fn test_file_uses_form_field_keys() {
    let now = Utc.with_ymd_and_hms(2024, 4, 2, 8, 15, 30).unwrap();
    let json = ProjectFile::export(sample(), "UPS Finalizer v2.0", now)
        .to_json_pretty()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["projectTitle"], "Scrap Line 4");
    assert_eq!(value["where"], "Linie 4, Maschine 17");
    assert_eq!(value["howMuch"], "4,2 %");
    assert_eq!(value["countermeasures"][0]["dueDate"], "2024-05-01");
    assert_eq!(value["reapplicationAreas"][0]["contact"], "Frau Weber");
    assert_eq!(value["exportTimestamp"], "2024-04-02T08:15:30.000Z");
    assert_eq!(value["reportMarkdown"], "# A3 Summary: Scrap Line 4");
}

#[test]
fn test_invalid_file_is_a_parse_error() {
    assert!(matches!(
        ProjectFile::from_json("{ not json"),
        Err(ReportError::Parse(_))
    ));
    assert!(matches!(
        ProjectFile::from_json(r#"{"countermeasures": "none"}"#),
        Err(ReportError::Parse(_))
    ));
}
