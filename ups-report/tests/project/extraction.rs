use std::fs;
use tempfile::NamedTempFile;
use ups_report::extract::{scan_workbook, Sheet, Workbook};
use ups_report::ProjectData;

const GAP_ANALYSE: &str = r#"{
  "sheets": [
    {
      "name": "Gap-Analyse",
      "rows": [
        ["Projekt", "Scrap Line 4", ""],
        ["Abweichung", "", ""],
        ["Ausschuss an Maschine 17 über Ziel", "", ""],
        ["Warum 1", "Werkzeug verschlissen", ""],
        ["Warum 2", "Kein Wechselintervall", ""]
      ]
    },
    {
      "name": "Maßnahmen",
      "rows": [
        ["Aktionsplan", "", ""],
        ["Maßnahme", "Wechselintervall festlegen", ""],
        ["Maßnahme", "Wechselintervall festlegen", ""],
        ["Aktion", "Schulung Bediener", ""],
        ["SOP", "SOP-17 aktualisiert", ""]
      ]
    }
  ]
}"#;

#[test]
fn test_workbook_json_scan_fills_project() {
    let workbook = Workbook::from_json(GAP_ANALYSE).unwrap();
    let project = scan_workbook(&workbook).into_project();

    assert_eq!(project.project_title, "Scrap Line 4");
    assert_eq!(project.problem_statement, "Ausschuss an Maschine 17 über Ziel");
    assert_eq!(project.what, project.problem_statement);
    assert_eq!(project.why1, "Werkzeug verschlissen");
    assert_eq!(project.why2, "Kein Wechselintervall");
    assert_eq!(project.root_cause, "Werkzeug verschlissen");
    assert_eq!(project.standardization, "SOP-17 aktualisiert");
    let actions: Vec<&str> = project
        .countermeasures
        .iter()
        .map(|cm| cm.action.as_str())
        .collect();
    assert_eq!(actions, vec!["Wechselintervall festlegen", "Schulung Bediener"]);
}

#[test]
fn test_tsv_file_scan_merges_into_existing_project() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "Projekt\tNeuer Titel\nWhy 4\tSchicht wechselt\n").unwrap();
    let sheet = Sheet::from_tsv("export", &fs::read_to_string(file.path()).unwrap());

    let mut project = ProjectData {
        project_title: "Alt".into(),
        team_name: "Gruppe 3".into(),
        ..ProjectData::default()
    };
    project.apply_extracted(&scan_workbook(&sheet.into()));

    assert_eq!(project.project_title, "Neuer Titel");
    assert_eq!(project.team_name, "Gruppe 3");
    assert_eq!(project.why4, "Schicht wechselt");
    assert!(project.countermeasures.is_empty());
}
