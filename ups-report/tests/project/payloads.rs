use ups_report::chat::ChatSession;
use ups_report::gemini::{
    chat_request, generate_request, parse_extracted_project, parse_generate_response,
    GenerationSettings,
};
use ups_report::prompt::build_generation_prompt;
use ups_report::{render, ProjectData};

#[test]
fn test_generation_round_trip_through_payloads() {
    let data = ProjectData {
        project_title: "Scrap".into(),
        problem_statement: "Zu viel Ausschuss".into(),
        ..ProjectData::default()
    };
    data.ensure_ready_for_generation().unwrap();

    let prompt = build_generation_prompt(&data);
    let request = generate_request(&prompt, &GenerationSettings::generation());
    assert_eq!(request["contents"][0]["parts"][0]["text"], prompt.as_str());

    let response = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "# A3 Summary: Scrap\n\n* **Was:** Ausschuss" }] } }]
    })
    .to_string();
    let markdown = parse_generate_response(&response).unwrap();
    assert_eq!(
        render(&markdown),
        "<p><h1>A3 Summary: Scrap</h1></p><p><ul><li><strong>Was:</strong> Ausschuss</li></ul>\n</p>"
    );
}

#[test]
fn test_chat_refinement_request_follows_history() {
    let mut session = ChatSession::new("# A3 Summary: Scrap");
    session.push_user("Mache das Problem Statement prägnanter");
    session.push_assistant("## 1. Problem Statement\n> Ausschuss 4,2 %");
    session.update_context("# A3 Summary: Scrap (v2)");
    session.push_user("Danke");

    let request = chat_request(&session, &GenerationSettings::chat());
    let contents = request["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[2]["parts"][0]["text"], "Danke");
    let system = request["systemInstruction"]["parts"][0]["text"].as_str().unwrap();
    assert!(system.contains("(v2)"));
}

#[test]
fn test_model_extraction_answer_becomes_project() {
    let answer = "Hier die Daten:\n```json\n{\"projectTitle\": \"Scrap\", \"why1\": \"Werkzeug\", \"reapplicationAreas\": []}\n```";
    let data = parse_extracted_project(answer).unwrap();
    assert_eq!(data.project_title, "Scrap");
    assert_eq!(data.why1, "Werkzeug");
}
