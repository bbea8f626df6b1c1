//! Request and response payloads for the generateContent API.
//!
//! No I/O happens here: builders return the URL and the JSON body, parsers take the response
//! body as text. Whoever owns the HTTP client (the web front end, a script around the CLI)
//! does the sending.

use crate::chat::{ChatSession, Role};
use crate::error::ReportError;
use crate::project::ProjectData;
use crate::prompt::EXTRACTION_PROMPT;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Value};
use tracing::{debug, trace};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

static JSON_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```json\n?([\s\S]*?)\n?```").expect("valid regex"));

/// Model and sampling settings for one kind of request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl GenerationSettings {
    /// Report generation.
    pub fn generation() -> Self {
        GenerationSettings {
            model: "gemini-pro".to_string(),
            temperature: 0.4,
            max_output_tokens: 2048,
        }
    }

    /// Chat refinement.
    pub fn chat() -> Self {
        GenerationSettings {
            temperature: 0.7,
            ..Self::generation()
        }
    }

    /// Document extraction, kept close to deterministic.
    pub fn extraction() -> Self {
        GenerationSettings {
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.1,
            max_output_tokens: 2048,
        }
    }

    fn generation_config(&self) -> Value {
        json!({
            "temperature": self.temperature,
            "maxOutputTokens": self.max_output_tokens,
        })
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self::generation()
    }
}

fn endpoint_url(endpoint: &str, path: &str, api_key: &str) -> Result<Url, ReportError> {
    let raw = format!("{}/{}", endpoint.trim_end_matches('/'), path);
    let mut url = Url::parse(&raw)
        .map_err(|e| ReportError::Parse(format!("Invalid API endpoint '{endpoint}': {e}")))?;
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url)
}

/// `<endpoint>/models/<model>:generateContent?key=<api_key>`
pub fn generate_content_url(endpoint: &str, model: &str, api_key: &str) -> Result<Url, ReportError> {
    endpoint_url(endpoint, &format!("models/{model}:generateContent"), api_key)
}

/// Model listing, used to check an API key before saving it.
pub fn models_url(endpoint: &str, api_key: &str) -> Result<Url, ReportError> {
    endpoint_url(endpoint, "models", api_key)
}

/// Single-turn request for a prompt.
pub fn generate_request(prompt: &str, settings: &GenerationSettings) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "generationConfig": settings.generation_config(),
    })
}

/// Multi-turn request for a chat session; the system prompt goes in `systemInstruction`.
pub fn chat_request(session: &ChatSession, settings: &GenerationSettings) -> Value {
    let contents: Vec<Value> = session
        .history()
        .map(|message| {
            let role = match message.role {
                Role::User => "user",
                _ => "model",
            };
            json!({
                "role": role,
                "parts": [{ "text": message.content }]
            })
        })
        .collect();

    let mut request = json!({
        "contents": contents,
        "generationConfig": settings.generation_config(),
    });
    if let Some(system) = session.system_prompt() {
        request["systemInstruction"] = json!({
            "parts": [{ "text": system }]
        });
    }
    request
}

/// Extraction request for a document already uploaded to the file API.
pub fn file_extraction_request(
    mime_type: &str,
    file_uri: &str,
    settings: &GenerationSettings,
) -> Value {
    json!({
        "contents": [{
            "parts": [
                { "fileData": { "mimeType": mime_type, "fileUri": file_uri } },
                { "text": EXTRACTION_PROMPT }
            ]
        }],
        "generationConfig": settings.generation_config(),
    })
}

/// Text of the first candidate of a generateContent response.
pub fn parse_generate_response(body: &str) -> Result<String, ReportError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ReportError::InvalidResponse(format!("response is not JSON: {e}")))?;

    if let Some(error) = value.get("error") {
        let message = error
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("API request failed");
        return Err(ReportError::Api(message.to_string()));
    }

    match value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
    {
        Some(text) if !text.is_empty() => {
            trace!(chars = text.chars().count(), "candidate text");
            Ok(text.to_string())
        }
        _ => Err(ReportError::InvalidResponse(
            "no candidate text in response".to_string(),
        )),
    }
}

/// Contents of the first ```` ```json ```` fence, or the whole text when there is none.
pub fn extract_json_block(text: &str) -> &str {
    JSON_FENCE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map_or(text, |m| m.as_str())
}

/// Project data from the model's answer to [`EXTRACTION_PROMPT`].
///
/// `null` values are treated like missing keys.
pub fn parse_extracted_project(text: &str) -> Result<ProjectData, ReportError> {
    let mut value: Value = serde_json::from_str(extract_json_block(text))
        .map_err(|e| ReportError::Parse(format!("could not read extracted data: {e}")))?;
    drop_nulls(&mut value);
    let data: ProjectData = serde_json::from_value(value)
        .map_err(|e| ReportError::Parse(format!("could not read extracted data: {e}")))?;
    debug!(
        title = %data.project_title,
        countermeasures = data.countermeasures.len(),
        "parsed extracted project"
    );
    Ok(data)
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(drop_nulls),
        _ => {}
    }
}
