//! Chat refinement of a generated report.
//!
//! A [`ChatSession`] keeps the report being discussed and the message history. The first
//! message is always the system prompt, rebuilt whenever the report changes; it is sent as
//! the API's system instruction rather than as a turn (see [`crate::gemini::chat_request`]).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        ChatMessage {
            role,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    context: String,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a session about `context`, the current report markdown.
    pub fn new(context: impl Into<String>) -> Self {
        let context = context.into();
        let system = ChatMessage::new(Role::System, system_prompt(&context));
        ChatSession {
            context,
            messages: vec![system],
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::User, content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::new(Role::Assistant, content));
    }

    /// Swap in an edited report. History is kept.
    pub fn update_context(&mut self, context: impl Into<String>) {
        self.context = context.into();
        let prompt = system_prompt(&self.context);
        match self.messages.first_mut() {
            Some(first) if first.role == Role::System => first.content = prompt,
            _ => self.messages.insert(0, ChatMessage::new(Role::System, prompt)),
        }
    }

    /// Drop the history, keeping a fresh system message for the current context.
    pub fn clear(&mut self) {
        self.messages = vec![ChatMessage::new(Role::System, system_prompt(&self.context))];
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
    }

    /// Messages without the system prompt.
    pub fn history(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().filter(|m| m.role != Role::System)
    }
}

fn system_prompt(context: &str) -> String {
    format!(
        "Du bist ein Assistent für die Bearbeitung von A3 Summaries im UPS Framework.
Der User hat folgendes A3 Summary generiert:

{context}

Deine Aufgaben:
1. Hilf dem User, dieses Summary zu verbessern
2. Bei Änderungswünschen: Gib den VOLLSTÄNDIGEN neuen Abschnitt zurück
3. Sei präzise und professionell
4. Halte dich an Lean Management Standards

Der User kann Anfragen stellen wie:
- \"Mache das Problem Statement prägnanter\"
- \"Ändere den Verantwortlichen bei Maßnahme 1 auf Herr Müller\"
- \"Füge eine weitere Reapplication Area hinzu\"

Antworte immer mit dem vollständigen Markdown-Text der geänderten Sektion."
    )
}
