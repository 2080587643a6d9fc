//! The prompt module turns a fetched page into the message sequence sent to
//! a chat-completion backend.

use serde::Serialize;

use crate::constants::{SYSTEM_PROMPT, USER_PROMPT_INSTRUCTION};
use crate::fetch::PageDocument;

/// Role tag of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged unit of conversational input for a chat-completion backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Builds the message sequence for one summarization request.
///
/// Always returns exactly two messages, in order [system, user]. Pure, no
/// failure modes. The page text is embedded verbatim with no truncation, so
/// very large pages are passed through to the backend as-is.
pub fn build_messages(document: &PageDocument) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(user_prompt(document)),
    ]
}

fn user_prompt(document: &PageDocument) -> String {
    let mut prompt = format!("You are looking at a website titled \"{}\".", document.title);
    prompt.push_str(USER_PROMPT_INSTRUCTION);
    prompt.push_str(&document.text);
    prompt
}
