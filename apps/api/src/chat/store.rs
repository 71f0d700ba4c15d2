//! In-memory chat sessions.
//!
//! Session history lives only for the life of the process and is owned by
//! the host application state, never by the prompting core. Each turn is
//! sanitized again when it is rendered into a prompt, so model output
//! re-entering the context passes the same character gate as user input.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::prompting::sanitize::sanitize;

/// Only the most recent turns are rendered into the prompt.
pub const HISTORY_TURN_CAP: usize = 20;

/// Placeholder history for a session with no messages yet.
pub const EMPTY_HISTORY: &str = "(no prior messages)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub persona: String,
    pub created_at: DateTime<Utc>,
    pub turns: Vec<ChatTurn>,
}

impl ChatSession {
    /// Renders the transcript tail into the `{history}` placeholder format.
    pub fn render_history(&self) -> String {
        if self.turns.is_empty() {
            return EMPTY_HISTORY.to_string();
        }
        let start = self.turns.len().saturating_sub(HISTORY_TURN_CAP);
        self.turns[start..]
            .iter()
            .map(|turn| {
                let text = sanitize(&turn.text);
                match turn.role {
                    Role::User => format!("User: {text}"),
                    Role::Assistant => format!("Assistant: {text}"),
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Process-wide store of live chat sessions.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<Uuid, ChatSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, persona: String) -> ChatSession {
        let session = ChatSession {
            id: Uuid::new_v4(),
            persona,
            created_at: Utc::now(),
            turns: Vec::new(),
        };
        self.lock().insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: Uuid) -> Option<ChatSession> {
        self.lock().get(&id).cloned()
    }

    /// Appends a turn, returning the new transcript length, or `None` if the
    /// session does not exist.
    pub fn append(&self, id: Uuid, role: Role, text: String) -> Option<usize> {
        let mut sessions = self.lock();
        let session = sessions.get_mut(&id)?;
        session.turns.push(ChatTurn { role, text });
        Some(session.turns.len())
    }

    pub fn remove(&self, id: Uuid) -> bool {
        self.lock().remove(&id).is_some()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, ChatSession>> {
        self.inner.lock().expect("session store lock poisoned")
    }
}
