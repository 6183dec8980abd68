use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a turn in a mentor conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Persona,
}

/// One turn of a mentor conversation.
///
/// Turns are append-only within a session and the whole sequence is
/// discarded when the user switches personas; a turn is never mutated
/// after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub speaker: Speaker,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ConversationTurn {
    /// Create a turn spoken by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Create a turn spoken by the impersonated figure.
    pub fn persona(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Persona,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
