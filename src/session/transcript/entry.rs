//! Chat entry model for the session transcript.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::session::core::ids::EntryId;

/// Author of a chat entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Text typed by the user.
    User,
    /// Reply produced by the assistant (or its fallback).
    Assistant,
}

impl ChatRole {
    /// Stable string form, also used as the CSS class by renderers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            _ => Err(value.to_string()),
        }
    }
}

/// A single immutable transcript entry.
///
/// Fields are private; an entry can only be built by the transcript, which
/// keeps ids unique and ordered.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ChatEntry {
    id: EntryId,
    role: ChatRole,
    text: String,
    created_at: DateTime<Utc>,
}

impl ChatEntry {
    pub(crate) const fn new(
        id: EntryId,
        role: ChatRole,
        text: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            role,
            text,
            created_at,
        }
    }

    /// Entry identifier, increasing with insertion order.
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Author of the entry.
    #[must_use]
    pub const fn role(&self) -> ChatRole {
        self.role
    }

    /// Entry text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
