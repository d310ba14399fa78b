//! Homework records as reported by the Practicum API.
//!
//! The API body is kept as a raw [`serde_json::Value`] until it has been
//! validated, so a record is read field by field rather than derived with
//! serde. Missing or mistyped fields become `None` and are rejected later by
//! the status translator.

use std::fmt;

use serde_json::Value;

/// The review states the API is known to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Parses the raw `status` field. Unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Human-readable verdict sent to the chat.
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "approved"),
            Self::Reviewing => write!(f, "reviewing"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

/// One submission's review state, read from an element of `homeworks`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeworkRecord {
    pub homework_name: Option<String>,
    /// Raw status string; may be outside [`HomeworkStatus`].
    pub status: Option<String>,
}

impl HomeworkRecord {
    /// Reads a record from one element of the `homeworks` array.
    ///
    /// Non-object elements and non-string fields produce empty fields instead
    /// of an error.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_owned);
        Self {
            homework_name: field("homework_name"),
            status: field("status"),
        }
    }
}
