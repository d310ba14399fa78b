//! Turns a homework record into the chat message announcing its new status.

use crate::error::StatusError;
use crate::practicum::{HomeworkRecord, HomeworkStatus};

/// Builds the status-change message for `homework`.
pub fn parse_status(homework: &HomeworkRecord) -> Result<String, StatusError> {
    let name = homework
        .homework_name
        .as_deref()
        .ok_or(StatusError::MissingName)?;
    let raw = homework
        .status
        .as_deref()
        .ok_or(StatusError::MissingStatus)?;
    let status =
        HomeworkStatus::parse(raw).ok_or_else(|| StatusError::UnknownStatus(raw.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
