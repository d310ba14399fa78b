use serde_json::Value;

use crate::error::ResponseError;

/// Checks the shape of a homework-status body and returns its `homeworks` list.
///
/// Checks run in a fixed order: object first, then key presence, then list type.
pub fn check_response(response: &Value) -> Result<&Vec<Value>, ResponseError> {
    let object = response
        .as_object()
        .ok_or(ResponseError::MalformedResponse)?;
    let homeworks = object
        .get("homeworks")
        .ok_or(ResponseError::MissingHomeworks)?;
    homeworks
        .as_array()
        .ok_or(ResponseError::HomeworksNotSequence)
}

/// The server's `current_date`, if the body carries one as an integer.
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
