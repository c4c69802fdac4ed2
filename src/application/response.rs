//! Review API response validation.

use serde_json::Value;

use crate::error::PollError;

/// Return the `homeworks` array of a response.
///
/// # Errors
///
/// - [`PollError::TypeMismatch`] if the response is not an object
/// - [`PollError::MissingKey`] if `homeworks` is absent
/// - [`PollError::TypeMismatch`] if `homeworks` is not an array
pub fn extract_homeworks(response: &Value) -> Result<&[Value], PollError> {
    let Some(object) = response.as_object() else {
        return Err(PollError::TypeMismatch {
            context: "response",
            expected: "object",
        });
    };
    let homeworks = object
        .get("homeworks")
        .ok_or(PollError::MissingKey { key: "homeworks" })?;
    homeworks
        .as_array()
        .map(Vec::as_slice)
        .ok_or(PollError::TypeMismatch {
            context: "homeworks",
            expected: "array",
        })
}

/// The response's `current_date`, if present and an integer.
#[must_use]
pub fn current_date(response: &Value) -> Option<i64> {
    response.get("current_date").and_then(Value::as_i64)
}
