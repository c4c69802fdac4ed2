//! Homework status interpretation.

use serde_json::Value;

use crate::domain::{Homework, Verdict};
use crate::error::PollError;

/// Validate a raw homework record.
///
/// # Errors
///
/// - [`PollError::TypeMismatch`] if the record is not an object, or a field
///   is not a string
/// - [`PollError::MissingKey`] if `homework_name` or `status` is absent
/// - [`PollError::UnknownStatus`] if `status` is not a known verdict
pub fn parse_homework(record: &Value) -> Result<Homework, PollError> {
    let object = record.as_object().ok_or(PollError::TypeMismatch {
        context: "homework record",
        expected: "object",
    })?;

    let name = string_field(object, "homework_name")?;
    let status = string_field(object, "status")?;
    let verdict = Verdict::from_status(status).ok_or_else(|| PollError::UnknownStatus {
        status: status.to_owned(),
    })?;

    Ok(Homework::new(name, verdict))
}

/// Chat message for a raw homework record.
///
/// # Errors
///
/// Same as [`parse_homework`].
pub fn parse_status(record: &Value) -> Result<String, PollError> {
    parse_homework(record).map(|homework| homework.message())
}

fn string_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, PollError> {
    object
        .get(key)
        .ok_or(PollError::MissingKey { key })?
        .as_str()
        .ok_or(PollError::TypeMismatch {
            context: key,
            expected: "string",
        })
}
