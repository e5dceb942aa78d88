//! Response validator — checks the shape of a decoded review API payload.
//!
//! The remote side is loosely typed, so every step is checked explicitly
//! and a record is only returned when both fields are present. Updates are
//! returned newest-first; only the first element is inspected.

use serde_json::Value;

use sentinel_common::error::PollError;
use sentinel_common::types::AssignmentRecord;

/// Key holding the list of assignment updates.
pub const UPDATES_KEY: &str = "updates";
/// Assignment name field.
pub const NAME_KEY: &str = "name";
/// Assignment status field.
pub const STATUS_KEY: &str = "status";

/// Extract the most recent assignment record from `payload`.
pub fn validate(payload: &Value) -> Result<AssignmentRecord, PollError> {
    let object = payload
        .as_object()
        .ok_or_else(|| malformed(format!("expected an object, got {}", kind(payload))))?;

    let updates = object
        .get(UPDATES_KEY)
        .ok_or_else(|| malformed(format!("missing key \"{UPDATES_KEY}\"")))?
        .as_array()
        .ok_or_else(|| malformed(format!("\"{UPDATES_KEY}\" is not a list")))?;

    let Some(latest) = updates.first() else {
        return Err(PollError::NoPendingUpdates);
    };

    let latest = latest.as_object().ok_or_else(|| {
        malformed(format!(
            "first element of \"{UPDATES_KEY}\" is {}, expected an object",
            kind(latest)
        ))
    })?;

    let field = |key: &str| -> Result<String, PollError> {
        latest
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| malformed(format!("update is missing field \"{key}\"")))
    };

    Ok(AssignmentRecord {
        name: field(NAME_KEY)?,
        status: field(STATUS_KEY)?,
    })
}

fn malformed(detail: String) -> PollError {
    PollError::MalformedStructure(detail)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
