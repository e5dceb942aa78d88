//! Turns a validated assignment record into chat text.

use sentinel_common::error::PollError;
use sentinel_common::types::AssignmentRecord;

use crate::catalog;

/// Render the status-change notification for `record`.
///
/// Fails with [`PollError::UnknownStatus`] if the status code is not in the
/// catalog.
pub fn map_status(record: &AssignmentRecord) -> Result<String, PollError> {
    let verdict = catalog::verdict_for_code(&record.status)
        .ok_or_else(|| PollError::UnknownStatus(record.status.clone()))?;

    Ok(format!(
        "Status changed for submission \"{}\". {}",
        record.name, verdict
    ))
}
