use thiserror::Error;

/// Failures of a single fetch → validate → map cycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PollError {
    #[error("review API is unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("review API returned a malformed response: {0}")]
    MalformedStructure(String),

    #[error("no status updates since the last poll")]
    NoPendingUpdates,

    #[error("unknown review status \"{0}\"")]
    UnknownStatus(String),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl PollError {
    /// Whether this failure should be announced to the chat target.
    /// An empty update window is expected and never reported.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, PollError::NoPendingUpdates)
    }

    /// Chat text for a reportable failure. This exact string is the
    /// deduplication key.
    pub fn announcement(&self) -> String {
        format!("Program failure: {self}")
    }
}

/// Chat delivery failed.
#[derive(Debug, Error)]
#[error("chat delivery failed: {0}")]
pub struct DeliveryError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pending_updates_is_not_reportable() {
        assert!(!PollError::NoPendingUpdates.is_reportable());
        assert!(PollError::UpstreamUnavailable("HTTP 503".into()).is_reportable());
        assert!(PollError::MalformedStructure("x".into()).is_reportable());
        assert!(PollError::UnknownStatus("x".into()).is_reportable());
        assert!(PollError::Unexpected("x".into()).is_reportable());
    }

    #[test]
    fn test_announcement_text() {
        let err = PollError::UnknownStatus("pending_review".into());
        assert_eq!(
            err.announcement(),
            "Program failure: unknown review status \"pending_review\""
        );
    }

    #[test]
    fn test_distinct_details_render_distinct_announcements() {
        let a = PollError::MalformedStructure("update is missing field \"name\"".into());
        let b = PollError::MalformedStructure("update is missing field \"status\"".into());
        assert_ne!(a.announcement(), b.announcement());
    }
}
