use sentinel_common::types::ReviewStatus;

/// Verdict text for each known review status.
pub fn verdict(status: ReviewStatus) -> &'static str {
    match status {
        ReviewStatus::Approved => "Review complete: the reviewer liked it. Success!",
        ReviewStatus::Reviewing => "The submission has been taken for review.",
        ReviewStatus::Rejected => "Review complete: the reviewer left some remarks.",
    }
}

/// Look up the verdict for a raw status code.
pub fn verdict_for_code(code: &str) -> Option<&'static str> {
    ReviewStatus::from_code(code).map(verdict)
}
