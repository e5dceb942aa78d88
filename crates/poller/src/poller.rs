use std::time::Duration;

use chrono::Utc;

use sentinel_common::error::PollError;
use sentinel_engine::dedup::AnnouncedErrorSet;
use sentinel_engine::mapper::map_status;
use sentinel_engine::validator::validate;
use sentinel_notifier::Notifier;

use crate::source::StatusSource;

/// Result of a single polling iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationOutcome {
    /// A status change was delivered to the chat.
    Delivered(String),
    /// The window contained no updates.
    NoUpdates,
    /// A failure was announced to the chat for the first time.
    ErrorAnnounced(String),
    /// A failure repeated an already announced message and was only logged.
    ErrorSuppressed(String),
    /// Sending the text to the chat failed.
    DeliveryFailed(String),
}

/// Review status poller.
///
/// Owns the time cursor and the set of announced error texts. Each
/// iteration fetches the window since the cursor, validates and maps the
/// newest update, notifies, then advances the cursor regardless of outcome.
pub struct Poller<S, N> {
    source: S,
    notifier: N,
    interval: Duration,
    cursor: i64,
    announced: AnnouncedErrorSet,
}

impl<S: StatusSource, N: Notifier> Poller<S, N> {
    pub fn new(source: S, notifier: N, interval: Duration) -> Self {
        Self {
            source,
            notifier,
            interval,
            cursor: Utc::now().timestamp(),
            announced: AnnouncedErrorSet::new(),
        }
    }

    /// Start the first window at `cursor` instead of now.
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    pub fn announced_count(&self) -> usize {
        self.announced.len()
    }

    /// Run the polling loop. Never returns; stop it by dropping the future.
    pub async fn run(&mut self) {
        tracing::info!(
            cursor = self.cursor,
            poll_interval_secs = self.interval.as_secs(),
            "Review poller started"
        );

        loop {
            self.poll_once().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// One fetch → validate → map → notify cycle, followed by a cursor
    /// advance. Never fails; every error is handled here.
    pub async fn poll_once(&mut self) -> IterationOutcome {
        let outcome = match self.check_for_update().await {
            Ok(text) => self.deliver(text).await,
            Err(PollError::NoPendingUpdates) => {
                tracing::debug!(cursor = self.cursor, "No status updates in this window");
                IterationOutcome::NoUpdates
            }
            Err(err) => self.report(err).await,
        };

        // Failed windows are not retried: the next fetch starts from now.
        self.advance_cursor();
        outcome
    }

    async fn check_for_update(&self) -> Result<String, PollError> {
        let payload = self.source.fetch(self.cursor).await?;
        tracing::debug!(cursor = self.cursor, %payload, "Received review API response");

        let record = validate(&payload)?;
        map_status(&record)
    }

    async fn deliver(&self, text: String) -> IterationOutcome {
        match self.notifier.send(&text).await {
            Ok(()) => {
                tracing::info!(message = %text, "Status change sent to chat");
                IterationOutcome::Delivered(text)
            }
            Err(e) => {
                tracing::error!(error = %e, message = %text, "Failed to send status change");
                IterationOutcome::DeliveryFailed(text)
            }
        }
    }

    async fn report(&mut self, err: PollError) -> IterationOutcome {
        let message = err.announcement();
        tracing::error!(error = %err, "Polling iteration failed");

        if !self.announced.should_announce(&message) {
            tracing::warn!(message = %message, "Error already announced, not sending again");
            return IterationOutcome::ErrorSuppressed(message);
        }

        match self.notifier.send(&message).await {
            Ok(()) => {
                self.announced.record(&message);
                IterationOutcome::ErrorAnnounced(message)
            }
            Err(e) => {
                // Not recorded: the next occurrence may try again.
                tracing::error!(error = %e, message = %message, "Failed to announce error");
                IterationOutcome::DeliveryFailed(message)
            }
        }
    }

    fn advance_cursor(&mut self) {
        self.cursor = self.cursor.max(Utc::now().timestamp());
    }
}
