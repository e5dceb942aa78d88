//! Chat delivery for status notifications.
//!
//! The poller only depends on the [`Notifier`] contract; [`TelegramNotifier`]
//! is the production implementation.

pub mod telegram;

use async_trait::async_trait;

use sentinel_common::error::DeliveryError;

pub use telegram::TelegramNotifier;

/// Delivers plain text to a single preconfigured chat target.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, text: &str) -> Result<(), DeliveryError>;
}
