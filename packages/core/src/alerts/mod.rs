//! Push-notification delivery for store matches.

use async_trait::async_trait;

use crate::error::NotifyError;

pub mod bark;

pub use bark::BarkNotifier;

/// A best-effort push channel.
#[async_trait]
pub trait Notifier {
    async fn send(&self, title: &str, body: &str) -> Result<(), NotifyError>;

    fn notifier_name(&self) -> &str;
}
