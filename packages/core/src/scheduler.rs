//! Store polling scheduler.
//!
//! Drives the main polling loop: each tick fetches the stores near the
//! configured position, narrows them with the name filter, logs the result,
//! and pushes a notification when a filter is set and something matched.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::time::{self, MissedTickBehavior};

use crate::alerts::Notifier;
use crate::config::Config;
use crate::filter::filter_stores;
use crate::services::provider::StoreProvider;
use crate::services::types::StoreRecord;

/// Title of the push sent when the filter matched.
pub const MATCH_TITLE: &str = "找到门店";

/// What a single poll cycle did.
#[derive(Debug, Clone, PartialEq)]
pub enum PollOutcome {
    /// The fetch failed; nothing was reported this cycle.
    FetchFailed,
    /// A filter was set and nothing matched it.
    NoMatches,
    /// The store list could not be encoded for logging.
    SerializeFailed,
    /// Stores were logged. `notified` is true only when a push went out.
    Reported {
        stores: Vec<StoreRecord>,
        notified: bool,
    },
}

/// Run the store polling loop.
///
/// The first cycle starts immediately, then one cycle per
/// `config.poll_interval_seconds`. Cycles never overlap. Errors are logged
/// and the loop continues.
///
/// Runs until `Ctrl+C` (SIGINT) is received.
pub async fn run_store_polling(
    provider: Arc<dyn StoreProvider + Send + Sync>,
    notifier: Option<Arc<dyn Notifier + Send + Sync>>,
    config: Config,
) {
    let shutdown = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!("Unable to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    poll_until(provider, notifier, config, shutdown).await;
}

/// Run the polling loop until `shutdown` resolves.
pub async fn poll_until<S>(
    provider: Arc<dyn StoreProvider + Send + Sync>,
    notifier: Option<Arc<dyn Notifier + Send + Sync>>,
    config: Config,
    shutdown: S,
) where
    S: Future<Output = ()>,
{
    let mut interval = time::interval(Duration::from_secs(config.poll_interval_seconds));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    tokio::pin!(shutdown);

    tracing::info!(
        "Store polling started via {} (interval: {}s)",
        provider.provider_name(),
        config.poll_interval_seconds
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let outcome = poll_once(provider.as_ref(), notifier.as_deref(), &config).await;
                tracing::debug!(?outcome, "Poll cycle finished");
            }

            _ = &mut shutdown => {
                tracing::info!("Shutdown signal received. Stopping polling.");
                break;
            }
        }
    }

    tracing::info!("Store polling stopped cleanly");
}

/// Execute a single poll cycle. Extracted for testability.
pub async fn poll_once(
    provider: &(dyn StoreProvider + Send + Sync),
    notifier: Option<&(dyn Notifier + Send + Sync)>,
    config: &Config,
) -> PollOutcome {
    let stores = match provider.fetch_stores(&config.coordinate).await {
        Ok(result) => result.into_stores(),
        Err(err) => {
            tracing::warn!("Get stores failure: {}", err);
            return PollOutcome::FetchFailed;
        }
    };

    match config.name_filter.as_deref() {
        Some(pattern) => report_matches(filter_stores(&stores, Some(pattern)), notifier).await,
        None => report_all(stores),
    }
}

async fn report_matches(
    matched: Vec<StoreRecord>,
    notifier: Option<&(dyn Notifier + Send + Sync)>,
) -> PollOutcome {
    if matched.is_empty() {
        tracing::warn!("筛选结果为空");
        return PollOutcome::NoMatches;
    }

    let body = match serde_json::to_string(&matched) {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("Marshal filter stores failure: {}", err);
            return PollOutcome::SerializeFailed;
        }
    };

    tracing::info!("筛选结果:{}", body);

    let notified = match notifier {
        Some(notifier) => match notifier.send(MATCH_TITLE, &body).await {
            Ok(()) => true,
            Err(err) => {
                tracing::error!("{} notification failed: {}", notifier.notifier_name(), err);
                false
            }
        },
        None => false,
    };

    PollOutcome::Reported {
        stores: matched,
        notified,
    }
}

// Unfiltered results are only logged; pushes are tied to filter matches.
fn report_all(stores: Vec<StoreRecord>) -> PollOutcome {
    match serde_json::to_string(&stores) {
        Ok(body) => {
            tracing::info!("{}", body);
            PollOutcome::Reported {
                stores,
                notified: false,
            }
        }
        Err(err) => {
            tracing::warn!("Marshal stores failure: {}", err);
            PollOutcome::SerializeFailed
        }
    }
}
