use std::sync::Arc;

use clap::Parser;
use dotenvy::dotenv;

use vanguard_store::alerts::{BarkNotifier, Notifier};
use vanguard_store::cli::Cli;
use vanguard_store::config::Config;
use vanguard_store::error::AppError;
use vanguard_store::logging::init_logging;
use vanguard_store::scheduler::run_store_polling;
use vanguard_store::services::{CrvStoreClient, StoreProvider};

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    let config = Config::load(&cli)
        .map_err(AppError::Config)
        .unwrap_or_else(|err| {
            tracing::error!("{}", err);
            std::process::exit(1);
        });

    tracing::info!("Service started with config: {:?}", config);

    let provider: Arc<dyn StoreProvider + Send + Sync> =
        Arc::new(CrvStoreClient::new(config.store_api_url.clone()));

    let notifier: Option<Arc<dyn Notifier + Send + Sync>> = match config.bark_key.clone() {
        Some(key) => match BarkNotifier::new(config.bark_server_url.clone(), key) {
            Ok(bark) => Some(Arc::new(bark)),
            Err(err) => {
                tracing::warn!("Bark notifications disabled: {}", err);
                None
            }
        },
        None => None,
    };

    run_store_polling(provider, notifier, config).await;
}
