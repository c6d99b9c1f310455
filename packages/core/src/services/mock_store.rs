use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::services::provider::{ProviderResult, StoreProvider};
use crate::services::types::{Coordinate, FetchResult, StoreRecord};

/// In-memory `StoreProvider` for scheduler tests.
#[derive(Default)]
pub struct MockStoreClient {
    stores: Vec<StoreRecord>,
    error: Mutex<Option<StoreError>>,
    calls: AtomicUsize,
}

impl MockStoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores(mut self, stores: Vec<StoreRecord>) -> Self {
        self.stores = stores;
        self
    }

    /// Fail the next fetch with `error`; later fetches succeed again.
    pub fn with_error(self, error: StoreError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StoreProvider for MockStoreClient {
    async fn fetch_stores(&self, _coordinate: &Coordinate) -> ProviderResult<FetchResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(FetchResult::new(0, self.stores.clone()))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
