//! Store Provider Interface
//!
//! Abstraction over the store-locator data source so the poll loop can be
//! driven by the real API or a test double.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::services::types::{Coordinate, FetchResult};

/// Trait for store-locator backends
#[async_trait]
pub trait StoreProvider {
    /// Fetch the stores near `coordinate`. A result is only returned when the
    /// upstream status code is zero.
    async fn fetch_stores(&self, coordinate: &Coordinate) -> ProviderResult<FetchResult>;

    /// Get the name of this provider for logging/debugging
    fn provider_name(&self) -> &str;
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, StoreError>;
