//! Upstream store-locator access.

pub mod crv;
pub mod provider;
pub mod types;

#[cfg(test)]
pub mod mock_store;

pub use crv::CrvStoreClient;
pub use provider::StoreProvider;
pub use types::{Coordinate, FetchResult, StoreRecord};
