use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::StoreError;
use crate::services::provider::{ProviderResult, StoreProvider};
use crate::services::types::{Coordinate, FetchResult};

/// Production store-locator endpoint.
pub const DEFAULT_STORE_API_URL: &str =
    "https://app.crv.com.cn/app_api/v1/dc-app-api/mobile/api/store/selectByAddress";

/// Client for the `selectByAddress` store-locator endpoint.
#[derive(Clone)]
pub struct CrvStoreClient {
    endpoint: String,
    http: Client,
}

impl CrvStoreClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    /// Build the request URL with the coordinate JSON in the `param` query pair.
    pub fn request_url(&self, coordinate: &Coordinate) -> Result<Url, StoreError> {
        Url::parse_with_params(&self.endpoint, &[("param", coordinate.query_param())])
            .map_err(|err| StoreError::transport(format!("Invalid store API URL: {}", err)))
    }

    pub async fn fetch(&self, coordinate: &Coordinate) -> Result<FetchResult, StoreError> {
        let url = self.request_url(coordinate)?;

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Error pages may still carry the JSON envelope; its code wins.
        match serde_json::from_str::<FetchResult>(&body) {
            Ok(result) if status.is_success() => result.ensure_ok(),
            Ok(result) if result.code != 0 => Err(StoreError::Api { code: result.code }),
            Err(source) if status.is_success() => Err(StoreError::Decode { source }),
            _ => Err(StoreError::transport(format!(
                "Store API returned HTTP {}",
                status
            ))),
        }
    }
}

#[async_trait]
impl StoreProvider for CrvStoreClient {
    async fn fetch_stores(&self, coordinate: &Coordinate) -> ProviderResult<FetchResult> {
        self.fetch(coordinate).await
    }

    fn provider_name(&self) -> &str {
        "CRV"
    }
}
