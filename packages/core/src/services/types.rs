//! Core data types for the store locator

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::StoreError;

/// Longitude/latitude pair sent to the locator, kept as the strings the user
/// supplied. No numeric validation happens here; the upstream API rejects
/// malformed values with a non-zero status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coordinate {
    pub longitude: String,
    pub latitude: String,
}

impl Coordinate {
    pub fn new(longitude: impl Into<String>, latitude: impl Into<String>) -> Self {
        Self {
            longitude: longitude.into(),
            latitude: latitude.into(),
        }
    }

    /// JSON object carried in the `param` query parameter.
    pub fn query_param(&self) -> String {
        format!(
            r#"{{"longitude":{},"latitude":{}}}"#,
            Value::from(self.longitude.as_str()),
            Value::from(self.latitude.as_str()),
        )
    }
}

/// A single store entry as returned by the locator.
///
/// Fields are pass-through data: a missing or `null` field decodes as its
/// zero value rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreRecord {
    #[serde(rename = "areaCode", deserialize_with = "null_as_default")]
    pub area_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub buid: i64,
    #[serde(rename = "cityId", deserialize_with = "null_as_default")]
    pub city_id: i64,
    #[serde(rename = "cityName", deserialize_with = "null_as_default")]
    pub city_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hq_id: String,
    #[serde(rename = "retailFormatId", deserialize_with = "null_as_default")]
    pub retail_format_id: String,
    #[serde(rename = "storeId", deserialize_with = "null_as_default")]
    pub store_id: i64,
    #[serde(rename = "storeName", deserialize_with = "null_as_default")]
    pub store_name: String,
    #[serde(rename = "storesAddress", deserialize_with = "null_as_default")]
    pub stores_address: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decoded locator envelope: a status code plus the store list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FetchResult {
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    data: StoreData,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct StoreData {
    #[serde(default, deserialize_with = "null_as_default")]
    stores: Vec<StoreRecord>,
}

impl FetchResult {
    pub fn new(code: i64, stores: Vec<StoreRecord>) -> Self {
        Self {
            code,
            data: StoreData { stores },
        }
    }

    pub fn stores(&self) -> &[StoreRecord] {
        &self.data.stores
    }

    pub fn into_stores(self) -> Vec<StoreRecord> {
        self.data.stores
    }

    /// A non-zero code is an API error even when stores are present.
    pub fn ensure_ok(self) -> Result<Self, StoreError> {
        if self.code != 0 {
            return Err(StoreError::Api { code: self.code });
        }
        Ok(self)
    }
}
