use std::env;

use crate::alerts::bark::DEFAULT_BARK_SERVER_URL;
use crate::cli::Cli;
use crate::services::crv::DEFAULT_STORE_API_URL;
use crate::services::types::Coordinate;

/// Interval used when none is given or the given one is not positive.
pub const DEFAULT_POLL_INTERVAL_SECONDS: u64 = 60;

/// Process-wide configuration, built once at startup and never mutated.
#[derive(Clone, PartialEq)]
pub struct Config {
    pub coordinate: Coordinate,
    pub name_filter: Option<String>,
    pub bark_key: Option<String>,
    pub poll_interval_seconds: u64,
    pub store_api_url: String,
    pub bark_server_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("coordinate", &self.coordinate)
            .field("name_filter", &self.name_filter)
            .field("bark_key", &self.bark_key.as_ref().map(|_| "<redacted>"))
            .field("poll_interval_seconds", &self.poll_interval_seconds)
            .field("store_api_url", &self.store_api_url)
            .field("bark_server_url", &self.bark_server_url)
            .finish()
    }
}

impl Config {
    /// Merge CLI flags over process environment variables.
    pub fn load(cli: &Cli) -> Result<Self, String> {
        Self::from_sources(cli, |key| env::var(key).ok())
    }

    /// Merge CLI flags over values from `lookup`. A flag always wins over
    /// its environment fallback.
    pub fn from_sources<F>(cli: &Cli, lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |flag: &Option<String>, key: &str| {
            non_blank(flag.clone()).or_else(|| non_blank(lookup(key)))
        };
        // Patterns and keys are used verbatim; only an empty string is absent.
        let pick_verbatim = |flag: &Option<String>, key: &str| {
            non_empty(flag.clone()).or_else(|| non_empty(lookup(key)))
        };

        let longitude = pick(&cli.longitude, "STORE_LONGITUDE")
            .ok_or("Longitude is required (-l/--long or STORE_LONGITUDE)")?;
        let latitude = pick(&cli.latitude, "STORE_LATITUDE")
            .ok_or("Latitude is required (-t/--lat or STORE_LATITUDE)")?;

        let raw_interval = match cli.sleep {
            Some(seconds) => Some(seconds),
            None => match non_blank(lookup("POLL_INTERVAL_SECONDS")) {
                Some(value) => Some(
                    value
                        .trim()
                        .parse::<i64>()
                        .map_err(|_| "POLL_INTERVAL_SECONDS must be a valid number")?,
                ),
                None => None,
            },
        };

        Ok(Self {
            coordinate: Coordinate::new(longitude, latitude),
            name_filter: pick_verbatim(&cli.name, "STORE_NAME_FILTER"),
            bark_key: pick_verbatim(&cli.bark, "BARK_KEY"),
            poll_interval_seconds: effective_interval(raw_interval),
            store_api_url: non_blank(lookup("STORE_API_URL"))
                .unwrap_or_else(|| DEFAULT_STORE_API_URL.to_string()),
            bark_server_url: non_blank(lookup("BARK_SERVER_URL"))
                .unwrap_or_else(|| DEFAULT_BARK_SERVER_URL.to_string()),
        })
    }
}

/// Coerce a requested interval to a usable one: absent, zero, or negative
/// values become [`DEFAULT_POLL_INTERVAL_SECONDS`].
pub fn effective_interval(requested: Option<i64>) -> u64 {
    match requested {
        Some(seconds) if seconds > 0 => seconds as u64,
        _ => DEFAULT_POLL_INTERVAL_SECONDS,
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
