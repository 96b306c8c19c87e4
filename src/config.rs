use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub max_connections: u32,
    pub maps_api_base: String,
    pub maps_api_key: Option<String>,
    pub geocode_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://pinmap.db?mode=rwc".into(),
            max_connections: 5,
            maps_api_base: "maps.googleapis.com".into(),
            maps_api_key: None,
            geocode_timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    /// Reads `.env` if present, then the process environment. Unset
    /// variables fall back to the defaults.
    #[tracing::instrument(name = "Config::from_env")]
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            database_url: lookup("PINMAP_DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_or(
                lookup("PINMAP_DATABASE_MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            maps_api_base: lookup("GOOGLE_MAPS_API_BASE").unwrap_or(defaults.maps_api_base),
            maps_api_key: lookup("GOOGLE_MAPS_API_KEY").filter(|key| !key.is_empty()),
            geocode_timeout: Duration::from_secs(parse_or(
                lookup("PINMAP_GEOCODE_TIMEOUT_SECS"),
                defaults.geocode_timeout.as_secs(),
            )?),
        })
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> Result<T, Error> {
    match value {
        Some(raw) => raw.trim().parse().map_err(|_| {
            tracing::warn!(%raw, "malformed configuration value");
            invalid_input_error()
        }),
        None => Ok(default),
    }
}

#[test]
fn unset_environment_uses_defaults() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(config.database_url, "sqlite://pinmap.db?mode=rwc");
    assert_eq!(config.max_connections, 5);
    assert_eq!(config.maps_api_base, "maps.googleapis.com");
    assert!(config.maps_api_key.is_none());
    assert_eq!(config.geocode_timeout, Duration::from_secs(10));
}

#[test]
fn environment_overrides_defaults() {
    let config = Config::from_lookup(|key| match key {
        "PINMAP_DATABASE_URL" => Some("sqlite::memory:".into()),
        "PINMAP_DATABASE_MAX_CONNECTIONS" => Some("1".into()),
        "GOOGLE_MAPS_API_KEY" => Some("secret".into()),
        "PINMAP_GEOCODE_TIMEOUT_SECS" => Some(" 3 ".into()),
        _ => None,
    })
    .unwrap();

    assert_eq!(config.database_url, "sqlite::memory:");
    assert_eq!(config.max_connections, 1);
    assert_eq!(config.maps_api_key.as_deref(), Some("secret"));
    assert_eq!(config.geocode_timeout, Duration::from_secs(3));
}

#[test]
fn malformed_number_is_invalid_input() {
    let err = Config::from_lookup(|key| match key {
        "PINMAP_DATABASE_MAX_CONNECTIONS" => Some("many".into()),
        _ => None,
    })
    .unwrap_err();

    assert_eq!(err.code, 101);
}
