//! Process configuration from environment variables.
//!
//! The subscription key is required: without it every upstream call
//! would fail, so startup refuses to continue instead.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

/// Header carrying the Digitransit subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "digitransit-subscription-key";

const DEFAULT_ROUTING_URL: &str = "https://api.digitransit.fi/routing/v2/hsl/gtfs/v1";
const DEFAULT_GEOCODING_URL: &str = "https://api.digitransit.fi/geocoding/v1/search";

/// Configuration errors. All of them are fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing DIGITRANSIT_KEY: set it to your Digitransit subscription key")]
    MissingApiKey,

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Digitransit subscription key
    pub api_key: String,
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// GraphQL routing endpoint
    pub routing_url: String,
    /// Geocoding search endpoint
    pub geocoding_url: String,
    /// Timeout for each upstream request
    pub upstream_timeout: Duration,
    /// How long geocoding results are cached; zero disables the cache
    pub geocode_cache_ttl: Duration,
    /// Directory served under `/static`
    pub static_dir: String,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup` (for testing).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = get("DIGITRANSIT_KEY").ok_or(ConfigError::MissingApiKey)?;

        let host: IpAddr = parse_or(&get, "BIND_ADDR", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port: u16 = parse_or(&get, "PORT", 3000)?;
        let timeout_secs: u64 = parse_or(&get, "UPSTREAM_TIMEOUT_SECS", 10)?;
        let cache_secs: u64 = parse_or(&get, "GEOCODE_CACHE_TTL_SECS", 3600)?;

        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                var: "UPSTREAM_TIMEOUT_SECS",
                value: "0".to_string(),
            });
        }

        Ok(Self {
            api_key,
            bind_addr: SocketAddr::new(host, port),
            routing_url: get("DIGITRANSIT_ROUTING_URL")
                .unwrap_or_else(|| DEFAULT_ROUTING_URL.to_string()),
            geocoding_url: get("DIGITRANSIT_GEOCODING_URL")
                .unwrap_or_else(|| DEFAULT_GEOCODING_URL.to_string()),
            upstream_timeout: Duration::from_secs(timeout_secs),
            geocode_cache_ttl: Duration::from_secs(cache_secs),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".to_string()),
        })
    }
}

/// Parse `var` if set, else use `default`.
fn parse_or<T, G>(get: &G, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(value) => match value.trim().parse() {
            Ok(parsed) => Ok(parsed),
            Err(_) => Err(ConfigError::Invalid { var, value }),
        },
        None => Ok(default),
    }
}
