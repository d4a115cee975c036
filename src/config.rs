/*
 * Responsibility
 * - environment / configuration loading (PORT, STORE_URL, STORE_ANON_KEY)
 * - validation of what is required at startup
 *
 * The store section is deliberately optional: a process without it still
 * starts and serves, but every data operation reports the store as
 * unavailable. Missing PORT falls back to 3000.
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;

#[derive(Debug)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Connection target for the external store. Present only when both
/// STORE_URL and STORE_ANON_KEY are set.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub base_url: String,
    pub anon_key: String,
}

pub struct Config {
    pub addr: SocketAddr,
    pub store: Option<StoreConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let port: u16 = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let store = match (std::env::var("STORE_URL"), std::env::var("STORE_ANON_KEY")) {
            (Ok(base_url), Ok(anon_key)) if !base_url.is_empty() && !anon_key.is_empty() => {
                Some(StoreConfig {
                    base_url: base_url.trim_end_matches('/').to_string(),
                    anon_key,
                })
            }
            _ => None,
        };

        Ok(Self { addr, store })
    }
}
