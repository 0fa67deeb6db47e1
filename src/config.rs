use std::{env, str::FromStr, time::Duration};

use crate::{
    errors::CustomError,
    services::{balance_store::DEFAULT_MAX_ACCOUNTS, network_config::DEFAULT_CHAIN_ID},
};

const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:8080", "http://localhost:5173"];

pub struct Config {
    pub host: String,
    pub port: u16,
    pub chain_id: u64,
    /// Overrides the explorer API of the selected network.
    pub explorer_api_url: Option<String>,
    pub request_timeout: Duration,
    pub allowed_origins: Vec<String>,
    /// Upper bound on accounts whose balances are kept in memory.
    pub max_cached_accounts: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let allowed_origins = match lookup("ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        let max_cached_accounts = parse_var(&lookup, "MAX_CACHED_ACCOUNTS", DEFAULT_MAX_ACCOUNTS)?;
        if max_cached_accounts == 0 {
            return Err(CustomError::ConfigError(
                "MAX_CACHED_ACCOUNTS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_var(&lookup, "PORT", 8080)?,
            chain_id: parse_var(&lookup, "CHAIN_ID", DEFAULT_CHAIN_ID)?,
            explorer_api_url: lookup("EXPLORER_API_URL").filter(|url| !url.trim().is_empty()),
            request_timeout: Duration::from_secs(parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 10)?),
            allowed_origins,
            max_cached_accounts,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T, CustomError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CustomError::ConfigError(format!("Failed to parse {}: {:?}", key, raw))),
        None => Ok(default),
    }
}
