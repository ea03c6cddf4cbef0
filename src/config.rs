// src/config.rs
use crate::search::PageSize;
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "ESTATE_ADDR";
pub const DATA_DIR_VAR: &str = "ESTATE_DATA_DIR";
pub const WORKERS_VAR: &str = "ESTATE_WORKERS";
pub const PAGE_SIZE_VAR: &str = "ESTATE_PAGE_SIZE";

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid {}={:?}: {}", self.key, self.value, self.reason)
    }
}

impl Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Directory holding the JSON fixtures.
    pub data_dir: PathBuf,
    pub max_workers: usize,
    /// Listing page size for properties, agents and posts.
    pub page_size: PageSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            max_workers: 8,
            page_size: PageSize::DEFAULT,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Overlays any variables `lookup` returns on top of the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            cfg.addr = raw.parse().map_err(|e| invalid(ADDR_VAR, &raw, e))?;
        }
        if let Some(raw) = lookup(DATA_DIR_VAR) {
            cfg.data_dir = PathBuf::from(raw);
        }
        if let Some(raw) = lookup(WORKERS_VAR) {
            cfg.max_workers = match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                Ok(_) => return Err(invalid(WORKERS_VAR, &raw, "must be positive")),
                Err(e) => return Err(invalid(WORKERS_VAR, &raw, e)),
            };
        }
        if let Some(raw) = lookup(PAGE_SIZE_VAR) {
            let n = raw
                .parse::<usize>()
                .map_err(|e| invalid(PAGE_SIZE_VAR, &raw, e))?;
            cfg.page_size = PageSize::new(n).map_err(|e| invalid(PAGE_SIZE_VAR, &raw, e))?;
        }

        Ok(cfg)
    }
}

fn invalid(key: &'static str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.addr.port(), 3000);
        assert_eq!(cfg.page_size.get(), 12);
        assert_eq!(cfg.max_workers, 8);
    }

    #[test]
    fn variables_override_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (DATA_DIR_VAR, "/srv/fixtures"),
            (PAGE_SIZE_VAR, "6"),
        ]))
        .unwrap();

        assert_eq!(cfg.addr.port(), 8080);
        assert_eq!(cfg.data_dir, PathBuf::from("/srv/fixtures"));
        assert_eq!(cfg.page_size.get(), 6);
    }

    #[test]
    fn zero_page_size_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup(&[(PAGE_SIZE_VAR, "0")])).unwrap_err();
        assert_eq!(err.key, PAGE_SIZE_VAR);
    }

    #[test]
    fn zero_workers_is_a_config_error() {
        let err = AppConfig::from_lookup(lookup(&[(WORKERS_VAR, "0")])).unwrap_err();
        assert_eq!(err.key, WORKERS_VAR);
    }
}
