//! # Application Configuration
//!
//! Compile-time defaults from [`constants`](crate::utils::constants), overridable
//! per page load through the URL query string:
//!
//! | Parameter | Effect | Default |
//! |---|---|---|
//! | `eager` | Silent reconnect at startup for previously approved sites (`1`, `true`, `yes`, bare flag) | off |
//! | `log` | Console log level (`error`, `warn`, `info`, `debug`, `trace`) | `info` |
//!
//! Unrecognised values keep the default. The reasons are kept in
//! [`AppConfig::warnings`] so they can be logged once the logger is up.

use std::collections::HashMap;

use crate::utils::constants::{
    DEFAULT_LOG_LEVEL, INSTALL_URL, PROVIDER_KEY, QUERY_EAGER, QUERY_LOG,
};
use crate::utils::url::get_query_params;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Global the provider is looked up under
    pub provider_key: String,

    /// Where the install prompt links to
    pub install_url: String,

    /// Try a trusted (popup-free) reconnect on startup
    pub eager_connect: bool,

    pub log_level: log::Level,

    warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            provider_key: PROVIDER_KEY.to_string(),
            install_url: INSTALL_URL.to_string(),
            eager_connect: false,
            log_level: DEFAULT_LOG_LEVEL,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the current page URL.
    pub fn from_query() -> Self {
        Self::from_params(&get_query_params())
    }

    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = params.get(QUERY_EAGER) {
            match parse_flag(value) {
                Some(flag) => config.eager_connect = flag,
                None => config
                    .warnings
                    .push(format!("{}={} is not a flag, ignoring", QUERY_EAGER, value)),
            }
        }

        if let Some(value) = params.get(QUERY_LOG) {
            match value.parse::<log::Level>() {
                Ok(level) => config.log_level = level,
                Err(_) => config
                    .warnings
                    .push(format!("{}={} is not a log level, ignoring", QUERY_LOG, value)),
            }
        }

        config
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_params(&HashMap::new());
        assert_eq!(config.provider_key, "solana");
        assert_eq!(config.install_url, "https://phantom.app/");
        assert!(!config.eager_connect);
        assert_eq!(config.log_level, log::Level::Info);
        assert!(config.warnings().is_empty());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_params(&params(&[("eager", ""), ("log", "DEBUG")]));
        assert!(config.eager_connect);
        assert_eq!(config.log_level, log::Level::Debug);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_params(&params(&[("eager", "maybe"), ("log", "loud")]));
        assert!(!config.eager_connect);
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.warnings().len(), 2);
    }
}
