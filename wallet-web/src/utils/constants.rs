//! Application constants

/// Global the extension injects its provider under (`window.solana`)
pub const PROVIDER_KEY: &str = "solana";

pub const INSTALL_URL: &str = "https://phantom.app/";

// Query parameters read by `AppConfig::from_query`
pub const QUERY_EAGER: &str = "eager";
pub const QUERY_LOG: &str = "log";

pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Placeholder shown by the page shell until the WASM module mounts
pub const LOADING_ELEMENT_ID: &str = "app-loading";
