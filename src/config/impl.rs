use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to in-memory defaults when [`init_config`] has not run, so
/// library callers never have to initialize anything.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(StaticConfig::default()))
        .load_full()
}

/// Initialize the global configuration from `path` (TOML, optional) and
/// `IPI__*` environment variables.
///
/// Only the first initialization wins.
///
/// # Examples
/// ```no_run
/// use ipintel::config::init_config;
/// init_config("config.toml");
/// ```
pub fn init_config(path: &str) {
    CONFIG.get_or_init(|| ArcSwap::from_pointee(StaticConfig::load_from(path)));
}
