use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use super::StaticConfig;
use crate::errors::Result;

static CONFIG: OnceLock<ArcSwap<StaticConfig>> = OnceLock::new();

/// Get the global configuration instance
///
/// Falls back to loading from the default location if `init_config` was
/// never called.
pub fn get_config() -> Arc<StaticConfig> {
    CONFIG
        .get_or_init(|| ArcSwap::from_pointee(load_or_default(None)))
        .load_full()
}

/// Initialize the global configuration
///
/// Loads `path` (or "config.toml" in the current directory) plus `DP__*`
/// environment overrides. An explicit `path` that is missing or broken is an
/// error; a broken default file is reported and replaced by defaults.
/// Calling it again replaces the stored configuration.
pub fn init_config(path: Option<&str>) -> Result<Arc<StaticConfig>> {
    let config = match path {
        Some(_) => StaticConfig::load(path)?,
        None => load_or_default(None),
    };
    let config = Arc::new(config);
    match CONFIG.get() {
        Some(current) => current.store(config.clone()),
        None => {
            let _ = CONFIG.set(ArcSwap::new(config.clone()));
        }
    }
    Ok(get_config())
}

fn load_or_default(path: Option<&str>) -> StaticConfig {
    StaticConfig::load(path).unwrap_or_else(|e| {
        // logging is not installed yet at this point
        eprintln!("[WARN] {}, using defaults", e);
        StaticConfig::default()
    })
}
