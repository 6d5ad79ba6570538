//! Loading `SimConfig` from disk.
//!
//! The file is JSON and only needs the fields it overrides. Its path comes
//! from `SPACEWAR_CONFIG`; without it the defaults are used.

use std::path::Path;

use tracing::{info, warn};

use spacewar_core::error::SimError;
use spacewar_sim::config::SimConfig;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SPACEWAR_CONFIG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid value: {0}")]
    Invalid(#[from] SimError),
}

/// Parse and validate a JSON config.
pub fn parse_config(json: &str) -> Result<SimConfig, ConfigError> {
    let config: SimConfig = serde_json::from_str(json)?;
    if let Err(err) = config.validate() {
        warn!(%err, "rejected configuration");
        return Err(err.into());
    }
    Ok(config)
}

pub fn load_config_file(path: &Path) -> Result<SimConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

/// Config from the file named by `SPACEWAR_CONFIG`, or the defaults.
pub fn load_config() -> Result<SimConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            info!(path = ?path, "loading configuration");
            load_config_file(Path::new(&path))
        }
        None => Ok(SimConfig::default()),
    }
}
