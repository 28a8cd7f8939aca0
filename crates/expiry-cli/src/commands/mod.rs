//! CLI subcommands.

pub mod batch;
pub mod config;
pub mod extract;

use expiry_core::ExpiryConfig;

/// Load the effective configuration: an explicit path, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ExpiryConfig> {
    match config_path {
        Some(path) => Ok(ExpiryConfig::from_file(std::path::Path::new(path))?),
        None => Ok(ExpiryConfig::default()),
    }
}
