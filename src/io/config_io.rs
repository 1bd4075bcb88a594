use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::state::config::PageConfig;

/// Environment variable naming the JSON config file to load at startup.
pub const CONFIG_ENV: &str = "GRIDPAGE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid size must be positive, got {width}x{height}")]
    InvalidGridSize { width: u32, height: u32 },
}

pub fn parse_config(source: &str) -> Result<PageConfig, ConfigError> {
    let config: PageConfig = serde_json::from_str(source)?;
    validate(&config)?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Loads the file named by [`CONFIG_ENV`], falling back to defaults when the
/// variable is unset or the file cannot be used.
pub fn load_from_env() -> PageConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return PageConfig::default();
    };

    match load_config(Path::new(&path)) {
        Ok(config) => {
            info!("loaded config from {path}");
            config
        }
        Err(err) => {
            warn!("ignoring config {path}: {err}");
            PageConfig::default()
        }
    }
}

fn validate(config: &PageConfig) -> Result<(), ConfigError> {
    let size = config.grid_size;
    if size.width == 0 || size.height == 0 {
        return Err(ConfigError::InvalidGridSize {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}
