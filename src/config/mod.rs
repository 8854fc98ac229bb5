pub mod model;

use crate::arena::nav::Area;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use model::AppConfig;

/// A configuration that parsed but cannot drive the arena.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena bounds must be positive (got {width}x{height})")]
    InvalidBounds { width: f64, height: f64 },
    #[error("{what} ({x}, {y}) lies outside the arena bounds")]
    OutOfBounds { what: &'static str, x: f64, y: f64 },
    #[error("pipe radius must be positive (got {0})")]
    InvalidPipeRadius(f64),
    #[error("keyboard step must be positive (got {0})")]
    InvalidKeyboardStep(f64),
    #[error("at least one drop target is required")]
    NoTargets,
    #[error("drop target '{0}' has a non-finite region")]
    NonFiniteTargetRegion(Area),
    #[error("drop target '{0}' has an empty region")]
    EmptyTargetRegion(Area),
    #[error("drop target '{0}' is defined more than once")]
    DuplicateTarget(Area),
    #[error("tick interval must be greater than zero")]
    ZeroTick,
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arena")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

pub fn save_config(config: &AppConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
