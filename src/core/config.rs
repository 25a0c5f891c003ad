//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nova/config.toml`. A missing file simply means
//! defaults; Nova never writes it.

use log::LevelFilter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::model::Profile;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct NovaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
    pub mouse: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileConfig {
    pub display_name: Option<String>,
    pub username: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "nova.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub mouse: bool,
    pub profile: Profile,
    /// Values that were rejected and replaced by their defaults.
    pub problems: Vec<ConfigError>,
}

/// Values that came from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub no_mouse: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown log level {0:?} (expected off, error, warn, info, debug or trace)")]
    LogLevel(String),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.nova/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nova").join("config.toml"))
}

/// Load config from `path`. A missing file yields the defaults; a
/// malformed one is a `ConfigError::Parse`.
///
/// Runs before the logger exists, so it logs nothing itself.
pub fn load_config_from(path: &Path) -> Result<NovaConfig, ConfigError> {
    if !path.exists() {
        return Ok(NovaConfig::default());
    }

    let contents = fs::read_to_string(path)?;
    let config: NovaConfig = toml::from_str(&contents)?;
    Ok(config)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// An unusable log level falls back to `DEFAULT_LOG_LEVEL` and is reported
/// in `problems`; every other value is kept.
pub fn resolve(config: &NovaConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &NovaConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut problems = Vec::new();

    // Log level: CLI → env → config → default
    let log_level = match cli
        .log_level
        .clone()
        .or_else(|| env("NOVA_LOG_LEVEL"))
        .or_else(|| config.general.log_level.clone())
    {
        Some(raw) => parse_log_level(&raw).unwrap_or_else(|e| {
            problems.push(e);
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    // Log file: env → config → default
    let log_file = env("NOVA_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let defaults = Profile::default();
    let username = config.profile.username.clone().unwrap_or(defaults.username.clone());
    let profile = match &config.profile.display_name {
        Some(name) => Profile::named(name.as_str(), username),
        None => Profile { username, ..defaults },
    };

    ResolvedConfig {
        log_level,
        log_file: PathBuf::from(log_file),
        mouse: !cli.no_mouse && config.general.mouse.unwrap_or(true),
        profile,
        problems,
    }
}

fn parse_log_level(raw: &str) -> Result<LevelFilter, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::LogLevel(raw.to_string()))
}
