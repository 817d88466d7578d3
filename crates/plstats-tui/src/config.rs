// Configuration loading and parsing (plstats.toml).

use plstats_core::DataPaths;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// plstats.toml structs
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = "plstats.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data: DataPaths,
    pub selection: SelectionConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    pub default_player: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `<team>.png` crest images.
    pub dir: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        AssetsConfig {
            dir: "assets".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub enabled: bool,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            enabled: true,
            port: 9002,
        }
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load and validate `config/plstats.toml` under `base_dir`.
pub(crate) fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config: Config = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Seed `config/plstats.toml` from `defaults/plstats.toml` when it is absent.
///
/// Returns the seeded path, or `None` when a config was already in place.
/// An existing config is never overwritten.
pub fn seed_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.is_file() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no config/{CONFIG_FILE} or defaults/{CONFIG_FILE} under {}",
                base_dir.display()
            ),
        });
    }

    let seed_err = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("seeding {} from {}: {e}", target.display(), source.display()),
    };
    if let Some(dir) = target.parent() {
        std::fs::create_dir_all(dir).map_err(seed_err)?;
    }
    std::fs::copy(&source, &target).map_err(seed_err)?;
    tracing::info!("seeded {} from defaults", target.display());
    Ok(Some(target))
}

/// Load config relative to the current working directory, seeding it from
/// `defaults/` on first run.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    seed_config(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate(config: &Config) -> Result<(), ConfigError> {
    let required: &[(&str, &str)] = &[
        ("data.profiles", &config.data.profiles),
        ("data.ratings", &config.data.ratings),
        ("selection.default_player", &config.selection.default_player),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                field: field.to_string(),
                message: "must not be empty".into(),
            });
        }
    }

    if config.server.enabled && config.server.port == 0 {
        return Err(ConfigError::ValidationError {
            field: "server.port".into(),
            message: "must be non-zero when the server is enabled".into(),
        });
    }

    Ok(())
}
