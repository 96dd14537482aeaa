use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dataset::{schema, DataPaths};
use crate::ui::ThemeMode;

/// Port the dashboard API listens on unless told otherwise
pub const DEFAULT_PORT: u16 = 8501;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct QuotelensConfig {
    pub quotes: Option<String>,
    pub authors: Option<String>,
    pub theme: Option<ThemeMode>,
    pub port: Option<u16>,
}

impl QuotelensConfig {
    /// Config written by `quotelens init`
    pub fn starter() -> Self {
        Self {
            quotes: Some(schema::DEFAULT_QUOTES_FILE.to_string()),
            authors: Some(schema::DEFAULT_AUTHORS_FILE.to_string()),
            theme: Some(ThemeMode::Dark),
            port: Some(DEFAULT_PORT),
        }
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub quotes: Option<PathBuf>,
    pub authors: Option<PathBuf>,
    pub light: bool,
    pub port: Option<u16>,
}

/// Fully resolved settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub paths: DataPaths,
    pub theme: ThemeMode,
    pub port: u16,
}

pub fn resolve(config: Option<&QuotelensConfig>, overrides: &Overrides) -> Settings {
    let file = config.cloned().unwrap_or_default();
    let defaults = DataPaths::default();

    let theme = if overrides.light {
        ThemeMode::Light
    } else {
        file.theme.unwrap_or_default()
    };

    Settings {
        paths: DataPaths {
            quotes: overrides
                .quotes
                .clone()
                .or_else(|| file.quotes.map(PathBuf::from))
                .unwrap_or(defaults.quotes),
            authors: overrides
                .authors
                .clone()
                .or_else(|| file.authors.map(PathBuf::from))
                .unwrap_or(defaults.authors),
        },
        theme,
        port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("quotelens.toml")
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Option<QuotelensConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: QuotelensConfig = toml::from_str(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &QuotelensConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("config already exists at {} (use --force to overwrite)", path.display());
    }

    let contents = toml::to_string_pretty(config)?;
    std::fs::write(path, contents)?;
    Ok(())
}
