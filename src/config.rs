use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const COINS_PATH_ENV: &str = "COIN_TABLE_COINS";
pub const CATEGORIES_PATH_ENV: &str = "COIN_TABLE_CATEGORIES";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub table: TableConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page for every table.
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Saved `/coins/markets` response (`.json` or `.csv`).
    pub coins_path: Option<PathBuf>,
    /// Saved `/coins/categories` response (`.json` or `.csv`).
    pub categories_path: Option<PathBuf>,
}

impl AppConfig {
    /// Missing file means defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("failed to parse config: {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Environment paths win over the file.
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(COINS_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            self.data.coins_path = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup(CATEGORIES_PATH_ENV).filter(|value| !value.trim().is_empty()) {
            self.data.categories_path = Some(PathBuf::from(path));
        }
        self
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "coin-table")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.toml"))
}

pub fn default_data_dir() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().to_path_buf())
}

/// Config from the default location plus environment overrides. Errors fall
/// back to defaults so the window still opens.
pub fn load_app_config() -> AppConfig {
    let loaded = default_config_path().and_then(|path| AppConfig::load(&path));
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            let message = format!("{err:#}");
            tracing::warn!(error = %message, "failed to load config");
            AppConfig::default()
        }
    };
    config.with_env_overrides(|key| std::env::var(key).ok())
}
