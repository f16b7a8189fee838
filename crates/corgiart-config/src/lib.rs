//! # CorgiArt Configuration
//!
//! Configuration sources (in priority order):
//! 1. CLI arguments
//! 2. Environment variables (`CORGIART_`, sections split on `__`)
//! 3. User config (~/.config/corgiart/config.toml)
//! 4. Built-in defaults

use anyhow::Context;
use directories::{ProjectDirs, UserDirs};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Get the configuration directory
pub fn config_dir() -> PathBuf {
    ProjectDirs::from("dev", "corgiart", "CorgiArt")
        .map(|d| d.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.config/corgiart"))
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How art is drawn
    pub render: RenderConfig,
    /// Where exports go
    pub export: ExportConfig,
    /// Font picker contents
    pub catalog: CatalogConfig,
}

/// Rendering settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Font used when none is given
    pub font: String,
    /// Rainbow colors by default
    pub rainbow: bool,
    /// Export font size in px
    pub font_size: f64,
    /// CSS font family for exports
    pub font_family: String,
    /// Color of uncolored text
    pub foreground: String,
    /// Background color
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: "Standard".to_string(),
            rainbow: false,
            font_size: 14.0,
            font_family: "'Courier New', monospace".to_string(),
            foreground: "#fdcb6e".to_string(),
            background: "#2c001e".to_string(),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory SVG files are saved into
    pub output_dir: PathBuf,
    /// File name prefix
    pub file_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let output_dir = UserDirs::new()
            .and_then(|d| d.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            output_dir,
            file_prefix: "ascii-art".to_string(),
        }
    }
}

/// Font catalog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Also list fonts from the remote catalog
    pub remote: bool,
    /// GitHub contents URL of the remote catalog
    pub url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            remote: false,
            url: "https://api.github.com/repos/mskian/ascii-art/contents/fonts".to_string(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    config: Arc<RwLock<Config>>,
    config_path: PathBuf,
}

impl ConfigManager {
    /// Load from the user config directory
    pub fn new() -> anyhow::Result<Self> {
        Self::with_path(config_dir().join("config.toml"))
    }

    /// Load from an explicit file; a missing file means defaults
    pub fn with_path(config_path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.into();
        let config = Self::load_from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
        tracing::debug!("Loaded configuration from {}", config_path.display());

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// Load configuration from file
    fn load_from_file(path: &Path) -> anyhow::Result<Config> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("CORGIART_").split("__"));

        Ok(figment.extract()?)
    }

    /// Get current configuration
    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Update configuration
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.config.write();
        f(&mut config);
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        let config = self.config.read();
        let content = toml::to_string_pretty(&*config)?;

        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.config_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.render.font, "Standard");
        assert_eq!(config.render.font_size, 14.0);
        assert_eq!(config.export.file_prefix, "ascii-art");
        assert!(!config.catalog.remote);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("[render]"));
        assert!(toml.contains("[export]"));
        assert!(toml.contains("[catalog]"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_path(dir.path().join("none.toml")).unwrap();
        assert_eq!(manager.config().render, RenderConfig::default());
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[render]\nrainbow = true\nfont = \"Mini\"\n").unwrap();

        let config = ConfigManager::with_path(&path).unwrap().config();
        assert!(config.render.rainbow);
        assert_eq!(config.render.font, "Mini");
        assert_eq!(config.render.background, "#2c001e");
    }

    #[test]
    fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let manager = ConfigManager::with_path(&path).unwrap();
        manager.update(|c| {
            c.export.file_prefix = "corgi".to_string();
            c.render.font_size = 18.0;
        });
        manager.save().unwrap();

        let reloaded = ConfigManager::with_path(&path).unwrap().config();
        assert_eq!(reloaded.export.file_prefix, "corgi");
        assert_eq!(reloaded.render.font_size, 18.0);
    }
}
