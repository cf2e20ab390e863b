use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, Result};
use crate::normalize::SpaceCollapse;

/// Root configuration, loaded from `~/.config/audiodupes/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReporterConfig {
    pub report: ReportConfig,
    pub thumbnail: ThumbnailConfig,
    pub normalize: NormalizeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Number of duplicate groups listed in detail.
    pub detail_limit: usize,
    /// Characters of the id shown before the ellipsis.
    pub id_display_len: usize,
    /// Characters of the storage key shown.
    pub key_display_len: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    /// A thumbnail containing any of these substrings is a stock placeholder.
    pub placeholder_markers: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    pub space_collapse: SpaceCollapse,
}

// ─── Defaults ──────────────────────────────────────────────

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            detail_limit: 20,
            id_display_len: 8,
            key_display_len: 50,
        }
    }
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            placeholder_markers: vec!["unsplash.com".to_string()],
        }
    }
}

// ─── Load ──────────────────────────────────────────────────

impl ReporterConfig {
    /// Standard config file path: `~/.config/audiodupes/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var("AUDIODUPES_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("audiodupes")
            .join("config.toml")
    }

    /// Load config from a specific path, falling back to defaults if the file
    /// doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self
            .thumbnail
            .placeholder_markers
            .iter()
            .any(|m| m.is_empty())
        {
            // An empty marker would match every thumbnail.
            return Err(ReportError::ConfigError(
                "thumbnail.placeholder_markers must not contain an empty string".to_string(),
            ));
        }
        Ok(())
    }
}
