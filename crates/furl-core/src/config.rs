//! Global configuration loaded from `~/.config/furl/config.toml`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration for the furl CLI. Every field is an optional CLI
/// default; the normalization functions themselves are not configurable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FurlConfig {
    /// Default disallowed-character pattern for pattern-based
    /// normalization (`furl pattern` without `--pattern`).
    pub disallowed_pattern: Option<String>,
    /// Maximum output length in bytes; longer output is truncated at a
    /// character boundary. Applies to the non-encoding commands.
    pub max_length: Option<usize>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("furl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FurlConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FurlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FurlConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_overrides() {
        let cfg = FurlConfig::default();
        assert!(cfg.disallowed_pattern.is_none());
        assert!(cfg.max_length.is_none());
    }

    #[test]
    fn empty_file_parses_as_default() {
        let cfg: FurlConfig = toml::from_str("").unwrap();
        assert!(cfg.disallowed_pattern.is_none());
        assert!(cfg.max_length.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FurlConfig {
            disallowed_pattern: Some("[^a-z0-9_-]".to_string()),
            max_length: Some(80),
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FurlConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.disallowed_pattern, cfg.disallowed_pattern);
        assert_eq!(parsed.max_length, cfg.max_length);
    }
}
