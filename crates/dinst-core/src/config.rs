use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

mod env;

pub use env::{EnvConfig, BASE_URL_VAR, LOCAL_CONNECTION_VAR};

/// Global configuration loaded from `~/.config/dinst/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DinstConfig {
    /// Default values for environment variables (e.g. `BASE_URL`).
    /// The process environment takes precedence over these.
    #[serde(default)]
    pub env: BTreeMap<String, String>,
}

impl DinstConfig {
    /// The `[env]` table as an injectable config.
    pub fn into_env(self) -> EnvConfig {
        EnvConfig::from(self.env)
    }

    /// Process environment layered over the file's `[env]` defaults.
    pub fn effective_env(&self) -> EnvConfig {
        EnvConfig::from_process_env().with_defaults(&EnvConfig::from(self.env.clone()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dinst").context("config path")?;
    xdg_dirs
        .place_config_file("config.toml")
        .context("config path")
}

/// Read and parse a config file at `path`.
pub fn load_from(path: &Path) -> Result<DinstConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DinstConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration from `path`, writing a default file there if none exists.
pub fn load_or_init_at(path: &Path) -> Result<DinstConfig> {
    if !path.exists() {
        let default_cfg = DinstConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("write default config: {}", path.display()))?;
        }
        fs::write(path, toml)
            .with_context(|| format!("write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(path)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DinstConfig> {
    load_or_init_at(&config_path()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_empty() {
        let cfg = DinstConfig::default();
        assert!(cfg.env.is_empty());
        assert!(cfg.into_env().is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = DinstConfig::default();
        cfg.env
            .insert(BASE_URL_VAR.to_string(), "http://localhost:3000".to_string());
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: DinstConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_env_table() {
        let toml = r#"
            [env]
            BASE_URL = "https://installer.example.org:9090"
            LOCAL_CONNECTION = "1"
        "#;
        let cfg: DinstConfig = toml::from_str(toml).unwrap();
        let env = cfg.into_env();
        assert_eq!(env.get(BASE_URL_VAR), Some("https://installer.example.org:9090"));
        assert_eq!(env.get(LOCAL_CONNECTION_VAR), Some("1"));
    }

    #[test]
    fn config_toml_missing_env_table() {
        let cfg: DinstConfig = toml::from_str("").unwrap();
        assert!(cfg.env.is_empty());
    }

    #[test]
    fn config_toml_rejects_non_string_values() {
        let toml = r#"
            [env]
            BASE_URL = 9090
        "#;
        assert!(toml::from_str::<DinstConfig>(toml).is_err());
    }
}
