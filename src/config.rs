use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::{fs, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StoreConfig {
    pub base_url: String,
}

fn default_snapshot_path() -> String {
    "cards.json".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    /// Document store to publish to. `publish` fails without it.
    #[serde(default)]
    pub store: Option<StoreConfig>,

    /// Where `snapshot` writes the catalog.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Quarterly-table overrides for the rotating source: card id to
    /// quarter (1-4) to category list. Lets a deployment pick up a new
    /// quarter's calendar without a release.
    #[serde(default)]
    pub rotating_overrides: HashMap<String, HashMap<u8, Vec<String>>>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store: None,
            snapshot_path: default_snapshot_path(),
            rotating_overrides: HashMap::new(),
        }
    }
}

impl AppConfig {
    /// Load the default config file, falling back to defaults when none has
    /// been written yet. A present-but-malformed file is an error.
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config file at {}; using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "cardsync", "cardsync")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
store:
  base_url: "http://localhost:8080"
snapshot_path: "out/cards.json"
rotating_overrides:
  discover-it:
    1: ["grocery", "drugstore"]
    2: ["gas"]
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(
            config.store.as_ref().unwrap().base_url,
            "http://localhost:8080"
        );
        assert_eq!(config.snapshot_path, "out/cards.json");
        assert_eq!(
            config.rotating_overrides["discover-it"][&1],
            vec!["grocery", "drugstore"]
        );
        assert_eq!(config.rotating_overrides["discover-it"][&2], vec!["gas"]);
    }

    #[test]
    fn test_config_defaults() {
        let config: AppConfig = serde_yaml::from_str("{}").expect("Failed to deserialize");
        assert!(config.store.is_none());
        assert_eq!(config.snapshot_path, "cards.json");
        assert!(config.rotating_overrides.is_empty());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "store: [not, a, mapping]").unwrap();
        assert!(AppConfig::load_from_path(&path).is_err());
    }
}
