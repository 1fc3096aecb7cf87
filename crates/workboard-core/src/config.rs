use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional per-project settings, read from `workboard/config.yaml`.
/// Every field is optional; a missing file yields the defaults. A malformed
/// file is a configuration error, not something to paper over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Overrides `$USER` for activity-log attribution.
    #[serde(default)]
    pub actor: Option<String>,

    /// Default branch for `merge --target`.
    #[serde(default)]
    pub merge_target: Option<String>,

    /// Default strategy for `merge --strategy`.
    #[serde(default)]
    pub merge_strategy: Option<String>,
}

impl Config {
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Config::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert!(cfg.actor.is_none());
        assert!(cfg.merge_target.is_none());
    }

    #[test]
    fn partial_file_fills_the_rest() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("workboard")).unwrap();
        std::fs::write(
            dir.path().join("workboard/config.yaml"),
            "actor: release-bot\n",
        )
        .unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.actor.as_deref(), Some("release-bot"));
        assert!(cfg.merge_strategy.is_none());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("workboard")).unwrap();
        std::fs::write(dir.path().join("workboard/config.yaml"), "actor: [").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }
}
