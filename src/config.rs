use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Demo/CLI settings; everything has a default so the file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Decimal places for printed integral values.
    pub precision: usize,
    /// Default subinterval count for the integrator.
    pub samples: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            precision: 12,
            samples: 1000,
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    // ~/.numera/numera.toml
    dirs_next::home_dir().map(|h| h.join(".numera").join("numera.toml"))
}

pub fn resolve_config_path(cli_path: &Option<PathBuf>) -> Option<PathBuf> {
    if let Some(p) = cli_path {
        return Some(p.clone());
    }
    default_config_path()
}

/// Loads settings from `path`. A missing file yields the defaults;
/// unreadable or malformed TOML is an error.
pub fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    if !path.exists() {
        return Ok(DemoConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Read config {}", path.display()))?;
    let cfg = toml::from_str(&text)
        .with_context(|| format!("Parse config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let cfg = load_config(Some(Path::new("/nonexistent/numera.toml"))).unwrap();
        assert_eq!(cfg.precision, 12);
        assert_eq!(cfg.samples, 1000);
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numera.toml");
        fs::write(&path, "samples = 250\n").unwrap();
        let cfg = load_config(Some(&path)).unwrap();
        assert_eq!(cfg.samples, 250);
        assert_eq!(cfg.precision, 12);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("numera.toml");
        fs::write(&path, "samples = \"many\"\n").unwrap();
        assert!(load_config(Some(&path)).is_err());
    }
}
