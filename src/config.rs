use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the config file searched for in the current directory.
pub const CONFIG_FILE: &str = ".folio.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl FolioConfig {
    /// Load the configuration.
    ///
    /// An explicitly given path must exist; without one, `.folio.yml` in the
    /// current directory is used when present, and the defaults otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FolioError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                Self::parse_file(path)
            }
            None => {
                let default_path = Path::new(CONFIG_FILE);
                if default_path.exists() {
                    Self::parse_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_config_given() {
        let config = FolioConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn test_load_explicit_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("folio.yml");
        std::fs::write(&path, "server:\n  port: 4100\n").unwrap();

        let config = FolioConfig::load(Some(&path)).unwrap();
        assert_eq!(config.server.port, 4100);
        // Host falls back to its field default.
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn test_load_missing_explicit_file_is_an_error() {
        let result = FolioConfig::load(Some(Path::new("/does/not/exist.yml")));
        assert!(matches!(result, Err(FolioError::Config(_))));
    }
}
