use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::utils::error::{DexError, Result};

/// Optional TOML config file. Every field is optional; CLI flags override
/// whatever the file sets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub api_endpoint: Option<String>,
    pub data_dir: Option<String>,
    pub request_delay_ms: Option<u64>,
    pub cache_sprites: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DexError::ConfigError {
                message: format!("config file not found: {}", path.display()),
            });
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DexError::ConfigError {
            message: format!("invalid config file {}: {}", path.display(), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_leaves_other_fields_unset() {
        let config: FileConfig =
            toml::from_str("api_endpoint = \"http://localhost:9000/pokemon\"").unwrap();
        assert_eq!(
            config.api_endpoint.as_deref(),
            Some("http://localhost:9000/pokemon")
        );
        assert!(config.data_dir.is_none());
        assert!(config.request_delay_ms.is_none());
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = FileConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, DexError::ConfigError { .. }));
    }
}
