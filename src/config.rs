// ⚙️ Configuration - Labels, server address, default snapshot
//
// Loaded from a JSON file. Every field has a default, so an empty object (or no
// file at all) is a valid configuration.

use crate::ranking::Category;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "LEADERBOARD_CONFIG";

/// Environment variable overriding the snapshot path
pub const SNAPSHOT_ENV: &str = "LEADERBOARD_SNAPSHOT";

// ============================================================================
// CATEGORY LABELS
// ============================================================================

/// Domain names shown for each category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLabels {
    pub composite: String,
    pub a: String,
    pub b: String,
}

impl Default for CategoryLabels {
    fn default() -> Self {
        CategoryLabels {
            composite: "Overall".to_string(),
            a: "Tax Friendliness".to_string(),
            b: "Crypto Adoption".to_string(),
        }
    }
}

impl CategoryLabels {
    pub fn label(&self, category: Category) -> &str {
        match category {
            Category::Composite => &self.composite,
            Category::A => &self.a,
            Category::B => &self.b,
        }
    }
}

// ============================================================================
// SERVER CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: "0.0.0.0:3000".to_string(),
        }
    }
}

// ============================================================================
// ROOT CONFIG
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub labels: CategoryLabels,
    pub server: ServerConfig,

    /// Default snapshot file (JSON or CSV)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PathBuf>,
}

impl LeaderboardConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config JSON: {:?}", path.as_ref()))
    }

    /// Explicit path first, then `LEADERBOARD_CONFIG`, then defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);

        match explicit.map(Path::to_path_buf).or(env_path) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading configuration");
                Self::from_file(path)
            }
            None => {
                tracing::debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// `LEADERBOARD_SNAPSHOT` wins over the configured snapshot
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        std::env::var_os(SNAPSHOT_ENV)
            .map(PathBuf::from)
            .or_else(|| self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = LeaderboardConfig::default();
        assert_eq!(config.labels.label(Category::Composite), "Overall");
        assert_eq!(config.labels.label(Category::A), "Tax Friendliness");
        assert_eq!(config.labels.label(Category::B), "Crypto Adoption");
        assert_eq!(config.server.addr, "0.0.0.0:3000");
        assert!(config.snapshot.is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"labels":{{"a":"Tax Regime"}},"snapshot":"countries.json"}}"#).unwrap();

        let config = LeaderboardConfig::from_file(file.path()).unwrap();
        assert_eq!(config.labels.a, "Tax Regime");
        assert_eq!(config.labels.b, "Crypto Adoption");
        assert_eq!(config.server.addr, "0.0.0.0:3000");
        assert_eq!(config.snapshot, Some(PathBuf::from("countries.json")));
    }

    #[test]
    fn test_resolve_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"server":{{"addr":"127.0.0.1:8080"}}}}"#).unwrap();

        let config = LeaderboardConfig::resolve(Some(file.path())).unwrap();
        assert_eq!(config.server.addr, "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_file_is_error() {
        let result = LeaderboardConfig::from_file("/nonexistent/leaderboard.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = LeaderboardConfig::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config JSON"));
    }
}
