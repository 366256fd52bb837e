//! Spendwise configuration
//!
//! ## Configuration Resolution
//!
//! 1. An explicit path (`--config`), which must exist
//! 2. Override in data dir (~/.local/share/spendwise/config.toml)
//! 3. Embedded defaults (compiled into binary)
//!
//! Missing keys fall back to the defaults; unknown keys are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::alerts::DEFAULT_NEAR_LIMIT_RATIO;
use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/spendwise.toml");

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Database file used when none is given on the command line
    pub database_path: PathBuf,
    /// Name of the default user created on first run
    pub user_name: String,
    /// Email of the default user created on first run
    pub user_email: String,
    /// Fraction of a budget at which a near-limit warning is raised
    pub near_limit_ratio: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("spendwise.db"),
            user_name: "Default User".to_string(),
            user_email: "default@example.com".to_string(),
            near_limit_ratio: DEFAULT_NEAR_LIMIT_RATIO,
        }
    }
}

impl Config {
    /// Load configuration, preferring `path` when given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let content = match path {
            Some(path) => fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            None => match default_config_path() {
                Some(default_path) if default_path.exists() => {
                    fs::read_to_string(&default_path).map_err(|e| {
                        Error::Config(format!("Failed to read {}: {}", default_path.display(), e))
                    })?
                }
                _ => DEFAULT_CONFIG.to_string(),
            },
        };

        Self::parse(&content)
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

        let mut config = Self::default();

        if let Some(database) = raw.database {
            if let Some(path) = database.path {
                config.database_path = path;
            }
        }

        if let Some(user) = raw.user {
            if let Some(name) = user.name {
                config.user_name = name;
            }
            if let Some(email) = user.email {
                config.user_email = email;
            }
        }

        if let Some(alerts) = raw.alerts {
            if let Some(ratio) = alerts.near_limit_ratio {
                if !(0.0..=1.0).contains(&ratio) {
                    return Err(Error::Config(format!(
                        "alerts.near_limit_ratio must be between 0 and 1, got {}",
                        ratio
                    )));
                }
                config.near_limit_ratio = ratio;
            }
        }

        if config.user_name.trim().is_empty() || config.user_email.trim().is_empty() {
            return Err(Error::Config(
                "user.name and user.email cannot be empty".to_string(),
            ));
        }

        Ok(config)
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("spendwise").join("config.toml"))
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    database: Option<RawDatabase>,
    user: Option<RawUser>,
    alerts: Option<RawAlerts>,
}

#[derive(Debug, Deserialize)]
struct RawDatabase {
    path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    name: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawAlerts {
    near_limit_ratio: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_embedded_defaults_parse() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse(
            r#"
            [user]
            name = "Sam"

            [alerts]
            near_limit_ratio = 0.25
            "#,
        )
        .unwrap();

        assert_eq!(config.user_name, "Sam");
        assert_eq!(config.user_email, "default@example.com");
        assert_eq!(config.near_limit_ratio, 0.25);
        assert_eq!(config.database_path, PathBuf::from("spendwise.db"));
    }

    #[test]
    fn test_empty_content_uses_defaults() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_ratio_out_of_range() {
        let err = Config::parse("[alerts]\nnear_limit_ratio = 1.5").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::parse("[user\nname = ").unwrap_err();
        assert!(err.to_string().contains("Invalid config TOML"));
    }

    #[test]
    fn test_empty_email_rejected() {
        assert!(Config::parse("[user]\nemail = \"  \"").is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[database]\npath = \"/tmp/budget.db\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/budget.db"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/spendwise.toml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
