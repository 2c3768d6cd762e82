//! Run configuration: config file, environment, command line.
//!
//! Precedence, highest first: command line, environment (`AWS_REGION`,
//! `AWS_PROFILE`), config file, built-in defaults.

use std::path::{Path, PathBuf};

use rds_compare::ReportFormat;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of the JSON config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub format: Option<ReportFormat>,
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    /// Read a config file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read `explicit` if given; otherwise read the default config file if
    /// it exists.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::debug!(path = %path.display(), "loading config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Default config file location, e.g. `~/.config/rds-params/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("rds-params");
    path.push("config.json");
    Some(path)
}

/// Values given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub format: Option<ReportFormat>,
    pub output_dir: Option<PathBuf>,
}

/// Effective configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub format: ReportFormat,
    pub output_dir: PathBuf,
}

impl Config {
    /// Merge command line, process environment and file values.
    pub fn resolve(file: FileConfig, overrides: Overrides) -> Self {
        Self::resolve_with_env(file, overrides, |key| std::env::var(key).ok())
    }

    /// Like `resolve`, reading environment variables through `env`.
    pub fn resolve_with_env<F>(file: FileConfig, overrides: Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.is_empty());
        Self {
            region: overrides.region.or_else(|| env("AWS_REGION")).or(file.region),
            profile: overrides.profile.or_else(|| env("AWS_PROFILE")).or(file.profile),
            format: overrides.format.or(file.format).unwrap_or_default(),
            output_dir: overrides
                .output_dir
                .or(file.output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn file() -> FileConfig {
        FileConfig {
            region: Some("eu-west-1".into()),
            profile: Some("file-profile".into()),
            format: Some(ReportFormat::Text),
            output_dir: Some(PathBuf::from("/tmp/reports")),
        }
    }

    #[test]
    fn test_defaults() {
        let config = Config::resolve_with_env(FileConfig::default(), Overrides::default(), no_env);
        assert_eq!(config.region, None);
        assert_eq!(config.format, ReportFormat::Html);
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_file_over_defaults() {
        let config = Config::resolve_with_env(file(), Overrides::default(), no_env);
        assert_eq!(config.region.as_deref(), Some("eu-west-1"));
        assert_eq!(config.profile.as_deref(), Some("file-profile"));
        assert_eq!(config.format, ReportFormat::Text);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_env_over_file_and_cli_over_env() {
        let env = |key: &str| match key {
            "AWS_REGION" => Some("us-east-2".to_string()),
            "AWS_PROFILE" => Some(String::new()),
            _ => None,
        };
        let config = Config::resolve_with_env(file(), Overrides::default(), env);
        assert_eq!(config.region.as_deref(), Some("us-east-2"));
        // Empty variables are ignored.
        assert_eq!(config.profile.as_deref(), Some("file-profile"));

        let overrides = Overrides {
            region: Some("ap-south-1".into()),
            format: Some(ReportFormat::Json),
            ..Default::default()
        };
        let config = Config::resolve_with_env(file(), overrides, env);
        assert_eq!(config.region.as_deref(), Some("ap-south-1"));
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    #[serial]
    fn test_resolve_reads_process_env() {
        // SAFETY: serialized with other env-touching tests.
        unsafe { std::env::set_var("AWS_REGION", "ca-central-1") };
        let config = Config::resolve(FileConfig::default(), Overrides::default());
        unsafe { std::env::remove_var("AWS_REGION") };
        assert_eq!(config.region.as_deref(), Some("ca-central-1"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "region": "us-west-2", "format": "txt" }"#).unwrap();

        let loaded = FileConfig::load_or_default(Some(&path)).unwrap();
        assert_eq!(loaded.region.as_deref(), Some("us-west-2"));
        assert_eq!(loaded.format, Some(ReportFormat::Text));
        assert_eq!(loaded.output_dir, None);
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            FileConfig::load_or_default(Some(&missing)),
            Err(ConfigError::Io { .. })
        ));

        let unknown = dir.path().join("unknown.json");
        std::fs::write(&unknown, r#"{ "colour": "blue" }"#).unwrap();
        let err = FileConfig::load(&unknown).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("unknown.json"));
    }
}
