//! Configuration service implementation.
//!
//! Loads `AppConfig` from an explicit TOML file, or from the default
//! location (`~/.config/yaga/config.toml`) when that file exists, or falls
//! back to built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use yaga_core::config::AppConfig;
use yaga_core::error::{Result, YagaError};

use crate::paths::YagaPaths;

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

#[derive(Debug, Clone)]
pub struct ConfigService {
    config: AppConfig,
    source: ConfigSource,
}

impl ConfigService {
    /// Loads and validates the configuration.
    ///
    /// # Arguments
    ///
    /// * `explicit_path` - File given on the command line. A missing explicit
    ///   file is an error; a missing default file is not.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let service = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => match YagaPaths::config_file() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::defaults(),
            },
        };
        service.config.validate()?;
        Ok(service)
    }

    /// Reads one TOML file without looking anywhere else.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            YagaError::io(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(Self {
            config,
            source: ConfigSource::File(path.to_path_buf()),
        })
    }

    pub fn defaults() -> Self {
        Self {
            config: AppConfig::default(),
            source: ConfigSource::Defaults,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Mutable access for command-line overrides; call `validate` afterwards.
    pub fn config_mut(&mut self) -> &mut AppConfig {
        &mut self.config
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    pub fn validate(&self) -> Result<()> {
        self.config.validate()
    }

    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nbind_address = \"0.0.0.0:9000\"\n\n[session]\nprompt_count = 8"
        )
        .unwrap();

        let service = ConfigService::load(Some(file.path())).unwrap();
        assert_eq!(service.config().server.bind_address, "0.0.0.0:9000");
        assert_eq!(service.config().session.prompt_count, 8);
        assert_eq!(service.config().session.difficulty, 3);
        assert_eq!(
            service.source(),
            &ConfigSource::File(file.path().to_path_buf())
        );
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ConfigService::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, YagaError::Io { .. }));
    }

    #[test]
    fn test_invalid_toml_is_serialization_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[session\ndifficulty = ").unwrap();
        let err = ConfigService::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, YagaError::Serialization { ref format, .. } if format == "TOML"));
    }

    #[test]
    fn test_invalid_difficulty_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[session]\ndifficulty = 42").unwrap();
        assert!(ConfigService::load(Some(file.path())).unwrap_err().is_config());
    }

    #[test]
    fn test_overrides_then_validate() {
        let mut service = ConfigService::defaults();
        service.config_mut().session.difficulty = 0;
        assert!(service.validate().is_err());
        service.config_mut().session.difficulty = 1;
        assert!(service.validate().is_ok());
        assert_eq!(service.into_config().session.difficulty, 1);
    }
}
