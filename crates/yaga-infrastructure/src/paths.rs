//! Path resolution for YAGA configuration files.
//!
//! ```text
//! ~/.config/yaga/           # Config directory (platform config dir)
//! └── config.toml           # Application configuration
//! ```

use std::path::PathBuf;

use yaga_core::error::{Result, YagaError};

pub struct YagaPaths;

impl YagaPaths {
    const APP_DIR: &'static str = "yaga";
    const CONFIG_FILENAME: &'static str = "config.toml";

    /// Returns the YAGA configuration directory (e.g. `~/.config/yaga/`).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or_else(|| YagaError::config("Cannot find the platform config directory"))
    }

    /// Returns the default location of `config.toml`.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILENAME))
    }
}
