//! Application configuration model.
//!
//! Every field has a default, so an empty or partial `config.toml` is valid.
//!
//! ```toml
//! [server]
//! bind_address = "0.0.0.0:8000"
//! static_dir = "static"
//!
//! [session]
//! difficulty = 3
//! prompt_count = 5
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, YagaError};
use crate::exercise::difficulty_config;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_address: String,
    /// Directory holding `index.html` and the other front-end assets
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8000".to_string(),
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Shape of the sessions created by the HTTP surface.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: u32,
    pub prompt_count: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            difficulty: 3,
            prompt_count: 5,
        }
    }
}

impl AppConfig {
    /// Rejects settings that would make every session start fail.
    pub fn validate(&self) -> Result<()> {
        if difficulty_config(self.session.difficulty).is_none() {
            return Err(YagaError::config(format!(
                "session.difficulty {} is not in the difficulty table",
                self.session.difficulty
            )));
        }
        if self.session.prompt_count == 0 {
            return Err(YagaError::config("session.prompt_count must be at least 1"));
        }
        if self.server.bind_address.trim().is_empty() {
            return Err(YagaError::config("server.bind_address must not be empty"));
        }
        Ok(())
    }
}
