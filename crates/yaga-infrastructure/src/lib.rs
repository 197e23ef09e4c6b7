//! Infrastructure layer for YAGA: session storage and configuration loading.

pub mod config_service;
pub mod in_memory_session_repository;
pub mod paths;

pub use crate::config_service::{ConfigService, ConfigSource};
pub use crate::in_memory_session_repository::InMemorySessionRepository;
