//! Configuration management
//!
//! TOML-backed configuration with environment variable overrides and
//! validation at load time.

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default, DEFAULT_CONFIG_TOML};
pub use schema::{AppConfig, DetectionConfig, LoggingConfig};
