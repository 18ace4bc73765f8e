//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AppConfig;
use crate::domain::{Result, VeilError};
use std::fs;
use std::path::Path;

/// Default configuration file, as written by `veil init`
pub const DEFAULT_CONFIG_TOML: &str = r#"# Veil configuration

[detection]
enable_proximity = true
enable_graph = true
window_size = 50
debug = false

[logging]
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

/// Load configuration from a TOML file
///
/// Reads the file, parses it, applies `VEIL_*` environment overrides and
/// validates the result.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(VeilError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        VeilError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let mut config: AppConfig = toml::from_str(&contents)
        .map_err(|e| VeilError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);
    config.validate()?;

    Ok(config)
}

/// Load configuration, falling back to defaults when the file is absent
///
/// The CLI uses this so commands work without a `veil.toml` in place;
/// environment overrides still apply.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<AppConfig> {
    if path.as_ref().exists() {
        return load_config(path);
    }
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config);
    config.validate()?;
    Ok(config)
}

/// Apply environment variable overrides using the VEIL_<SECTION>_<KEY> pattern
fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(val) = parse_env("VEIL_DETECTION_ENABLE_PROXIMITY") {
        config.detection.enable_proximity = val;
    }
    if let Some(val) = parse_env("VEIL_DETECTION_ENABLE_GRAPH") {
        config.detection.enable_graph = val;
    }
    if let Some(val) = parse_env("VEIL_DETECTION_WINDOW_SIZE") {
        config.detection.window_size = val;
    }
    if let Some(val) = parse_env("VEIL_DETECTION_DEBUG") {
        config.detection.debug = val;
    }

    if let Some(val) = parse_env("VEIL_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val;
    }
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("VEIL_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }
}

/// Read and parse one override; unparseable values are warned about and
/// ignored rather than coerced to a default
fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    let val = std::env::var(name).ok()?;
    match val.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(
                var = name,
                value = %val,
                "Ignoring unparseable environment override"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_missing_file() {
        assert!(load_config("nonexistent.toml").is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = load_or_default("nonexistent.toml").unwrap();
        assert_eq!(config.detection.window_size, 50);
    }

    #[test]
    fn test_load_config_valid() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[detection]\nwindow_size = 25\nenable_graph = false\n")
            .unwrap();
        temp_file.flush().unwrap();

        let config = load_config(temp_file.path()).unwrap();
        assert_eq!(config.detection.window_size, 25);
        assert!(!config.detection.enable_graph);
        assert!(config.detection.enable_proximity);
    }

    #[test]
    fn test_load_config_invalid_values_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[detection]\nwindow_size = 0\n")
            .unwrap();
        temp_file.flush().unwrap();

        assert!(load_config(temp_file.path()).is_err());
    }

    #[test]
    fn test_malformed_override_is_ignored_not_coerced() {
        // Unique variable name so parallel tests never observe it.
        std::env::set_var("VEIL_TEST_BOOL_OVERRIDE", "no");
        assert_eq!(parse_env::<bool>("VEIL_TEST_BOOL_OVERRIDE"), None);

        std::env::set_var("VEIL_TEST_BOOL_OVERRIDE", "false");
        assert_eq!(parse_env::<bool>("VEIL_TEST_BOOL_OVERRIDE"), Some(false));
        std::env::remove_var("VEIL_TEST_BOOL_OVERRIDE");

        std::env::set_var("VEIL_TEST_SIZE_OVERRIDE", "plenty");
        assert_eq!(parse_env::<usize>("VEIL_TEST_SIZE_OVERRIDE"), None);
        std::env::remove_var("VEIL_TEST_SIZE_OVERRIDE");
    }

    #[test]
    fn test_default_config_template_parses() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        assert!(config.validate().is_ok());
    }
}
