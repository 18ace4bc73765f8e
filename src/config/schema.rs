//! Configuration schema definitions

use crate::domain::{Result, VeilError};
use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Validate the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.detection.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Detection engine configuration
///
/// These switches are fixed at engine construction, matching the lifetime of
/// the compiled registry and recognizer they steer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// Run the keyword-window proximity analyzer
    #[serde(default = "default_true")]
    pub enable_proximity: bool,
    /// Run the co-occurrence graph correlator
    #[serde(default = "default_true")]
    pub enable_graph: bool,
    /// Characters scanned on each side of a match for trigger keywords
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    /// Emit hashed duplicate-discard traces at debug level
    #[serde(default)]
    pub debug: bool,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            enable_proximity: true,
            enable_graph: true,
            window_size: default_window_size(),
            debug: false,
        }
    }
}

impl DetectionConfig {
    /// Validate detection settings
    pub fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(VeilError::Configuration(
                "detection.window_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Write JSON logs to a rotating local file in addition to the console
    #[serde(default)]
    pub local_enabled: bool,
    /// Directory for rotated log files
    #[serde(default = "default_log_path")]
    pub local_path: String,
    /// Rotation cadence: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub local_rotation: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_rotation(),
        }
    }
}

impl LoggingConfig {
    /// Validate logging settings
    pub fn validate(&self) -> Result<()> {
        match self.local_rotation.as_str() {
            "daily" | "hourly" | "never" => Ok(()),
            other => Err(VeilError::Configuration(format!(
                "logging.local_rotation must be daily, hourly or never, got: {other}"
            ))),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_window_size() -> usize {
    50
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(config.detection.enable_proximity);
        assert!(config.detection.enable_graph);
        assert_eq!(config.detection.window_size, 50);
        assert!(!config.detection.debug);
        assert!(!config.logging.local_enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = DetectionConfig {
            window_size: 0,
            ..DetectionConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_rotation_rejected() {
        let config = LoggingConfig {
            local_rotation: "weekly".to_string(),
            ..LoggingConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
[detection]
window_size = 30
"#,
        )
        .unwrap();
        assert_eq!(config.detection.window_size, 30);
        assert!(config.detection.enable_graph);
        assert_eq!(config.logging.local_rotation, "daily");
    }
}
