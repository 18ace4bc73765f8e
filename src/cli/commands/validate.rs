//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Proximity analysis: {}", config.detection.enable_proximity);
        println!("  Graph correlation: {}", config.detection.enable_graph);
        println!("  Proximity window: {}", config.detection.window_size);
        println!("  Debug traces: {}", config.detection.debug);
        println!("  File logging: {}", config.logging.local_enabled);
        if config.logging.local_enabled {
            println!("  Log path: {}", config.logging.local_path);
            println!("  Log rotation: {}", config.logging.local_rotation);
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_validate_missing_file_is_config_error() {
        let args = ValidateArgs {};
        assert_eq!(args.execute("does-not-exist.toml").await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_validate_good_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[detection]\nwindow_size = 40\n").unwrap();
        temp.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(temp.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 0);
    }

    #[tokio::test]
    async fn test_validate_bad_value_is_config_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[logging]\nlocal_rotation = \"weekly\"\n")
            .unwrap();
        temp.flush().unwrap();

        let args = ValidateArgs {};
        let code = args
            .execute(temp.path().to_str().unwrap())
            .await
            .unwrap();
        assert_eq!(code, 2);
    }
}
