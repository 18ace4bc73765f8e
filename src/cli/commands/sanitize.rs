//! Sanitize command implementation

use crate::config::load_or_default;
use crate::sanitize::{RedactionPolicy, Sanitizer};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the sanitize command
#[derive(Args, Debug)]
pub struct SanitizeArgs {
    /// Text to redact
    pub text: Option<String>,

    /// Redact a file in place, writing `<path>.sanitized` next to it
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Redaction policy
    #[arg(long, value_enum, default_value_t = RedactionPolicy::Generic)]
    pub policy: RedactionPolicy,

    /// Emit the full outcome as JSON instead of the redacted text
    #[arg(long)]
    pub output_json: bool,
}

impl SanitizeArgs {
    /// Execute the sanitize command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_or_default(config_path)?;
        let input = super::read_input(self.text.as_deref(), self.file.as_ref())?;

        let sanitizer = Sanitizer::new(config.detection)?;
        let outcome = sanitizer.sanitize(&input, self.policy).await?;

        if let Some(path) = &self.file {
            let output_path = sanitized_path(path);
            std::fs::write(&output_path, &outcome.sanitized_text)?;
            println!("Sanitized file written: {}", output_path.display());
            return Ok(0);
        }

        if self.output_json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}", outcome.sanitized_text);
        }
        Ok(0)
    }
}

/// Sibling output path: `notes.txt` becomes `notes.txt.sanitized`
fn sanitized_path(path: &std::path::Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".sanitized");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_sanitized_path_appends_suffix() {
        let path = sanitized_path(std::path::Path::new("/tmp/notes.txt"));
        assert_eq!(path, PathBuf::from("/tmp/notes.txt.sanitized"));
    }

    #[tokio::test]
    async fn test_sanitize_file_writes_sibling() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"Contact jane@example.com now").unwrap();
        temp.flush().unwrap();

        let args = SanitizeArgs {
            text: None,
            file: Some(temp.path().to_path_buf()),
            policy: RedactionPolicy::Generic,
            output_json: false,
        };
        assert_eq!(args.execute("nonexistent.toml").await.unwrap(), 0);

        let output = sanitized_path(temp.path());
        let written = std::fs::read_to_string(&output).unwrap();
        assert!(written.contains("[REDACTED_EMAIL]"));
        assert!(!written.contains("jane@example.com"));
        std::fs::remove_file(output).unwrap();
    }
}
