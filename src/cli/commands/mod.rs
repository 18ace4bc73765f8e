//! CLI command implementations

pub mod detect;
pub mod init;
pub mod report;
pub mod sanitize;
pub mod validate;

use anyhow::{bail, Context, Result};
use std::path::PathBuf;

/// Resolve the input for a text-or-file command
pub(crate) fn read_input(text: Option<&str>, file: Option<&PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text.to_string()),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file {}", path.display())),
        (Some(_), Some(_)) => bail!("Provide either inline text or --file, not both"),
        (None, None) => bail!("No input given; pass text or --file <path>"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_inline() {
        assert_eq!(read_input(Some("hello"), None).unwrap(), "hello");
    }

    #[test]
    fn test_read_input_file() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"file contents").unwrap();
        temp.flush().unwrap();
        let path = temp.path().to_path_buf();
        assert_eq!(read_input(None, Some(&path)).unwrap(), "file contents");
    }

    #[test]
    fn test_read_input_rejects_both_and_neither() {
        let path = PathBuf::from("x.txt");
        assert!(read_input(Some("t"), Some(&path)).is_err());
        assert!(read_input(None, None).is_err());
    }
}
