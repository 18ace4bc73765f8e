//! Report command implementation

use crate::config::load_or_default;
use crate::sanitize::Sanitizer;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Text to analyze
    pub text: Option<String>,

    /// Read input from a file instead
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Emit the report as JSON
    #[arg(long)]
    pub output_json: bool,
}

impl ReportArgs {
    /// Execute the report command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_or_default(config_path)?;
        let input = super::read_input(self.text.as_deref(), self.file.as_ref())?;

        let sanitizer = Sanitizer::new(config.detection)?;
        let report = sanitizer.report(&input).await?;

        if self.output_json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(0);
        }

        println!("PII detected: {}", report.pii_detected);
        println!("Unique PII values: {}", report.total_unique_pii);
        if !report.categories_found.is_empty() {
            println!("Categories: {}", report.categories_found.join(", "));
        }
        println!("Generated at: {}", report.generated_at.to_rfc3339());
        Ok(0)
    }
}
