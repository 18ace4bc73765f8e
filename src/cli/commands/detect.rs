//! Detect command implementation

use crate::config::load_or_default;
use crate::detection::{gate, DetectionEngine, LogPolicy};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Text to scan
    pub text: Option<String>,

    /// Read input from a file instead
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Skip the keyword-window proximity analyzer
    #[arg(long)]
    pub no_proximity: bool,

    /// Skip the co-occurrence graph correlator
    #[arg(long)]
    pub no_graph: bool,

    /// Proximity window size in characters
    #[arg(long)]
    pub window: Option<usize>,

    /// Evaluate loggability of the input under a policy
    #[arg(long, value_enum)]
    pub log_policy: Option<LogPolicy>,

    /// Emit the detection summary as JSON
    #[arg(long)]
    pub output_json: bool,
}

impl DetectArgs {
    /// Execute the detect command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_or_default(config_path)?;
        let mut detection = config.detection;
        if self.no_proximity {
            detection.enable_proximity = false;
        }
        if self.no_graph {
            detection.enable_graph = false;
        }
        if let Some(window) = self.window {
            detection.window_size = window;
        }

        let input = super::read_input(self.text.as_deref(), self.file.as_ref())?;

        let engine = DetectionEngine::new(detection)?;
        let summary = engine.detect(&input).await?;

        if self.output_json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            println!("Unique PII values: {}", summary.unique_pii_count);
            for category in summary.categories_present() {
                println!("  {}: {}", category, summary.count(category));
            }
            for (segment, findings) in &summary.detailed_findings {
                for finding in findings {
                    println!(
                        "  segment {segment}: {} [{} / {:?}] {}",
                        finding.value, finding.method, finding.confidence, finding.reason
                    );
                }
            }
        }

        if let Some(policy) = self.log_policy {
            let verdict = gate::evaluate(policy, &summary);
            println!("{}", verdict.message);
            if !verdict.loggable {
                return Ok(1);
            }
        }

        Ok(0)
    }
}
