//! Sanitization report model

use crate::detection::{DetectionSummary, Finding};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Detection report for one input, without any rewriting
#[derive(Debug, Clone, Serialize)]
pub struct SanitizationReport {
    pub original_text: String,
    pub pii_detected: bool,
    pub detection_summary: DetectionSummary,
    /// Labels of the categories with at least one finding, in report order
    pub categories_found: Vec<String>,
    pub total_unique_pii: usize,
    pub detailed_findings: BTreeMap<usize, Vec<Finding>>,
    pub generated_at: DateTime<Utc>,
}

impl SanitizationReport {
    pub(crate) fn from_summary(original_text: &str, summary: DetectionSummary) -> Self {
        let categories_found = summary
            .categories_present()
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        Self {
            original_text: original_text.to_string(),
            pii_detected: summary.has_pii(),
            categories_found,
            total_unique_pii: summary.unique_pii_count,
            detailed_findings: summary.detailed_findings.clone(),
            detection_summary: summary,
            generated_at: Utc::now(),
        }
    }
}
