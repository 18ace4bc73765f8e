//! Redaction layer
//!
//! [`Sanitizer`] runs a full detection pass and rewrites the original text
//! under one of three policies. Detection always completes before the first
//! replacement, so every policy sees the same summary the caller gets back.

pub mod mask;
pub mod report;

use crate::config::DetectionConfig;
use crate::detection::{Category, DetectionEngine, DetectionSummary};
use crate::domain::VeilError;
use anyhow::{Context, Result};
use mask::Maskers;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use report::SanitizationReport;

/// How detected PII is rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RedactionPolicy {
    /// Replace each occurrence with its category tag
    Generic,
    /// Partially mask emails, phones, SSNs and credit cards in place
    Mask,
    /// Delete occurrences and normalize the leftover whitespace
    Remove,
}

impl fmt::Display for RedactionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Generic => "generic",
            Self::Mask => "mask",
            Self::Remove => "remove",
        };
        f.write_str(s)
    }
}

impl FromStr for RedactionPolicy {
    type Err = VeilError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "generic" => Ok(Self::Generic),
            "mask" => Ok(Self::Mask),
            "remove" => Ok(Self::Remove),
            other => Err(VeilError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Result of one sanitize call
#[derive(Debug, Clone, Serialize)]
pub struct SanitizeOutcome {
    pub sanitized_text: String,
    pub original_text: String,
    pub pii_detected: bool,
    pub detection_summary: DetectionSummary,
    pub redaction_type: RedactionPolicy,
}

/// Categories covered by the masking policy, applied in this order
const MASK_ORDER: [Category; 4] = [
    Category::Email,
    Category::Phone,
    Category::Ssn,
    Category::CreditCard,
];

/// Detection-backed text redactor
pub struct Sanitizer {
    engine: DetectionEngine,
    maskers: Maskers,
}

impl Sanitizer {
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let engine = DetectionEngine::new(config)?;
        Self::with_engine(engine)
    }

    pub fn with_engine(engine: DetectionEngine) -> Result<Self> {
        let maskers = Maskers::new().context("Failed to compile mask patterns")?;
        Ok(Self { engine, maskers })
    }

    /// Borrow the underlying engine
    pub fn engine(&self) -> &DetectionEngine {
        &self.engine
    }

    /// Detect, then rewrite under the given policy
    ///
    /// Replacement regexes only run for categories the summary counts, so a
    /// clean input is returned byte-identical.
    pub async fn sanitize(&self, text: &str, policy: RedactionPolicy) -> Result<SanitizeOutcome> {
        let summary = self.engine.detect(text).await?;

        let sanitized_text = if summary.has_pii() {
            match policy {
                RedactionPolicy::Generic => self.apply_generic(text, &summary),
                RedactionPolicy::Mask => self.apply_mask(text, &summary),
                RedactionPolicy::Remove => self.apply_remove(text, &summary),
            }
        } else {
            text.to_string()
        };

        tracing::info!(
            policy = %policy,
            pii_detected = summary.has_pii(),
            unique_pii = summary.unique_pii_count,
            "Sanitization complete"
        );

        Ok(SanitizeOutcome {
            sanitized_text,
            original_text: text.to_string(),
            pii_detected: summary.has_pii(),
            detection_summary: summary,
            redaction_type: policy,
        })
    }

    /// Detect and report, without rewriting
    pub async fn report(&self, text: &str) -> Result<SanitizationReport> {
        let summary = self.engine.detect(text).await?;
        Ok(SanitizationReport::from_summary(text, summary))
    }

    fn apply_generic(&self, text: &str, summary: &DetectionSummary) -> String {
        let mut out = text.to_string();
        for entry in self.engine.registry().entries() {
            if summary.count(entry.category) == 0 {
                continue;
            }
            out = entry
                .regex_ci
                .replace_all(&out, entry.category.redaction_tag())
                .into_owned();
        }
        out
    }

    fn apply_mask(&self, text: &str, summary: &DetectionSummary) -> String {
        let mut out = text.to_string();
        for category in MASK_ORDER {
            if summary.count(category) == 0 {
                continue;
            }
            out = match category {
                Category::Email => self.maskers.mask_emails(&out).into_owned(),
                _ => {
                    let Some(entry) = self.engine.registry().get(category) else {
                        continue;
                    };
                    entry
                        .regex_ci
                        .replace_all(&out, |caps: &regex::Captures<'_>| match category {
                            Category::Phone => mask::mask_phone(&caps[0]),
                            Category::Ssn => mask::SSN_MASK.to_string(),
                            Category::CreditCard => mask::mask_credit_card(&caps[0]),
                            _ => unreachable!(),
                        })
                        .into_owned()
                }
            };
        }
        out
    }

    fn apply_remove(&self, text: &str, summary: &DetectionSummary) -> String {
        let mut out = text.to_string();
        for entry in self.engine.registry().entries() {
            if summary.count(entry.category) == 0 {
                continue;
            }
            out = entry.regex_ci.replace_all(&out, "").into_owned();
        }
        self.maskers.normalize_whitespace(&out)
    }
}
