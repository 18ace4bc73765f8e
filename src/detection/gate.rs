//! Log admission gate
//!
//! Turns a detection summary into a log/don't-log decision under one of
//! three policies. The gate never mutates text itself; under the masking
//! policy the caller redacts before logging.

use crate::detection::models::DetectionSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with a log entry that contains PII
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LogPolicy {
    /// Refuse to log the entry
    Block,
    /// Log a redacted rendition of the entry
    Mask,
    /// Log the entry unchanged
    Log,
}

impl fmt::Display for LogPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Block => "block",
            Self::Mask => "mask",
            Self::Log => "log",
        };
        f.write_str(s)
    }
}

/// Gate decision for one candidate log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogVerdict {
    pub policy: LogPolicy,
    /// Whether the entry may reach the log at all
    pub loggable: bool,
    /// Whether the entry must be redacted first
    pub redact: bool,
    pub message: &'static str,
}

/// Evaluate a summary against a policy
pub fn evaluate(policy: LogPolicy, summary: &DetectionSummary) -> LogVerdict {
    if !summary.has_pii() {
        return LogVerdict {
            policy,
            loggable: true,
            redact: false,
            message: "No PII Detected - Entry is Safe to Log",
        };
    }
    match policy {
        LogPolicy::Block => LogVerdict {
            policy,
            loggable: false,
            redact: false,
            message: "PII Detected - Entry is Not Loggable",
        },
        LogPolicy::Mask => LogVerdict {
            policy,
            loggable: true,
            redact: true,
            message: "PII Detected - Entry is Redacted",
        },
        LogPolicy::Log => LogVerdict {
            policy,
            loggable: true,
            redact: false,
            message: "PII Detected - Message Logged Anyways",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::categories::Category;
    use std::collections::BTreeMap;

    fn summary(pii: bool) -> DetectionSummary {
        let count = usize::from(pii);
        let mut categories = BTreeMap::new();
        categories.insert(Category::Email, count);
        DetectionSummary {
            total_detections: count,
            categories,
            unique_pii_count: count,
            detailed_findings: BTreeMap::new(),
        }
    }

    #[test]
    fn test_clean_entry_passes_every_policy() {
        for policy in [LogPolicy::Block, LogPolicy::Mask, LogPolicy::Log] {
            let verdict = evaluate(policy, &summary(false));
            assert!(verdict.loggable);
            assert!(!verdict.redact);
            assert_eq!(verdict.message, "No PII Detected - Entry is Safe to Log");
        }
    }

    #[test]
    fn test_block_refuses_pii() {
        let verdict = evaluate(LogPolicy::Block, &summary(true));
        assert!(!verdict.loggable);
        assert_eq!(verdict.message, "PII Detected - Entry is Not Loggable");
    }

    #[test]
    fn test_mask_demands_redaction() {
        let verdict = evaluate(LogPolicy::Mask, &summary(true));
        assert!(verdict.loggable);
        assert!(verdict.redact);
        assert_eq!(verdict.message, "PII Detected - Entry is Redacted");
    }

    #[test]
    fn test_log_lets_pii_through() {
        let verdict = evaluate(LogPolicy::Log, &summary(true));
        assert!(verdict.loggable);
        assert!(!verdict.redact);
        assert_eq!(verdict.message, "PII Detected - Message Logged Anyways");
    }
}
