//! Detection data models

use crate::detection::categories::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which detector produced a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Direct category regex match
    Pattern,
    /// Named-entity recognition
    Entity,
    /// Keyword-window proximity analysis
    Proximity,
    /// Co-occurrence graph correlation
    Graph,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pattern => "pattern",
            Self::Entity => "entity",
            Self::Proximity => "proximity",
            Self::Graph => "graph",
        };
        f.write_str(s)
    }
}

/// Confidence tier for a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// One detected PII occurrence with provenance metadata
///
/// Findings are created during a single detection pass and never mutated
/// afterwards. `value` is the exact matched substring and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub value: String,
    pub category: Category,
    pub method: DetectionMethod,
    pub confidence: Confidence,
    pub reason: String,
    pub segment_index: usize,
}

impl Finding {
    pub fn new(
        value: impl Into<String>,
        category: Category,
        method: DetectionMethod,
        confidence: Confidence,
        reason: impl Into<String>,
        segment_index: usize,
    ) -> Self {
        Self {
            value: value.into(),
            category,
            method,
            confidence,
            reason: reason.into(),
            segment_index,
        }
    }
}

/// Aggregated, deduplicated result of a full detection pass
///
/// Invariant: `total_detections == unique_pii_count == sum(categories.values())`.
/// `categories` carries every registered category, zero-initialized, and
/// `detailed_findings` carries every segment index, empty lists included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub total_detections: usize,
    pub categories: BTreeMap<Category, usize>,
    pub unique_pii_count: usize,
    pub detailed_findings: BTreeMap<usize, Vec<Finding>>,
}

impl DetectionSummary {
    /// Whether any PII was detected
    pub fn has_pii(&self) -> bool {
        self.total_detections > 0
    }

    /// Categories with at least one unique finding, in report order
    pub fn categories_present(&self) -> Vec<Category> {
        self.categories
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(category, _)| *category)
            .collect()
    }

    /// Count for one category
    pub fn count(&self, category: Category) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }
}

/// Partition text into ordered segments by splitting on the literal `". "`
///
/// This boundary is deliberately naive: "Dr. Smith" splits into two segments.
/// Consumers index findings by this exact segmentation, so it must not be
/// replaced with linguistic sentence detection.
pub fn segment_text(text: &str) -> Vec<&str> {
    text.split(". ").collect()
}
