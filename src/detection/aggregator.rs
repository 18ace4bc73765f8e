//! Finding aggregation and deduplication

use crate::detection::categories::Category;
use crate::detection::models::{DetectionSummary, Finding};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashSet};

/// Global deduplicator keyed by literal value
///
/// This is the single mutable structure of a detection pass. The engine owns
/// it and offers findings sequentially after the detector join barrier, so
/// the accept-or-discard decision is atomic per value and the first detector
/// to report a value wins.
pub struct Aggregator {
    seen: HashSet<String>,
    categories: BTreeMap<Category, usize>,
    findings: BTreeMap<usize, Vec<Finding>>,
    debug: bool,
}

impl Aggregator {
    /// Create an aggregator scoped to one detection call
    ///
    /// Every registered category and every segment index is pre-seeded so the
    /// summary reports them even when empty.
    pub fn new(segment_count: usize, debug: bool) -> Self {
        let categories = Category::ALL.iter().map(|c| (*c, 0)).collect();
        let findings = (0..segment_count).map(|i| (i, Vec::new())).collect();
        Self {
            seen: HashSet::new(),
            categories,
            findings,
            debug,
        }
    }

    /// Accept or discard one finding
    ///
    /// Returns true when the finding was accepted. Duplicate literal values
    /// and empty values are discarded.
    pub fn offer(&mut self, finding: Finding) -> bool {
        if finding.value.is_empty() {
            tracing::warn!(
                method = %finding.method,
                category = %finding.category,
                "Discarding finding with empty value"
            );
            return false;
        }

        if self.seen.contains(&finding.value) {
            if self.debug {
                // Hash the literal so duplicate traces never leak plaintext PII.
                tracing::debug!(
                    value_hash = %hash_value(&finding.value),
                    category = %finding.category,
                    method = %finding.method,
                    "Duplicate PII value skipped"
                );
            }
            return false;
        }

        self.seen.insert(finding.value.clone());
        *self.categories.entry(finding.category).or_insert(0) += 1;
        self.findings
            .entry(finding.segment_index)
            .or_default()
            .push(finding);
        true
    }

    /// Finalize into a summary
    pub fn into_summary(self) -> DetectionSummary {
        let total: usize = self.categories.values().sum();
        DetectionSummary {
            total_detections: total,
            categories: self.categories,
            unique_pii_count: self.seen.len(),
            detailed_findings: self.findings,
        }
    }
}

fn hash_value(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::models::{Confidence, DetectionMethod};

    fn finding(value: &str, category: Category, segment: usize) -> Finding {
        Finding::new(
            value,
            category,
            DetectionMethod::Pattern,
            Confidence::Medium,
            "test",
            segment,
        )
    }

    #[test]
    fn test_first_offer_wins() {
        let mut agg = Aggregator::new(1, false);
        assert!(agg.offer(finding("a@b.com", Category::Email, 0)));
        let mut dup = finding("a@b.com", Category::Email, 0);
        dup.confidence = Confidence::High;
        assert!(!agg.offer(dup));

        let summary = agg.into_summary();
        assert_eq!(summary.unique_pii_count, 1);
        assert_eq!(summary.count(Category::Email), 1);
        assert_eq!(
            summary.detailed_findings[&0][0].confidence,
            Confidence::Medium
        );
    }

    #[test]
    fn test_empty_value_rejected() {
        let mut agg = Aggregator::new(1, false);
        assert!(!agg.offer(finding("", Category::Email, 0)));
        assert_eq!(agg.into_summary().total_detections, 0);
    }

    #[test]
    fn test_summary_invariant_holds() {
        let mut agg = Aggregator::new(2, false);
        agg.offer(finding("a@b.com", Category::Email, 0));
        agg.offer(finding("555-123-4567", Category::Phone, 1));
        agg.offer(finding("123-45-6789", Category::Ssn, 1));

        let summary = agg.into_summary();
        assert_eq!(summary.total_detections, 3);
        assert_eq!(summary.unique_pii_count, 3);
        assert_eq!(summary.categories.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_all_segments_and_categories_preseeded() {
        let agg = Aggregator::new(3, false);
        let summary = agg.into_summary();
        assert_eq!(summary.detailed_findings.len(), 3);
        assert!(summary.detailed_findings.values().all(Vec::is_empty));
        assert_eq!(summary.categories.len(), Category::ALL.len());
        assert!(summary.categories.values().all(|c| *c == 0));
    }

    #[test]
    fn test_same_value_across_segments_counted_once() {
        let mut agg = Aggregator::new(2, false);
        assert!(agg.offer(finding("a@b.com", Category::Email, 0)));
        assert!(!agg.offer(finding("a@b.com", Category::Email, 1)));

        let summary = agg.into_summary();
        assert_eq!(summary.detailed_findings[&0].len(), 1);
        assert!(summary.detailed_findings[&1].is_empty());
    }
}
