//! Regex pattern detector

use super::Detector;
use crate::detection::categories::CategoryRegistry;
use crate::detection::models::{Confidence, DetectionMethod, Finding};
use std::sync::Arc;

/// Applies every category's canonical regex directly to each segment
pub struct PatternDetector {
    registry: Arc<CategoryRegistry>,
}

impl PatternDetector {
    pub fn new(registry: Arc<CategoryRegistry>) -> Self {
        Self { registry }
    }
}

impl Detector for PatternDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Pattern
    }

    fn run(&self, segments: &[String]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (segment_index, segment) in segments.iter().enumerate() {
            for entry in self.registry.entries() {
                for m in entry.regex.find_iter(segment) {
                    findings.push(Finding::new(
                        m.as_str(),
                        entry.category,
                        DetectionMethod::Pattern,
                        Confidence::Medium,
                        format!("Detected by regex pattern for {}", entry.category),
                        segment_index,
                    ));
                }
            }
        }
        findings
    }
}
