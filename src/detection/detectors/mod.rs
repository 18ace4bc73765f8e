//! Detection strategies
//!
//! Each detector is a pure producer: it scans the segmented text and returns
//! its findings without touching shared state. The engine runs enabled
//! detectors in parallel and serializes their output through the aggregator.

pub mod entity;
pub mod graph;
pub mod pattern;
pub mod proximity;

use crate::detection::models::{DetectionMethod, Finding};

/// A detection strategy over segmented text
pub trait Detector: Send + Sync {
    /// Method tag stamped on this detector's findings
    fn method(&self) -> DetectionMethod;

    /// Scan all segments and report findings
    fn run(&self, segments: &[String]) -> Vec<Finding>;
}
