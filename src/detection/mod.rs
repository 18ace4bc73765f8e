//! PII detection subsystem
//!
//! Four detection strategies over a shared category registry, orchestrated by
//! [`DetectionEngine`]: direct pattern matching, named-entity recognition,
//! keyword-window proximity analysis and co-occurrence graph correlation.
//! Results are deduplicated by literal value into a [`DetectionSummary`].

pub mod aggregator;
pub mod categories;
pub mod detectors;
pub mod engine;
pub mod gate;
pub mod models;
pub mod recognizer;

pub use categories::{Category, CategoryRegistry};
pub use engine::DetectionEngine;
pub use gate::{LogPolicy, LogVerdict};
pub use models::{
    segment_text, Confidence, DetectionMethod, DetectionSummary, Finding,
};
pub use recognizer::{EntityRecognizer, RecognizedEntity, RuleBasedRecognizer};
