//! Detection engine
//!
//! Orchestrates the four detection strategies over one input text and folds
//! their findings into a single deduplicated [`DetectionSummary`].
//!
//! # Concurrency
//!
//! Detectors are CPU-bound regex scans that never suspend, so each enabled
//! detector runs to completion on a blocking task over the same immutable
//! segments. The engine awaits every task (join barrier) and only then feeds
//! one sequential aggregator in fixed detector order: entity, pattern,
//! proximity, graph. Dedup is therefore atomic per value and the tie-break
//! between detectors is deterministic and observable.

use crate::config::DetectionConfig;
use crate::detection::aggregator::Aggregator;
use crate::detection::categories::CategoryRegistry;
use crate::detection::detectors::{
    entity::EntityDetector, graph::GraphDetector, pattern::PatternDetector,
    proximity::ProximityDetector, Detector,
};
use crate::detection::models::{segment_text, DetectionMethod, DetectionSummary};
use crate::detection::recognizer::{EntityRecognizer, RuleBasedRecognizer};
use anyhow::{anyhow, Context, Result};
use std::sync::Arc;
use std::time::Instant;

/// Multi-strategy PII detection engine
///
/// The registry and recognizer are read-only and shared across concurrent
/// calls; each call owns its aggregation state, and nothing persists between
/// calls.
pub struct DetectionEngine {
    config: DetectionConfig,
    registry: Arc<CategoryRegistry>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl DetectionEngine {
    /// Create an engine with the built-in pattern library and recognizer
    ///
    /// Registry or recognizer failure here is fatal: no engine is handed out
    /// that could produce partial summaries.
    pub fn new(config: DetectionConfig) -> Result<Self> {
        let recognizer: Arc<dyn EntityRecognizer> = Arc::new(
            RuleBasedRecognizer::new().context("Failed to initialize entity recognizer")?,
        );
        Self::with_recognizer(config, recognizer)
    }

    /// Create an engine with a custom recognizer backend
    pub fn with_recognizer(
        config: DetectionConfig,
        recognizer: Arc<dyn EntityRecognizer>,
    ) -> Result<Self> {
        config
            .validate()
            .context("Invalid detection configuration")?;
        let registry =
            Arc::new(CategoryRegistry::builtin().context("Failed to load pattern library")?);
        Ok(Self {
            config,
            registry,
            recognizer,
        })
    }

    /// Shared category registry
    pub fn registry(&self) -> &Arc<CategoryRegistry> {
        &self.registry
    }

    /// Run a full detection pass over one input string
    pub async fn detect(&self, text: &str) -> Result<DetectionSummary> {
        let start = Instant::now();
        let segments: Arc<Vec<String>> = Arc::new(
            segment_text(text)
                .into_iter()
                .map(String::from)
                .collect(),
        );

        let mut detectors: Vec<Arc<dyn Detector>> = vec![
            Arc::new(EntityDetector::new(Arc::clone(&self.recognizer))),
            Arc::new(PatternDetector::new(Arc::clone(&self.registry))),
        ];
        if self.config.enable_proximity {
            detectors.push(Arc::new(ProximityDetector::new(
                Arc::clone(&self.registry),
                self.config.window_size,
            )));
        }
        if self.config.enable_graph {
            detectors.push(Arc::new(GraphDetector::new(
                Arc::clone(&self.registry),
                Arc::clone(&self.recognizer),
            )));
        }

        let mut handles = Vec::with_capacity(detectors.len());
        for detector in &detectors {
            let detector = Arc::clone(detector);
            let segments = Arc::clone(&segments);
            handles.push(tokio::task::spawn_blocking(move || detector.run(&segments)));
        }

        // Join barrier: aggregation starts only after every detector is done.
        let results = futures::future::join_all(handles).await;

        let mut aggregator = Aggregator::new(segments.len(), self.config.debug);
        for (detector, result) in detectors.iter().zip(results) {
            let findings = match result {
                Ok(findings) => findings,
                Err(e) if detector.method() == DetectionMethod::Graph => {
                    tracing::warn!(
                        error = %e,
                        "Graph analysis failed, continuing without graph findings"
                    );
                    Vec::new()
                }
                Err(e) => {
                    return Err(anyhow!("{} detector task failed: {e}", detector.method()))
                }
            };
            for finding in findings {
                aggregator.offer(finding);
            }
        }

        let summary = aggregator.into_summary();
        tracing::debug!(
            segments = segments.len(),
            unique_pii = summary.unique_pii_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Detection pass complete"
        );
        Ok(summary)
    }
}
