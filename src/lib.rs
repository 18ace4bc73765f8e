// Veil - Multi-strategy PII detection and redaction engine
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

//! # Veil - PII Detection and Redaction
//!
//! Veil detects personally identifiable information in free text by running
//! several independent detection strategies over the same input and merging
//! their findings, then optionally rewrites the text under a redaction policy.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Detecting** PII with regex patterns, named-entity recognition,
//!   keyword proximity analysis and co-occurrence graph correlation
//! - **Correlating** values that appear together into high-confidence clusters
//! - **Redacting** text with generic tags, partial masks, or removal
//! - **Gating** log entries behind a block/mask/log policy
//!
//! ## Architecture
//!
//! Veil follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`detection`] - Detection strategies, aggregation and the engine
//! - [`sanitize`] - Redaction policies and reporting
//! - [`domain`] - Crate-level error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use veil::config::DetectionConfig;
//! use veil::sanitize::{RedactionPolicy, Sanitizer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let sanitizer = Sanitizer::new(DetectionConfig::default())?;
//!     let outcome = sanitizer
//!         .sanitize("Reach me at jane@example.com", RedactionPolicy::Generic)
//!         .await?;
//!     println!("{}", outcome.sanitized_text);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod logging;
pub mod sanitize;

pub use detection::{DetectionEngine, DetectionSummary};
pub use sanitize::{RedactionPolicy, Sanitizer};
