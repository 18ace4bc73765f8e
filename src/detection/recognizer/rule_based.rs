//! Built-in rule-based recognizer backend

use super::{EntityLabel, EntityRecognizer, RecognizedEntity};
use crate::domain::{Result, VeilError};
use regex::Regex;

/// Heuristic recognizer covering the four required labels
///
/// Spans are derived from capitalization and shape rules, which is noisy by
/// nature; the pipeline treats every backend as best-effort. Construction is
/// fallible and failure is fatal at startup.
pub struct RuleBasedRecognizer {
    org: Regex,
    location: Regex,
    date: Regex,
    person: Regex,
}

impl RuleBasedRecognizer {
    pub fn new() -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern)
                .map_err(|e| VeilError::Recognizer(format!("Invalid recognizer rule: {e}")))
        };

        Ok(Self {
            org: compile(
                r"\b[A-Z][A-Za-z&-]*(?:\s+[A-Z][A-Za-z&-]*)*\s+(?:Inc|LLC|Ltd|Corp|Corporation|Company)\b",
            )?,
            location: compile(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+)*,\s[A-Z]{2}\b")?,
            date: compile(
                r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b|\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}/\d{1,2}/\d{4}\b",
            )?,
            person: compile(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b")?,
        })
    }

    fn rules(&self) -> [(&Regex, EntityLabel); 4] {
        // Order doubles as overlap priority: more specific shapes win.
        [
            (&self.org, EntityLabel::Organization),
            (&self.location, EntityLabel::Location),
            (&self.date, EntityLabel::Date),
            (&self.person, EntityLabel::Person),
        ]
    }
}

impl EntityRecognizer for RuleBasedRecognizer {
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut candidates: Vec<(usize, usize, usize, EntityLabel)> = Vec::new();
        for (priority, (regex, label)) in self.rules().into_iter().enumerate() {
            for m in regex.find_iter(text) {
                candidates.push((m.start(), m.end(), priority, label));
            }
        }

        // Resolve overlaps: earliest start, then strongest rule, then longest.
        candidates.sort_by(|a, b| {
            a.0.cmp(&b.0)
                .then(a.2.cmp(&b.2))
                .then(b.1.cmp(&a.1))
        });

        let mut entities: Vec<RecognizedEntity> = Vec::new();
        let mut last_end = 0usize;
        for (start, end, _, label) in candidates {
            if start < last_end {
                continue;
            }
            entities.push(RecognizedEntity {
                text: text[start..end].to_string(),
                label,
                start,
                end,
            });
            last_end = end;
        }

        entities
    }
}
