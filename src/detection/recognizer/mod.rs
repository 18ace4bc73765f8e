//! Pluggable named-entity recognition capability
//!
//! The entity detector and the correlation detector consume any backend
//! implementing [`EntityRecognizer`] with the four required labels. The
//! built-in [`RuleBasedRecognizer`] is a heuristic backend; accuracy of
//! entity findings is bounded by whichever backend is plugged in.

pub mod rule_based;

pub use rule_based::RuleBasedRecognizer;

use crate::detection::categories::Category;
use std::fmt;

/// Entity labels the detection pipeline understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
    Location,
    Date,
}

impl EntityLabel {
    /// Wire label, matching common NER tag sets
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Organization => "ORG",
            Self::Location => "GPE",
            Self::Date => "DATE",
        }
    }

    /// PII category this label maps onto
    pub fn category(&self) -> Category {
        match self {
            Self::Person => Category::Names,
            Self::Organization => Category::SensitiveWords,
            Self::Location => Category::Addresses,
            Self::Date => Category::Dates,
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled span produced by a recognizer backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizedEntity {
    /// Exact entity text
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the span start within the scanned text
    pub start: usize,
    /// Byte offset one past the span end
    pub end: usize,
}

/// Named-entity recognition backend
///
/// Backends must return non-overlapping spans ordered by start offset.
/// Read-only and safely shareable across concurrent detection calls.
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_category_mapping() {
        assert_eq!(EntityLabel::Person.category(), Category::Names);
        assert_eq!(EntityLabel::Date.category(), Category::Dates);
        assert_eq!(EntityLabel::Location.category(), Category::Addresses);
        assert_eq!(EntityLabel::Organization.category(), Category::SensitiveWords);
    }

    #[test]
    fn test_label_wire_names() {
        assert_eq!(EntityLabel::Person.as_str(), "PERSON");
        assert_eq!(EntityLabel::Organization.as_str(), "ORG");
        assert_eq!(EntityLabel::Location.as_str(), "GPE");
        assert_eq!(EntityLabel::Date.as_str(), "DATE");
    }
}
