//! Named-entity detector

use super::Detector;
use crate::detection::models::{Confidence, DetectionMethod, Finding};
use crate::detection::recognizer::EntityRecognizer;
use std::sync::Arc;

/// Maps recognizer labels onto PII categories, one finding per entity
pub struct EntityDetector {
    recognizer: Arc<dyn EntityRecognizer>,
}

impl EntityDetector {
    pub fn new(recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { recognizer }
    }
}

impl Detector for EntityDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Entity
    }

    fn run(&self, segments: &[String]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (segment_index, segment) in segments.iter().enumerate() {
            for entity in self.recognizer.recognize(segment) {
                findings.push(Finding::new(
                    entity.text,
                    entity.label.category(),
                    DetectionMethod::Entity,
                    Confidence::Medium,
                    format!("Detected by NER as {}", entity.label),
                    segment_index,
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::categories::Category;
    use crate::detection::models::segment_text;
    use crate::detection::recognizer::RuleBasedRecognizer;

    fn detector() -> EntityDetector {
        EntityDetector::new(Arc::new(RuleBasedRecognizer::new().unwrap()))
    }

    fn segments(text: &str) -> Vec<String> {
        segment_text(text).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_person_maps_to_names() {
        let findings = detector().run(&segments("Please call John Smith back"));
        let person = findings.iter().find(|f| f.value == "John Smith").unwrap();
        assert_eq!(person.category, Category::Names);
        assert_eq!(person.reason, "Detected by NER as PERSON");
        assert_eq!(person.confidence, Confidence::Medium);
    }

    #[test]
    fn test_org_maps_to_sensitive_words() {
        let findings = detector().run(&segments("Invoice issued by Globex Corp yesterday"));
        assert!(findings
            .iter()
            .any(|f| f.category == Category::SensitiveWords && f.reason == "Detected by NER as ORG"));
    }

    #[test]
    fn test_entities_are_per_segment() {
        let findings = detector().run(&segments("we met Jane Doe. then we met Mary Major today"));
        let jane = findings.iter().find(|f| f.value == "Jane Doe").unwrap();
        let mary = findings.iter().find(|f| f.value == "Mary Major").unwrap();
        assert_eq!(jane.segment_index, 0);
        assert_eq!(mary.segment_index, 1);
    }
}
