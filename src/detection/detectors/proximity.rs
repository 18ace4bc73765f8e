//! Keyword-window proximity analyzer

use super::Detector;
use crate::detection::categories::CategoryRegistry;
use crate::detection::models::{Confidence, DetectionMethod, Finding};
use std::sync::Arc;

/// Rescans pattern matches and grades them by nearby trigger keywords
///
/// A window of `window_size` characters on each side of a match is searched
/// for the category's keywords as whole words, case-insensitively. A hit
/// yields High confidence, a miss yields Low; absence of a keyword is never a
/// rejection.
pub struct ProximityDetector {
    registry: Arc<CategoryRegistry>,
    window_size: usize,
}

impl ProximityDetector {
    pub fn new(registry: Arc<CategoryRegistry>, window_size: usize) -> Self {
        Self {
            registry,
            window_size,
        }
    }

    /// Text spanning `window_size` characters on each side of a match
    ///
    /// Counted in characters, not bytes, so multibyte text gets the same
    /// reach as ASCII.
    fn window<'a>(&self, text: &'a str, start: usize, end: usize) -> &'a str {
        let ws = match self.window_size.checked_sub(1) {
            Some(back) => text[..start]
                .char_indices()
                .rev()
                .nth(back)
                .map_or(0, |(i, _)| i),
            None => start,
        };
        let we = text[end..]
            .char_indices()
            .nth(self.window_size)
            .map_or(text.len(), |(i, _)| end + i);
        &text[ws..we]
    }
}

impl Detector for ProximityDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Proximity
    }

    fn run(&self, segments: &[String]) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (segment_index, segment) in segments.iter().enumerate() {
            for entry in self.registry.proximity_entries() {
                for m in entry.regex_ci.find_iter(segment) {
                    let window = self.window(segment, m.start(), m.end());
                    let triggered = entry.keywords.iter().find(|kw| kw.is_present(window));

                    let (confidence, reason) = match triggered {
                        Some(kw) => (
                            Confidence::High,
                            format!("Found nearby keyword: '{}'", kw.text),
                        ),
                        None => (Confidence::Low, "No nearby keywords found.".to_string()),
                    };

                    findings.push(Finding::new(
                        m.as_str(),
                        entry.category,
                        DetectionMethod::Proximity,
                        confidence,
                        reason,
                        segment_index,
                    ));
                }
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

    fn detector() -> ProximityDetector {
        ProximityDetector::new(Arc::new(CategoryRegistry::builtin().unwrap()), 50)
    }

    fn segments(text: &str) -> Vec<String> {
        segment_text(text).into_iter().map(String::from).collect()
    }

    #[test]
    fn test_keyword_in_window_yields_high() {
        let findings = detector().run(&segments("My SSN is 123-45-6789"));
        let ssn = findings
            .iter()
            .find(|f| f.category == Category::Ssn)
            .unwrap();
        assert_eq!(ssn.confidence, Confidence::High);
        assert_eq!(ssn.reason, "Found nearby keyword: 'ssn'");
    }

    #[test]
    fn test_no_keyword_yields_low_not_rejection() {
        let findings = detector().run(&segments("Model number: 987-65-4321 is now in stock."));
        let shaped = findings
            .iter()
            .find(|f| f.category == Category::Ssn)
            .unwrap();
        assert_eq!(shaped.value, "987-65-4321");
        assert_eq!(shaped.confidence, Confidence::Low);
        assert_eq!(shaped.reason, "No nearby keywords found.");
    }

    #[test]
    fn test_keyword_outside_window_is_ignored() {
        let padding = "x".repeat(80);
        let text = format!("social security {padding} 123-45-6789");
        let findings = detector().run(&segments(&text));
        let ssn = findings
            .iter()
            .find(|f| f.category == Category::Ssn)
            .unwrap();
        assert_eq!(ssn.confidence, Confidence::Low);
    }

    #[test]
    fn test_window_is_measured_in_characters() {
        // 45 chars (85 bytes) separate the keyword from the match start; a
        // byte-counted window would fall short of it.
        let text = format!("ssn {} 123-45-6789", "é".repeat(40));
        let findings = detector().run(&segments(&text));
        let ssn = findings
            .iter()
            .find(|f| f.category == Category::Ssn)
            .unwrap();
        assert_eq!(ssn.confidence, Confidence::High);
        assert_eq!(ssn.reason, "Found nearby keyword: 'ssn'");
    }

    #[test]
    fn test_trailing_window_is_measured_in_characters() {
        let text = format!("123-45-6789 {} ssn", "é".repeat(40));
        let findings = detector().run(&segments(&text));
        let ssn = findings
            .iter()
            .find(|f| f.category == Category::Ssn)
            .unwrap();
        assert_eq!(ssn.confidence, Confidence::High);
    }

    #[test]
    fn test_multibyte_padding_on_both_sides() {
        let text = format!("{} 123-45-6789 {}", "é".repeat(40), "ü".repeat(40));
        let findings = detector().run(&segments(&text));
        let ssn = findings
            .iter()
            .find(|f| f.category == Category::Ssn)
            .unwrap();
        assert_eq!(ssn.confidence, Confidence::Low);
    }

    #[test]
    fn test_only_keyworded_categories_are_scanned() {
        // ADDRESSES owns a pattern but no keyword list, so proximity skips it.
        let findings = detector().run(&segments("warehouse at 12 Elm Street"));
        assert!(!findings.iter().any(|f| f.category == Category::Addresses));
    }
}
