//! Co-occurrence graph correlation detector

use super::Detector;
use crate::detection::categories::{Category, CategoryRegistry};
use crate::detection::models::{Confidence, DetectionMethod, Finding};
use crate::detection::recognizer::{EntityLabel, EntityRecognizer};
use std::collections::HashMap;
use std::sync::Arc;

/// Promotes values that co-occur with other PII to high confidence
///
/// Per segment, the first email, phone, SSN and person-name are extracted;
/// segments holding two or more of these fully connect them in a global
/// undirected graph. Every value in a connected component of size >= 2 is
/// reported, with its category re-derived from the value's own shape.
/// Values that fit no canonical pattern are silently dropped.
pub struct GraphDetector {
    registry: Arc<CategoryRegistry>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl GraphDetector {
    pub fn new(registry: Arc<CategoryRegistry>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self {
            registry,
            recognizer,
        }
    }

    fn first_match(&self, category: Category, segment: &str) -> Option<String> {
        self.registry
            .get(category)?
            .regex
            .find(segment)
            .map(|m| m.as_str().to_string())
    }

    fn extract_record(&self, segment: &str) -> Vec<String> {
        let mut record = Vec::new();
        if let Some(email) = self.first_match(Category::Email, segment) {
            record.push(email);
        }
        if let Some(phone) = self.first_match(Category::Phone, segment) {
            record.push(phone);
        }
        if let Some(ssn) = self.first_match(Category::Ssn, segment) {
            record.push(ssn);
        }
        if let Some(name) = self
            .recognizer
            .recognize(segment)
            .into_iter()
            .find(|e| e.label == EntityLabel::Person)
        {
            record.push(name.text);
        }
        record
    }
}

impl Detector for GraphDetector {
    fn method(&self) -> DetectionMethod {
        DetectionMethod::Graph
    }

    fn run(&self, segments: &[String]) -> Vec<Finding> {
        let mut graph = CooccurrenceGraph::default();
        for segment in segments {
            graph.connect_all(&self.extract_record(segment));
        }

        let mut findings = Vec::new();
        for component in graph.connected_components() {
            if component.len() < 2 {
                continue;
            }
            for value in &component {
                let Some(category) = self.registry.classify(value) else {
                    // Unclassifiable correlated values (names, mostly) drop out.
                    continue;
                };
                let Some(segment_index) =
                    segments.iter().position(|s| s.contains(value.as_str()))
                else {
                    continue;
                };
                findings.push(Finding::new(
                    value.clone(),
                    category,
                    DetectionMethod::Graph,
                    Confidence::High,
                    format!("Found in cluster with {} other PII items", component.len() - 1),
                    segment_index,
                ));
            }
        }
        findings
    }
}

/// Undirected co-occurrence graph over literal PII values
///
/// Node order is insertion order, which keeps component enumeration
/// deterministic.
#[derive(Default)]
struct CooccurrenceGraph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
}

impl CooccurrenceGraph {
    fn intern(&mut self, value: &str) -> usize {
        if let Some(&i) = self.index.get(value) {
            return i;
        }
        let i = self.nodes.len();
        self.nodes.push(value.to_string());
        self.index.insert(value.to_string(), i);
        self.adjacency.push(Vec::new());
        i
    }

    /// Add an edge between every pair of values found together
    fn connect_all(&mut self, record: &[String]) {
        for i in 0..record.len() {
            for j in (i + 1)..record.len() {
                let a = self.intern(&record[i]);
                let b = self.intern(&record[j]);
                if a != b {
                    self.adjacency[a].push(b);
                    self.adjacency[b].push(a);
                }
            }
        }
    }

    fn connected_components(&self) -> Vec<Vec<String>> {
        let mut visited = vec![false; self.nodes.len()];
        let mut components = Vec::new();

        for start in 0..self.nodes.len() {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut component = Vec::new();
            let mut queue = std::collections::VecDeque::from([start]);
            while let Some(node) = queue.pop_front() {
                component.push(self.nodes[node].clone());
                for &next in &self.adjacency[node] {
                    if !visited[next] {
                        visited[next] = true;
                        queue.push_back(next);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
