//! Immutable in-memory document store.
//!
//! The store is built once at process start from static definitions
//! and injected into services; it is never mutated afterwards, so it
//! is safe for unsynchronized concurrent reads.

use std::collections::{BTreeMap, HashMap};

use crate::core::types::Document;

/// Ordered document collection with a derived id lookup
///
/// Iteration order is definition order; `get` is O(1) via the
/// derived index. Absent lookup is a normal outcome, not an error.
pub struct DocumentStore {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

impl DocumentStore {
    /// Build a store from a document sequence
    ///
    /// The id index is derived here and never rebuilt.
    pub fn new(documents: Vec<Document>) -> Self {
        let index = documents
            .iter()
            .enumerate()
            .map(|(pos, doc)| (doc.id.clone(), pos))
            .collect();

        Self { documents, index }
    }

    /// All documents in definition order
    pub fn all(&self) -> &[Document] {
        &self.documents
    }

    /// Look up a document by id
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.index.get(id).map(|&pos| &self.documents[pos])
    }

    /// Number of documents in the store
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new(sample_documents())
    }
}

fn metadata(pairs: &[(&str, &str)]) -> Option<BTreeMap<String, String>> {
    Some(
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    )
}

/// The built-in sample knowledge base (5 documents)
pub fn sample_documents() -> Vec<Document> {
    vec![
        Document {
            id: "doc1".to_string(),
            title: "Python Best Practices".to_string(),
            text: "Python best practices include using virtual environments, type hints, \
                   and docstrings. Virtual environments help isolate project dependencies, \
                   type hints improve code readability and catch errors early, and docstrings \
                   provide essential documentation for functions and classes."
                .to_string(),
            url: None,
            metadata: metadata(&[("category", "programming"), ("language", "python")]),
        },
        Document {
            id: "doc2".to_string(),
            title: "FastAPI Overview".to_string(),
            text: "FastAPI is a modern web framework for building APIs with Python 3.7+. \
                   It provides automatic API documentation, type validation, and high \
                   performance through async/await support."
                .to_string(),
            url: None,
            metadata: metadata(&[("category", "framework"), ("language", "python")]),
        },
        Document {
            id: "doc3".to_string(),
            title: "Database Design".to_string(),
            text: "Good database design involves normalization, indexing, and proper \
                   relationships. Normalization reduces redundancy, indexes improve query \
                   performance, and proper relationships maintain data integrity."
                .to_string(),
            url: None,
            metadata: metadata(&[("category", "database"), ("topic", "design")]),
        },
        Document {
            id: "doc4".to_string(),
            title: "Security Guidelines".to_string(),
            text: "Always validate input, use HTTPS, and follow the principle of least \
                   privilege. Input validation prevents injection attacks, HTTPS encrypts \
                   data in transit, and least privilege limits potential damage from breaches."
                .to_string(),
            url: None,
            metadata: metadata(&[("category", "security"), ("topic", "guidelines")]),
        },
        Document {
            id: "doc5".to_string(),
            title: "Testing Strategies".to_string(),
            text: "Include unit tests, integration tests, and end-to-end tests in your \
                   test suite. Unit tests verify individual components, integration tests \
                   check component interactions, and end-to-end tests validate complete \
                   workflows."
                .to_string(),
            url: None,
            metadata: metadata(&[("category", "testing"), ("topic", "strategies")]),
        },
    ]
}
