// Test fixtures

use std::collections::BTreeMap;

use docbase::core::types::Document;

/// Ids of the built-in sample documents, in store order
#[allow(dead_code)]
pub const SAMPLE_DOC_IDS: [&str; 5] = ["doc1", "doc2", "doc3", "doc4", "doc5"];

/// A small custom document set for store-shape tests
#[allow(dead_code)]
pub fn tiny_document_set() -> Vec<Document> {
    let mut metadata = BTreeMap::new();
    metadata.insert("category".to_string(), "fixtures".to_string());

    vec![
        Document {
            id: "alpha".to_string(),
            title: "Alpha".to_string(),
            text: "First fixture document.".to_string(),
            url: Some("https://example.com/alpha".to_string()),
            metadata: Some(metadata),
        },
        Document {
            id: "beta".to_string(),
            title: "Beta".to_string(),
            text: "Second fixture document.".to_string(),
            url: None,
            metadata: None,
        },
    ]
}
