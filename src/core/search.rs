//! Substring search and document fetch.
//!
//! The search contract is deliberately simple: a case-insensitive
//! substring scan over title, full text, and metadata values. There
//! is no ranking or scoring; results preserve store order.

use std::sync::Arc;

use crate::core::documents::DocumentStore;
use crate::core::error::{DocbaseError, Result};
use crate::core::types::{Document, SearchResponse, SearchResult};

/// Maximum snippet length in characters (not bytes)
pub const SNIPPET_MAX_CHARS: usize = 200;

/// Search and fetch over an immutable document store
pub struct SearchService {
    store: Arc<DocumentStore>,
}

impl SearchService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// Case-insensitive substring search
    ///
    /// A document matches when the lowercased query is a substring of
    /// the lowercased concatenation of its title, text, and metadata
    /// values. The empty query matches every document.
    pub fn search(&self, query: &str) -> SearchResponse {
        let needle = query.to_lowercase();

        let results = self
            .store
            .all()
            .iter()
            .filter(|doc| searchable_text(doc).contains(&needle))
            .map(|doc| SearchResult {
                id: doc.id.clone(),
                title: doc.title.clone(),
                text: snippet(&doc.text),
                url: doc.url.clone(),
            })
            .collect();

        SearchResponse { results }
    }

    /// Fetch a document by id
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: id is empty
    /// - `DocumentNotFound`: id is not in the store
    pub fn fetch(&self, id: &str) -> Result<Document> {
        if id.is_empty() {
            return Err(DocbaseError::InvalidArgument(
                "Document ID is required".to_string(),
            ));
        }

        self.store
            .get(id)
            .cloned()
            .ok_or_else(|| DocbaseError::DocumentNotFound(id.to_string()))
    }
}

/// Lowercased haystack: title, text, and metadata values joined by spaces
fn searchable_text(doc: &Document) -> String {
    let mut haystack = doc.title.to_lowercase();
    haystack.push(' ');
    haystack.push_str(&doc.text.to_lowercase());

    if let Some(metadata) = &doc.metadata {
        for value in metadata.values() {
            haystack.push(' ');
            haystack.push_str(&value.to_lowercase());
        }
    }

    haystack
}

/// Truncate text to the snippet limit at a character boundary
fn snippet(text: &str) -> String {
    if text.chars().count() <= SNIPPET_MAX_CHARS {
        return text.to_string();
    }

    let truncated: String = text.chars().take(SNIPPET_MAX_CHARS).collect();
    format!("{truncated}...")
}
