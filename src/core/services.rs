//! Unified service container
//!
//! One struct handed to every adapter: the store built once at
//! startup, the search service over it, and the loaded config.

use crate::core::config::Config;
use crate::core::documents::{sample_documents, DocumentStore};
use crate::core::search::SearchService;
use crate::core::types::Document;
use std::sync::Arc;

#[derive(Clone)]
pub struct Services {
    /// Immutable document store
    pub store: Arc<DocumentStore>,

    /// Search and fetch service
    pub search: Arc<SearchService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Services over the built-in sample knowledge base
    pub fn new(config: Config) -> Self {
        Self::with_documents(config, sample_documents())
    }

    /// Services over an explicit document set
    pub fn with_documents(config: Config, documents: Vec<Document>) -> Self {
        let store = Arc::new(DocumentStore::new(documents));
        let search = Arc::new(SearchService::new(Arc::clone(&store)));

        Self {
            store,
            search,
            config: Arc::new(config),
        }
    }
}
