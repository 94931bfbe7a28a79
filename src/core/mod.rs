//! Protocol-agnostic domain logic
//!
//! Everything the adapters share: configuration, the error taxonomy,
//! the immutable document store, and the search/fetch operations.
//! Nothing in here knows about HTTP or JSON-RPC.

pub mod config;
pub mod documents;
pub mod error;
pub mod search;
pub mod services;
pub mod types;

pub use config::Config;
pub use documents::DocumentStore;
pub use error::{DocbaseError, Result};
pub use search::SearchService;
pub use services::Services;
