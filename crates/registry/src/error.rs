//! Error types for registry persistence.

use modshelf_json_store::StoreError;

/// Errors produced while loading or saving the games registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    #[error("games entry {index} is malformed: {source}")]
    MalformedEntry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
