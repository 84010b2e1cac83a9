//! Error types for a catalog run

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that abort the whole run
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No candidate `*.html` file under the root
    #[error("No .html files found under {}", root.display())]
    NoHtmlFiles { root: PathBuf },

    #[error("Failed to hash {}: {source}", path.display())]
    Hash {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read metadata of {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
