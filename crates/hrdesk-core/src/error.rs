use thiserror::Error;

/// Failure taxonomy for the retrieval engine and its collaborators.
///
/// Every variant is fatal for the operation that raised it; there is no
/// retry layer. Unknown user ids are never an error anywhere in the
/// pipeline, so no variant exists for them.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("No input documents: {0}")]
    NoInput(String),

    #[error("No indexable content: {0}")]
    NoContent(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Corrupt index artifacts: {0}")]
    Corruption(String),

    #[error("Embedding dimension mismatch: index has {index_dim}, query produced {query_dim}")]
    DimensionMismatch { index_dim: usize, query_dim: usize },

    #[error("Operation failed: {0}")]
    Operation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
