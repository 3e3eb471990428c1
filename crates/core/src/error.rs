use ragline_chunker::ChunkerError;
use ragline_model::ModelError;
use thiserror::Error;

/// Result type for retrieval and answering operations
pub type Result<T> = std::result::Result<T, RagError>;

/// Errors surfaced by the retrieval/answering pipeline.
///
/// Only the ingestion and retrieval paths return these; the answer path
/// converts every fault into a textual or structured error value instead.
#[derive(Error, Debug)]
pub enum RagError {
    /// Invalid pipeline configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Embedding error
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Embedding dimensionality did not match the model hidden size
    #[error("Invalid embedding dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    /// Fault from the model collaborator
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Fault from document chunking
    #[error(transparent)]
    Chunker(#[from] ChunkerError),
}
