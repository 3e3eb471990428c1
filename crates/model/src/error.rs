use thiserror::Error;

/// Result type for model collaborator operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors surfaced by a [`LanguageModel`](crate::LanguageModel) backend
#[derive(Error, Debug)]
pub enum ModelError {
    /// Decoding convention string was not one of the supported values
    #[error("Unsupported decoding convention '{0}' (expected 'seq2seq' or 'causal')")]
    UnsupportedConvention(String),

    /// Tokenization failed
    #[error("Tokenization failed: {0}")]
    Tokenization(String),

    /// Token-to-text decoding failed
    #[error("Decoding failed: {0}")]
    Decoding(String),

    /// Text generation failed
    #[error("Generation failed: {0}")]
    Generation(String),

    /// Hidden states did not match the model's advertised hidden size
    #[error("Invalid hidden size: expected {expected}, got {actual}")]
    InvalidHiddenSize { expected: usize, actual: usize },

    /// Generic error
    #[error("{0}")]
    Other(String),
}
