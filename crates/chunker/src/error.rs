use ragline_model::ModelError;
use thiserror::Error;

/// Result type for chunking operations
pub type Result<T> = std::result::Result<T, ChunkerError>;

/// Errors that can occur while splitting documents
#[derive(Error, Debug)]
pub enum ChunkerError {
    /// Token budget of zero
    #[error("Token budget must be greater than zero")]
    EmptyBudget,

    /// Reserved margin leaves no room for document text
    #[error("Reserved margin {reserved_margin} exhausts the {max_input_length}-token input window")]
    MarginTooLarge {
        max_input_length: usize,
        reserved_margin: usize,
    },

    /// Tokenization fault from the model collaborator
    #[error(transparent)]
    Model(#[from] ModelError),
}
