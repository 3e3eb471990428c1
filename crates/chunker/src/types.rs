use serde::{Deserialize, Serialize};

/// A sentence-aligned, token-budget-bounded slice of a source document.
///
/// Immutable once produced; identified only by its position in whatever
/// sequence holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Chunk text: its sentences joined with single spaces
    pub text: String,

    /// Token count accumulated from the collaborator tokenizer, one
    /// sentence at a time
    pub token_count: usize,
}

impl Chunk {
    #[must_use]
    pub fn new(text: String, token_count: usize) -> Self {
        Self { text, token_count }
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone)]
pub struct ChunkStats {
    pub total_chunks: usize,
    pub total_tokens: usize,
    pub avg_tokens_per_chunk: usize,
    pub min_tokens: usize,
    pub max_tokens: usize,
}

impl std::fmt::Display for ChunkStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Tokens: {} | Avg: {} | Range: {}-{}",
            self.total_chunks,
            self.total_tokens,
            self.avg_tokens_per_chunk,
            self.min_tokens,
            self.max_tokens
        )
    }
}
