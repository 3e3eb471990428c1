use ragline_chunker::DEFAULT_RESERVED_MARGIN;
use serde::{Deserialize, Serialize};

/// Configuration for the retrieval/answering pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RagConfig {
    /// Tokens held back from the model input window when chunking, leaving
    /// room for the question and answer appended at generation time
    pub reserved_margin: usize,

    /// Truncation length for embedding, summarization, and prompt
    /// tokenization
    pub embed_max_length: usize,

    /// Number of chunks retrieved as context per query
    pub top_k: usize,

    /// Generation budget for chunk summaries during ingestion
    pub summary_max_length: usize,
}

impl Default for RagConfig {
    fn default() -> Self {
        Self {
            reserved_margin: DEFAULT_RESERVED_MARGIN,
            embed_max_length: 512,
            top_k: 3,
            summary_max_length: 100,
        }
    }
}

impl RagConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.embed_max_length == 0 {
            return Err("embed_max_length must be > 0".to_string());
        }
        if self.top_k == 0 {
            return Err("top_k must be > 0".to_string());
        }
        if self.summary_max_length == 0 {
            return Err("summary_max_length must be > 0".to_string());
        }
        Ok(())
    }
}
