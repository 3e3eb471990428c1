use crate::config::RagConfig;
use crate::embedder::{cosine_similarity, Embedder};
use crate::error::{RagError, Result};
use crate::summarize::Summarizer;
use ragline_chunker::Chunker;
use ragline_model::{DecodingConvention, LanguageModel};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of one ingestion call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Chunks appended by this call
    pub chunks_added: usize,

    /// Cumulative chunks held by the store
    pub total_chunks: usize,
}

/// In-memory, append-only store of chunk texts and their embeddings.
///
/// Two parallel sequences, `texts` and `embeddings`, stay the same length
/// at all times: ingestion embeds every pending chunk first and mutates the
/// store only once the whole batch succeeded. Nothing is persisted; the
/// store lives and dies with the process. There is no internal locking, so
/// callers using it from several threads serialize `add` and `query`
/// themselves.
#[derive(Debug)]
pub struct RagStore<M> {
    model: Arc<M>,
    texts: Vec<String>,
    embeddings: Vec<Vec<f32>>,
    chunker: Chunker,
    embedder: Embedder<M>,
    summarizer: Summarizer<M>,
    top_k: usize,
    summary_max_length: usize,
}

impl<M: LanguageModel> RagStore<M> {
    /// Create an empty store for a model under the given decoding
    /// convention.
    pub fn new(model: Arc<M>, convention: DecodingConvention, config: &RagConfig) -> Result<Self> {
        config.validate().map_err(RagError::InvalidConfig)?;
        let chunker = Chunker::for_model(model.config(), config.reserved_margin)?;

        Ok(Self {
            texts: Vec::new(),
            embeddings: Vec::new(),
            chunker,
            embedder: Embedder::new(model.clone(), convention, config.embed_max_length),
            summarizer: Summarizer::new(model.clone(), convention, config.embed_max_length),
            top_k: config.top_k,
            summary_max_length: config.summary_max_length,
            model,
        })
    }

    /// Chunk, optionally summarize, embed, and append documents.
    ///
    /// Chunk order and the text/embedding index correspondence are
    /// preserved. Faults propagate unmodified, and a failed call leaves the
    /// store exactly as it was.
    pub fn add(&mut self, documents: &[&str], use_summaries: bool) -> Result<IngestReport> {
        let mut pending: Vec<String> = Vec::new();
        for document in documents {
            for chunk in self.chunker.split(self.model.as_ref(), document)? {
                let text = if use_summaries {
                    self.summarizer
                        .summarize(&chunk.text, self.summary_max_length)?
                } else {
                    chunk.text
                };
                pending.push(text);
            }
        }

        // Embed before touching the store so a failure cannot leave the
        // parallel sequences out of step.
        let contents: Vec<&str> = pending.iter().map(String::as_str).collect();
        let vectors = self.embedder.embed_batch(&contents)?;

        let chunks_added = pending.len();
        self.texts.extend(pending);
        self.embeddings.extend(vectors);

        log::info!(
            "Added {} chunks from {} documents (total {})",
            chunks_added,
            documents.len(),
            self.texts.len()
        );
        Ok(IngestReport {
            chunks_added,
            total_chunks: self.texts.len(),
        })
    }

    /// Retrieve the `k` stored chunks most similar to the question, joined
    /// with single spaces in descending-similarity order.
    ///
    /// `k` is clamped to the store size; an empty store yields an empty
    /// string.
    pub fn query(&self, question: &str, k: usize) -> Result<String> {
        if self.texts.is_empty() {
            log::debug!("Query against empty store; returning no context");
            return Ok(String::new());
        }

        let query_vector = self.embedder.embed(question)?;
        let mut scored: Vec<(usize, f32)> = self
            .embeddings
            .iter()
            .enumerate()
            .map(|(idx, vector)| (idx, cosine_similarity(&query_vector, vector)))
            .collect();
        // Exact ties resolve to the earlier stored chunk.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        scored.truncate(k.min(self.texts.len()));

        log::debug!("Query '{question}' matched {} chunks", scored.len());
        let hits: Vec<&str> = scored
            .iter()
            .map(|&(idx, _)| self.texts[idx].as_str())
            .collect();
        Ok(hits.join(" "))
    }

    /// Retrieve with the configured default `top_k`
    pub fn context_for(&self, question: &str) -> Result<String> {
        self.query(question, self.top_k)
    }

    /// Number of stored chunks
    #[must_use]
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether the store holds no chunks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Configured default retrieval size
    #[must_use]
    pub const fn top_k(&self) -> usize {
        self.top_k
    }
}
