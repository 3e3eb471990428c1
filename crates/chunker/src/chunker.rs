use crate::error::{ChunkerError, Result};
use crate::types::{Chunk, ChunkStats};
use ragline_model::{LanguageModel, ModelConfig, TokenizeOptions};
use unicode_segmentation::UnicodeSegmentation;

/// Tokens held back from the model's input window for the question and
/// answer text appended at generation time
pub const DEFAULT_RESERVED_MARGIN: usize = 100;

/// Splits documents into sentence-aligned chunks under a token budget.
///
/// Sentences come from UAX#29 segmentation; token counts come from the
/// collaborator tokenizer (encode-only, no truncation). Sentences
/// accumulate until the next one would overflow the budget, at which point
/// the accumulator is flushed as one chunk. A single sentence longer than
/// the whole budget still becomes its own chunk; sentences are never split
/// mid-way, so such a chunk may exceed the nominal budget.
#[derive(Debug)]
pub struct Chunker {
    budget: usize,
}

impl Chunker {
    /// Create a chunker with an explicit token budget
    pub fn new(budget: usize) -> Result<Self> {
        if budget == 0 {
            return Err(ChunkerError::EmptyBudget);
        }
        Ok(Self { budget })
    }

    /// Create a chunker for a model, reserving `reserved_margin` tokens of
    /// its input window for the question and answer appended later
    pub fn for_model(config: &ModelConfig, reserved_margin: usize) -> Result<Self> {
        let budget = config
            .max_position_embeddings
            .checked_sub(reserved_margin)
            .filter(|&budget| budget > 0)
            .ok_or(ChunkerError::MarginTooLarge {
                max_input_length: config.max_position_embeddings,
                reserved_margin,
            })?;
        Ok(Self { budget })
    }

    /// Token budget per chunk
    #[must_use]
    pub const fn budget(&self) -> usize {
        self.budget
    }

    /// Split a document into budget-respecting chunks.
    ///
    /// Every sentence of the document appears in exactly one chunk, in
    /// original order. Empty and whitespace-only documents yield no chunks.
    pub fn split<M>(&self, model: &M, document: &str) -> Result<Vec<Chunk>>
    where
        M: LanguageModel + ?Sized,
    {
        let mut chunks = Vec::new();
        let mut sentences: Vec<&str> = Vec::new();
        let mut running = 0usize;

        for sentence in document.unicode_sentences() {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }
            let count = count_tokens(model, sentence)?;

            if running + count > self.budget && !sentences.is_empty() {
                chunks.push(Chunk::new(sentences.join(" "), running));
                sentences.clear();
                sentences.push(sentence);
                running = count;
            } else {
                sentences.push(sentence);
                running += count;
            }
        }

        if !sentences.is_empty() {
            chunks.push(Chunk::new(sentences.join(" "), running));
        }

        log::debug!(
            "Split document into {} chunks (budget {})",
            chunks.len(),
            self.budget
        );
        Ok(chunks)
    }

    /// Get statistics about chunking results
    #[must_use]
    pub fn stats(chunks: &[Chunk]) -> ChunkStats {
        let total_tokens: usize = chunks.iter().map(|c| c.token_count).sum();
        ChunkStats {
            total_chunks: chunks.len(),
            total_tokens,
            avg_tokens_per_chunk: if chunks.is_empty() {
                0
            } else {
                total_tokens / chunks.len()
            },
            min_tokens: chunks.iter().map(|c| c.token_count).min().unwrap_or(0),
            max_tokens: chunks.iter().map(|c| c.token_count).max().unwrap_or(0),
        }
    }
}

fn count_tokens<M>(model: &M, sentence: &str) -> Result<usize>
where
    M: LanguageModel + ?Sized,
{
    let batch = model.tokenize(&[sentence], &TokenizeOptions::plain())?;
    Ok(batch.token_count(0))
}
