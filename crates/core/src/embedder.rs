use crate::error::{RagError, Result};
use ndarray::{ArrayView1, ArrayView2, Axis};
use ragline_model::{DecodingConvention, LanguageModel, TokenizeOptions};
use std::sync::Arc;

/// Converts text into fixed-size vectors via the model's representation
/// capability.
///
/// The batch is tokenized with padding and truncation, run through the
/// hidden-state path matching the model family (encoder sub-module for
/// seq2seq, full forward pass for causal), and mean-pooled over the token
/// axis. Padding positions are masked out of the mean, so embedding a batch
/// is numerically identical to embedding each text alone.
#[derive(Debug)]
pub struct Embedder<M> {
    model: Arc<M>,
    convention: DecodingConvention,
    max_length: usize,
}

impl<M: LanguageModel> Embedder<M> {
    #[must_use]
    pub fn new(model: Arc<M>, convention: DecodingConvention, max_length: usize) -> Self {
        Self {
            model,
            convention,
            max_length,
        }
    }

    /// Embedding dimensionality (the model hidden size)
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.model.config().hidden_size
    }

    /// Embed a single text
    pub fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.embed_batch(&[text])?;
        embeddings
            .pop()
            .ok_or_else(|| RagError::Embedding("Empty embedding result".to_string()))
    }

    /// Embed a batch of texts, one vector per input in order
    pub fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(vec![]);
        }

        let batch = self.model.tokenize(
            texts,
            &TokenizeOptions::padded_and_truncated(self.max_length),
        )?;
        let hidden = match self.convention {
            DecodingConvention::Seq2Seq => self.model.encode(&batch)?,
            DecodingConvention::Causal => self.model.forward(&batch)?,
        };

        let expected = self.dimension();
        let mut out = Vec::with_capacity(batch.len());
        for (idx, sample) in hidden.outer_iter().enumerate() {
            let pooled = mean_pool(sample, batch.attention_mask().row(idx));
            if pooled.len() != expected {
                return Err(RagError::InvalidDimension {
                    expected,
                    actual: pooled.len(),
                });
            }
            out.push(pooled);
        }
        Ok(out)
    }
}

/// Average per-token hidden states into one vector, skipping masked
/// (padding) positions. An all-masked sample yields the zero vector.
fn mean_pool(sample: ArrayView2<'_, f32>, mask: ArrayView1<'_, u32>) -> Vec<f32> {
    let hidden = sample.len_of(Axis(1));
    let mut sum = vec![0.0f32; hidden];
    let mut count = 0.0f32;

    for (token_idx, token) in sample.outer_iter().enumerate() {
        if mask.get(token_idx).copied().unwrap_or(0) == 0 {
            continue;
        }
        count += 1.0;
        for (dim, value) in token.iter().enumerate() {
            sum[dim] += value;
        }
    }

    if count == 0.0 {
        return sum;
    }

    for value in &mut sum {
        *value /= count;
    }

    sum
}

/// Normalized dot-product similarity; 0.0 on length mismatch or zero norms
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ragline_model::{ModelConfig, StubModel};

    fn embedder(convention: DecodingConvention) -> Embedder<StubModel> {
        let config = ModelConfig {
            max_position_embeddings: 512,
            hidden_size: 16,
        };
        let model = match convention {
            DecodingConvention::Seq2Seq => StubModel::seq2seq(config),
            DecodingConvention::Causal => StubModel::causal(config),
        };
        Embedder::new(Arc::new(model), convention, 512)
    }

    #[test]
    fn embedding_has_model_dimension() {
        let embedder = embedder(DecodingConvention::Seq2Seq);
        let vector = embedder.embed("hello world").unwrap();
        assert_eq!(vector.len(), embedder.dimension());
    }

    #[test]
    fn embedding_is_idempotent() {
        let embedder = embedder(DecodingConvention::Seq2Seq);
        let first = embedder.embed("the same text").unwrap();
        let second = embedder.embed("the same text").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn batched_and_single_embeddings_match() {
        for convention in [DecodingConvention::Seq2Seq, DecodingConvention::Causal] {
            let embedder = embedder(convention);
            let batched = embedder
                .embed_batch(&["short", "a noticeably longer text here"])
                .unwrap();

            assert_eq!(batched[0], embedder.embed("short").unwrap());
            assert_eq!(
                batched[1],
                embedder.embed("a noticeably longer text here").unwrap()
            );
        }
    }

    #[test]
    fn empty_batch_embeds_to_nothing() {
        let embedder = embedder(DecodingConvention::Seq2Seq);
        assert!(embedder.embed_batch(&[]).unwrap().is_empty());
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!(cosine_similarity(&a, &b).abs() < 1e-6);
    }

    #[test]
    fn cosine_degenerate_inputs_score_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
