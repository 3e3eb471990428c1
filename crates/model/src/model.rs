use crate::config::ModelConfig;
use crate::error::Result;
use crate::tokens::{TokenBatch, TokenizeOptions};
use ndarray::Array3;

/// Capability surface of the pretrained language model collaborator.
///
/// Everything the retrieval/generation core needs from a model goes through
/// this trait: tokenization and its inverse, the two hidden-state paths
/// (encoder-only for seq2seq families, full forward for causal ones), and
/// bounded text generation. Implementations own weights, devices, and
/// tokenizer assets; none of that leaks into the core.
///
/// All calls are synchronous and block until complete.
pub trait LanguageModel {
    /// Read-only checkpoint configuration
    fn config(&self) -> &ModelConfig;

    /// Tokenize a batch of texts into a rectangular id/mask matrix
    fn tokenize(&self, texts: &[&str], options: &TokenizeOptions) -> Result<TokenBatch>;

    /// Decode token ids back to text, optionally stripping special control
    /// tokens (padding, BOS/EOS)
    fn decode(&self, tokens: &[u32], skip_special: bool) -> Result<String>;

    /// Per-token hidden states from the encoder sub-module alone
    /// (batch x seq x hidden)
    fn encode(&self, batch: &TokenBatch) -> Result<Array3<f32>>;

    /// Per-token hidden states from the full forward pass
    /// (batch x seq x hidden)
    fn forward(&self, batch: &TokenBatch) -> Result<Array3<f32>>;

    /// Generate one output sequence per input row, capped at `max_length`
    /// tokens.
    ///
    /// The cap is absolute: for seq2seq families it bounds the output
    /// alone, for causal families it bounds input plus continuation.
    /// Callers normally go through
    /// [`DecodingConvention::generate`](crate::DecodingConvention::generate),
    /// which computes the cap for the active convention.
    fn generate(&self, batch: &TokenBatch, max_length: usize) -> Result<Vec<Vec<u32>>>;
}
