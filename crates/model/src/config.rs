use serde::{Deserialize, Serialize};

/// Read-only properties of a pretrained model, as exposed by its checkpoint
/// configuration.
///
/// `max_position_embeddings` bounds how many tokens the model accepts in one
/// input; `hidden_size` is the width of the per-token hidden states and
/// therefore the dimensionality of every pooled embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Maximum input length in tokens
    pub max_position_embeddings: usize,

    /// Width of per-token hidden states
    pub hidden_size: usize,
}
