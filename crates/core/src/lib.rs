//! # Ragline Core
//!
//! Retrieval-augmented question answering around a single pretrained
//! language model.
//!
//! ## Architecture
//!
//! ```text
//! Documents
//!     │
//!     ├──> Chunker (sentence-aligned, token budget)
//!     │
//!     ├──> Summarizer (optional compression)
//!     │
//!     ├──> Embedder (mean-pooled hidden states)
//!     │
//!     └──> RagStore (parallel texts + embeddings, cosine top-k)
//!              │
//!              ▼
//!          Answerer ──> prompt assembly ──> model generation
//!                                      └──> structured (JSON) output path
//! ```
//!
//! The model itself lives behind [`LanguageModel`]; the decoding convention
//! ([`DecodingConvention`]) is picked once at construction and decides both
//! the embedding path (encoder vs. full forward) and how generation length
//! caps are interpreted.
//!
//! ## Example
//!
//! ```rust
//! use ragline_core::{Answerer, RagConfig};
//! use ragline_model::{DecodingConvention, ModelConfig, StubModel};
//! use std::sync::Arc;
//!
//! fn main() -> anyhow::Result<()> {
//!     let model = Arc::new(StubModel::seq2seq(ModelConfig {
//!         max_position_embeddings: 512,
//!         hidden_size: 64,
//!     }));
//!     model.push_response("Paris");
//!
//!     let mut answerer = Answerer::new(
//!         model.clone(),
//!         DecodingConvention::Seq2Seq,
//!         &RagConfig::default(),
//!     )?;
//!     answerer.add_documents(&["The Eiffel Tower is located in Paris."], false)?;
//!
//!     let answer = answerer.answer_text("Where is the Eiffel Tower?", true, 50);
//!     assert_eq!(answer, "Paris");
//!     Ok(())
//! }
//! ```

mod answer;
mod config;
mod embedder;
mod error;
mod store;
mod structured;
mod summarize;

pub use answer::{Answerer, AnswerRequest, AnswerResponse};
pub use config::RagConfig;
pub use embedder::{cosine_similarity, Embedder};
pub use error::{RagError, Result};
pub use store::{IngestReport, RagStore};
pub use summarize::Summarizer;

// Re-export collaborator and chunker types for convenience
pub use ragline_chunker::{Chunk, Chunker};
pub use ragline_model::{DecodingConvention, LanguageModel, ModelConfig, StubModel};
