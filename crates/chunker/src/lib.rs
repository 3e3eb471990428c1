//! # Ragline Chunker
//!
//! Sentence-aligned, token-budget-bounded document chunking.
//!
//! Documents are segmented into UAX#29 sentences, and sentences accumulate
//! into chunks until the next one would overflow the token budget. Token
//! counts come from the model collaborator's tokenizer, never a heuristic,
//! so chunks line up with what the model will actually see.
//!
//! ```text
//! Document
//!     │
//!     ├──> Sentence segmentation (UAX#29)
//!     │
//!     ├──> Token counting (collaborator tokenizer, encode-only)
//!     │
//!     └──> Greedy accumulation under budget
//!          └─> Chunk[] (sentences joined with single spaces)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ragline_chunker::Chunker;
//! use ragline_model::{ModelConfig, StubModel};
//!
//! let model = StubModel::seq2seq(ModelConfig {
//!     max_position_embeddings: 512,
//!     hidden_size: 64,
//! });
//!
//! let chunker = Chunker::new(8).unwrap();
//! let chunks = chunker
//!     .split(&model, "One two three. Four five six. Seven eight nine ten.")
//!     .unwrap();
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].text, "One two three. Four five six.");
//! ```

mod chunker;
mod error;
mod types;

pub use chunker::{Chunker, DEFAULT_RESERVED_MARGIN};
pub use error::{ChunkerError, Result};
pub use types::{Chunk, ChunkStats};
