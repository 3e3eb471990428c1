//! # Ragline Model
//!
//! The language-model collaborator surface for the Ragline pipeline.
//!
//! The retrieval/generation core never touches weights, devices, or
//! tokenizer assets directly; it talks to one collaborator through the
//! [`LanguageModel`] trait:
//!
//! ```text
//! Core                         Collaborator
//!   │ tokenize / decode          │
//!   ├───────────────────────────>│  tokenizer
//!   │ encode / forward           │
//!   ├───────────────────────────>│  hidden states (batch x seq x hidden)
//!   │ generate(cap)              │
//!   └───────────────────────────>│  output token sequences
//! ```
//!
//! [`DecodingConvention`] captures the one behavioral split between model
//! families: how a generation length cap is interpreted. [`StubModel`] is a
//! deterministic backend for offline runs and tests.
//!
//! ## Example
//!
//! ```rust
//! use ragline_model::{LanguageModel, ModelConfig, StubModel, TokenizeOptions};
//!
//! let model = StubModel::seq2seq(ModelConfig {
//!     max_position_embeddings: 512,
//!     hidden_size: 64,
//! });
//!
//! let batch = model
//!     .tokenize(&["the quick brown fox"], &TokenizeOptions::plain())
//!     .unwrap();
//! assert_eq!(batch.token_count(0), 4);
//! assert_eq!(model.decode(&batch.row(0), true).unwrap(), "the quick brown fox");
//! ```

mod config;
mod convention;
mod error;
mod model;
mod stub;
mod tokens;

pub use config::ModelConfig;
pub use convention::DecodingConvention;
pub use error::{ModelError, Result};
pub use model::LanguageModel;
pub use stub::StubModel;
pub use tokens::{TokenBatch, TokenizeOptions};
