use crate::error::{ModelError, Result};
use crate::model::LanguageModel;
use crate::tokens::TokenBatch;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a model family interprets a generation length cap.
///
/// Selected once when the answering pipeline is constructed and fixed for
/// its lifetime. Each variant owns its length-budget rule, so call sites
/// invoke [`DecodingConvention::generate`] uniformly instead of branching
/// on a mode string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodingConvention {
    /// Encoder-decoder models: the cap bounds the output sequence alone
    Seq2Seq,

    /// Decoder-only models: generated text continues the input, so the cap
    /// is input length plus the requested budget
    Causal,
}

impl DecodingConvention {
    /// Absolute generation cap for an input of `input_length` tokens and a
    /// budget of `max_new_tokens`.
    #[must_use]
    pub const fn generation_cap(self, input_length: usize, max_new_tokens: usize) -> usize {
        match self {
            Self::Seq2Seq => max_new_tokens,
            Self::Causal => input_length + max_new_tokens,
        }
    }

    /// Generate under this convention's length semantics.
    pub fn generate<M>(
        self,
        model: &M,
        batch: &TokenBatch,
        max_new_tokens: usize,
    ) -> Result<Vec<Vec<u32>>>
    where
        M: LanguageModel + ?Sized,
    {
        let cap = self.generation_cap(batch.seq_len(), max_new_tokens);
        model.generate(batch, cap)
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seq2Seq => "seq2seq",
            Self::Causal => "causal",
        }
    }
}

impl fmt::Display for DecodingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DecodingConvention {
    type Err = ModelError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "seq2seq" => Ok(Self::Seq2Seq),
            "causal" => Ok(Self::Causal),
            other => Err(ModelError::UnsupportedConvention(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq2seq_cap_is_absolute() {
        assert_eq!(DecodingConvention::Seq2Seq.generation_cap(40, 100), 100);
    }

    #[test]
    fn causal_cap_extends_the_input() {
        assert_eq!(DecodingConvention::Causal.generation_cap(40, 100), 140);
    }

    #[test]
    fn parses_supported_conventions() {
        assert_eq!(
            "seq2seq".parse::<DecodingConvention>().unwrap(),
            DecodingConvention::Seq2Seq
        );
        assert_eq!(
            " Causal ".parse::<DecodingConvention>().unwrap(),
            DecodingConvention::Causal
        );
    }

    #[test]
    fn rejects_unknown_convention() {
        let err = "beam".parse::<DecodingConvention>().unwrap_err();
        assert!(matches!(err, ModelError::UnsupportedConvention(ref s) if s == "beam"));
        assert!(err.to_string().contains("seq2seq"));
    }
}
