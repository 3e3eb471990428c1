use crate::error::Result;
use ragline_model::{DecodingConvention, LanguageModel, ModelError, TokenizeOptions};
use std::sync::Arc;

const SUMMARY_PREFIX: &str = "Summarize the following text in a few sentences:\n\n";

/// Compresses a chunk into a shorter summary via the model's generation
/// capability.
#[derive(Debug)]
pub struct Summarizer<M> {
    model: Arc<M>,
    convention: DecodingConvention,
    max_input_length: usize,
}

impl<M: LanguageModel> Summarizer<M> {
    #[must_use]
    pub fn new(model: Arc<M>, convention: DecodingConvention, max_input_length: usize) -> Self {
        Self {
            model,
            convention,
            max_input_length,
        }
    }

    /// Summarize one chunk with a generation budget of `max_length` tokens.
    ///
    /// The instructional prefix plus chunk text is truncated to the
    /// configured input length before generation.
    pub fn summarize(&self, chunk: &str, max_length: usize) -> Result<String> {
        let prompt = format!("{SUMMARY_PREFIX}{chunk}");
        let batch = self.model.tokenize(
            &[prompt.as_str()],
            &TokenizeOptions::truncated(self.max_input_length),
        )?;
        let outputs = self.convention.generate(self.model.as_ref(), &batch, max_length)?;
        let tokens = outputs
            .first()
            .ok_or_else(|| ModelError::Generation("Model returned no sequences".to_string()))?;
        Ok(self.model.decode(tokens, true)?)
    }
}
