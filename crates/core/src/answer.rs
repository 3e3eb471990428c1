use crate::config::RagConfig;
use crate::error::Result;
use crate::store::{IngestReport, RagStore};
use crate::structured;
use ragline_model::{DecodingConvention, LanguageModel, ModelError, TokenizeOptions};
use serde_json::Value;
use std::sync::Arc;

/// Per-call knobs for [`Answerer::answer`]
#[derive(Debug, Clone)]
pub struct AnswerRequest {
    /// Prepend retrieved context to the question
    pub use_context: bool,

    /// Generation budget in new tokens, interpreted by the active decoding
    /// convention
    pub max_length: usize,

    /// When set, the call takes the structured-output path and the answer
    /// is a parsed record in this shape
    pub output_structure: Option<Value>,
}

impl Default for AnswerRequest {
    fn default() -> Self {
        Self {
            use_context: true,
            max_length: 100,
            output_structure: None,
        }
    }
}

/// What an answer call produced
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerResponse {
    /// Plain decoded text (or a textual error message)
    Text(String),

    /// Parsed structured record (or an error record)
    Structured(Value),
}

impl AnswerResponse {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Structured(_) => None,
        }
    }

    #[must_use]
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// Assembles prompts, retrieves context, and generates answers.
///
/// The decoding convention is chosen once at construction and fixed for the
/// object's lifetime; the retrieval store starts empty and grows through
/// [`Answerer::add_documents`]. Ingestion propagates faults to the caller;
/// the answering paths never do: any fault there becomes a textual or
/// structured error value.
#[derive(Debug)]
pub struct Answerer<M> {
    model: Arc<M>,
    convention: DecodingConvention,
    store: RagStore<M>,
    max_prompt_length: usize,
}

impl<M: LanguageModel> Answerer<M> {
    /// Create an answerer with an empty retrieval store
    pub fn new(model: Arc<M>, convention: DecodingConvention, config: &RagConfig) -> Result<Self> {
        let store = RagStore::new(model.clone(), convention, config)?;
        Ok(Self {
            model,
            convention,
            store,
            max_prompt_length: config.embed_max_length,
        })
    }

    /// Create an answerer from a convention name (`"seq2seq"` or
    /// `"causal"`); anything else fails immediately, never defaults.
    pub fn from_convention_name(model: Arc<M>, name: &str, config: &RagConfig) -> Result<Self> {
        let convention = name.parse::<DecodingConvention>()?;
        Self::new(model, convention, config)
    }

    /// Active decoding convention
    #[must_use]
    pub const fn convention(&self) -> DecodingConvention {
        self.convention
    }

    /// Retrieval store, read-only
    #[must_use]
    pub fn store(&self) -> &RagStore<M> {
        &self.store
    }

    /// Ingest documents into the retrieval store
    pub fn add_documents(
        &mut self,
        documents: &[&str],
        use_summaries: bool,
    ) -> Result<IngestReport> {
        self.store.add(documents, use_summaries)
    }

    /// Answer a prompt, optionally conditioned on retrieved context.
    ///
    /// This call upholds a never-crash contract: tokenization, retrieval,
    /// and generation faults are converted into error values instead of
    /// being returned as errors.
    pub fn answer(&self, prompt: &str, request: &AnswerRequest) -> AnswerResponse {
        if let Some(structure) = &request.output_structure {
            return AnswerResponse::Structured(self.generate_structured(
                prompt,
                structure,
                request.max_length,
            ));
        }
        AnswerResponse::Text(self.answer_text(prompt, request.use_context, request.max_length))
    }

    /// Plain-text answer path; faults become `"An error occurred: …"`
    pub fn answer_text(&self, prompt: &str, use_context: bool, max_length: usize) -> String {
        match self.try_answer(prompt, use_context, max_length) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Answer generation failed: {err}");
                format!("An error occurred: {err}")
            }
        }
    }

    /// Structured answer path; parse failures and faults become error
    /// records.
    pub fn generate_structured(
        &self,
        prompt: &str,
        output_structure: &Value,
        max_length: usize,
    ) -> Value {
        let full_prompt = structured::structured_prompt(prompt, output_structure);
        match self.generate_text(&full_prompt, max_length) {
            Ok(decoded) => structured::parse_structured(&decoded),
            Err(err) => {
                log::warn!("Structured generation failed: {err}");
                structured::fault_record(&err)
            }
        }
    }

    fn try_answer(&self, prompt: &str, use_context: bool, max_length: usize) -> Result<String> {
        let assembled = if use_context {
            let context = self.store.context_for(prompt)?;
            format!("Context: {context}\n\nQuestion: {prompt}\n\nAnswer:")
        } else {
            format!("Question: {prompt}\n\nAnswer:")
        };
        self.generate_text(&assembled, max_length)
    }

    fn generate_text(&self, prompt: &str, max_length: usize) -> Result<String> {
        let batch = self.model.tokenize(
            &[prompt],
            &TokenizeOptions::truncated(self.max_prompt_length),
        )?;
        let outputs = self.convention.generate(self.model.as_ref(), &batch, max_length)?;
        let tokens = outputs
            .first()
            .ok_or_else(|| ModelError::Generation("Model returned no sequences".to_string()))?;
        Ok(self.model.decode(tokens, true)?)
    }
}
