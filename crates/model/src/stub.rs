use crate::config::ModelConfig;
use crate::convention::DecodingConvention;
use crate::error::{ModelError, Result};
use crate::model::LanguageModel;
use crate::tokens::{TokenBatch, TokenizeOptions};
use ndarray::Array3;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

const PAD_TOKEN: &str = "<pad>";
const PAD_ID: u32 = 0;

const ENCODER_SALT: u64 = 0x517c_c1b7_2722_0a95;
const FORWARD_SALT: u64 = 0x6c62_272e_07bb_0142;

/// Deterministic, dependency-free model backend for offline runs and tests.
///
/// Tokenization is whitespace splitting over a growing interned vocabulary;
/// hidden states are splitmix64-derived per-token vectors, so identical text
/// always yields identical embeddings. Generation pops canned responses
/// queued with [`StubModel::push_response`] and falls back to echoing the
/// input, honoring the family behavior of the chosen convention: a causal
/// stub emits its input followed by the continuation, a seq2seq stub emits
/// the continuation alone.
#[derive(Debug)]
pub struct StubModel {
    config: ModelConfig,
    convention: DecodingConvention,
    vocab: Mutex<Vocab>,
    responses: Mutex<VecDeque<String>>,
}

impl StubModel {
    /// Stub emulating an encoder-decoder family
    #[must_use]
    pub fn seq2seq(config: ModelConfig) -> Self {
        Self::with_convention(config, DecodingConvention::Seq2Seq)
    }

    /// Stub emulating a decoder-only family
    #[must_use]
    pub fn causal(config: ModelConfig) -> Self {
        Self::with_convention(config, DecodingConvention::Causal)
    }

    fn with_convention(config: ModelConfig, convention: DecodingConvention) -> Self {
        Self {
            config,
            convention,
            vocab: Mutex::new(Vocab::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Queue a canned generation response; responses are consumed in FIFO
    /// order, one per generated sequence.
    pub fn push_response(&self, text: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push_back(text.into());
    }

    /// Builder-style variant of [`StubModel::push_response`]
    #[must_use]
    pub fn with_responses<I, S>(self, responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for response in responses {
            self.push_response(response);
        }
        self
    }

    fn intern_words(&self, text: &str) -> Vec<u32> {
        let mut vocab = self
            .vocab
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        text.split_whitespace()
            .map(|word| vocab.intern(word))
            .collect()
    }

    fn continuation_for(&self, input: &[u32]) -> Vec<u32> {
        let canned = self
            .responses
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .pop_front();

        match canned {
            Some(text) => self.intern_words(&text),
            None => {
                log::debug!("stub response queue empty; echoing input");
                input.to_vec()
            }
        }
    }

    fn hidden_states(&self, batch: &TokenBatch, salt: u64) -> Array3<f32> {
        let hidden = self.config.hidden_size;
        let mut out = Array3::zeros((batch.len(), batch.seq_len(), hidden));
        for row in 0..batch.len() {
            for col in 0..batch.seq_len() {
                let vector = token_vector(batch.ids()[[row, col]], hidden, salt);
                for (dim, value) in vector.into_iter().enumerate() {
                    out[[row, col, dim]] = value;
                }
            }
        }
        out
    }
}

impl LanguageModel for StubModel {
    fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn tokenize(&self, texts: &[&str], options: &TokenizeOptions) -> Result<TokenBatch> {
        let mut rows = Vec::with_capacity(texts.len());
        for text in texts {
            let mut row = self.intern_words(text);
            if options.truncate {
                if let Some(max_length) = options.max_length {
                    row.truncate(max_length);
                }
            }
            rows.push(row);
        }

        if !options.pad {
            let ragged = rows
                .first()
                .is_some_and(|first| rows.iter().any(|row| row.len() != first.len()));
            if ragged {
                return Err(ModelError::Tokenization(
                    "Batch has unequal sequence lengths; enable padding".to_string(),
                ));
            }
        }

        Ok(TokenBatch::from_rows(rows, PAD_ID))
    }

    fn decode(&self, tokens: &[u32], skip_special: bool) -> Result<String> {
        let vocab = self
            .vocab
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut words = Vec::with_capacity(tokens.len());
        for &id in tokens {
            if skip_special && id == PAD_ID {
                continue;
            }
            let word = vocab
                .word(id)
                .ok_or_else(|| ModelError::Decoding(format!("Unknown token id {id}")))?;
            words.push(word.to_string());
        }
        Ok(words.join(" "))
    }

    fn encode(&self, batch: &TokenBatch) -> Result<Array3<f32>> {
        Ok(self.hidden_states(batch, ENCODER_SALT))
    }

    fn forward(&self, batch: &TokenBatch) -> Result<Array3<f32>> {
        Ok(self.hidden_states(batch, FORWARD_SALT))
    }

    fn generate(&self, batch: &TokenBatch, max_length: usize) -> Result<Vec<Vec<u32>>> {
        let mut outputs = Vec::with_capacity(batch.len());
        for row in 0..batch.len() {
            let input = batch.row(row);
            let continuation = self.continuation_for(&input);

            let mut sequence = match self.convention {
                DecodingConvention::Causal => {
                    let mut seq = input;
                    seq.extend(continuation);
                    seq
                }
                DecodingConvention::Seq2Seq => continuation,
            };
            sequence.truncate(max_length);
            outputs.push(sequence);
        }
        Ok(outputs)
    }
}

#[derive(Debug)]
struct Vocab {
    ids: HashMap<String, u32>,
    words: Vec<String>,
}

impl Vocab {
    fn new() -> Self {
        Self {
            ids: HashMap::from([(PAD_TOKEN.to_string(), PAD_ID)]),
            words: vec![PAD_TOKEN.to_string()],
        }
    }

    fn intern(&mut self, word: &str) -> u32 {
        if let Some(&id) = self.ids.get(word) {
            return id;
        }
        let id = self.words.len() as u32;
        self.words.push(word.to_string());
        self.ids.insert(word.to_string(), id);
        id
    }

    fn word(&self, id: u32) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }
}

fn token_vector(id: u32, dimension: usize, salt: u64) -> Vec<f32> {
    let mut state = (u64::from(id) ^ salt).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut vec = Vec::with_capacity(dimension);
    for _ in 0..dimension {
        let bits = splitmix64(&mut state);
        let high = (bits >> 32) as u32;
        let mantissa = high >> 9;
        let unit = f32::from_bits(0x3f80_0000 | mantissa) - 1.0;
        vec.push(unit.mul_add(2.0, -1.0));
    }
    vec
}

const fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
