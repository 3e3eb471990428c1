use ndarray::{Array2, ArrayView2};

/// How a [`LanguageModel`](crate::LanguageModel) should tokenize a batch.
///
/// Mirrors the usual tokenizer knobs: `pad` aligns every sequence in the
/// batch to the longest one, `truncate` caps sequences at `max_length`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeOptions {
    /// Pad all sequences in the batch to the longest sequence
    pub pad: bool,

    /// Truncate sequences longer than `max_length`
    pub truncate: bool,

    /// Length cap applied when `truncate` is set
    pub max_length: Option<usize>,
}

impl TokenizeOptions {
    /// Encode-only: no padding, no truncation. Used for token counting.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            pad: false,
            truncate: false,
            max_length: None,
        }
    }

    /// Truncate to `max_length` without padding. Used for single prompts.
    #[must_use]
    pub const fn truncated(max_length: usize) -> Self {
        Self {
            pad: false,
            truncate: true,
            max_length: Some(max_length),
        }
    }

    /// Pad to the batch longest and truncate to `max_length`. Used for
    /// embedding batches.
    #[must_use]
    pub const fn padded_and_truncated(max_length: usize) -> Self {
        Self {
            pad: true,
            truncate: true,
            max_length: Some(max_length),
        }
    }
}

/// A tokenized batch: one row per input text, padded to a rectangular
/// id matrix with a parallel attention mask (1 = real token, 0 = padding).
#[derive(Debug, Clone, PartialEq)]
pub struct TokenBatch {
    ids: Array2<u32>,
    attention_mask: Array2<u32>,
}

impl TokenBatch {
    /// Build a batch from per-text id rows, padding every row to the
    /// longest with `pad_id`.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<u32>>, pad_id: u32) -> Self {
        let seq_len = rows.iter().map(Vec::len).max().unwrap_or(0);
        let mut ids = Array2::from_elem((rows.len(), seq_len), pad_id);
        let mut attention_mask = Array2::zeros((rows.len(), seq_len));

        for (row_idx, row) in rows.iter().enumerate() {
            for (col_idx, &id) in row.iter().enumerate() {
                ids[[row_idx, col_idx]] = id;
                attention_mask[[row_idx, col_idx]] = 1;
            }
        }

        Self {
            ids,
            attention_mask,
        }
    }

    /// Number of sequences in the batch
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.nrows()
    }

    /// Whether the batch holds no sequences
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.nrows() == 0
    }

    /// Padded sequence length shared by every row
    #[must_use]
    pub fn seq_len(&self) -> usize {
        self.ids.ncols()
    }

    /// Token id matrix (batch x seq)
    #[must_use]
    pub fn ids(&self) -> ArrayView2<'_, u32> {
        self.ids.view()
    }

    /// Attention mask matrix (batch x seq)
    #[must_use]
    pub fn attention_mask(&self) -> ArrayView2<'_, u32> {
        self.attention_mask.view()
    }

    /// Unpadded token ids of one row
    #[must_use]
    pub fn row(&self, index: usize) -> Vec<u32> {
        let count = self.token_count(index);
        self.ids
            .row(index)
            .iter()
            .take(count)
            .copied()
            .collect()
    }

    /// Number of real (unpadded) tokens in one row
    #[must_use]
    pub fn token_count(&self, index: usize) -> usize {
        self.attention_mask
            .row(index)
            .iter()
            .filter(|&&m| m != 0)
            .count()
    }
}
