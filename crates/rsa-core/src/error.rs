// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type RsaResult<T> = Result<T, RsaError>;

/// Construction-time failures. Numeric degeneracy (zero-support rows, `ln 0`)
/// is never reported here; it shows up as NaN or `-inf` in the results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    #[error("prior has {prior} entries but the lexicon has {states} states")]
    PriorLength { prior: usize, states: usize },

    #[error("costs has {costs} entries but the lexicon has {messages} messages")]
    CostLength { costs: usize, messages: usize },

    #[error("lexicon row {row} has {len} entries, expected {expected}")]
    RaggedLexicon {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("{axis} labels: got {labels}, lexicon has {expected}")]
    LabelCount {
        axis: &'static str,
        labels: usize,
        expected: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
