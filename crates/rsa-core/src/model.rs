// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

//! The one-level Rational Speech Acts recursion.
//!
//! Literal listener and pragmatic listener matrices are indexed
//! `[message, state]`; the speaker matrix is indexed `[state, message]`.

use crate::error::{RsaError, RsaResult};
use crate::matrix::{rownorm, safelog, scale_columns};
use ndarray::{Array1, Array2};

#[derive(Debug, Clone, PartialEq)]
pub struct RsaModel {
    lexicon: Array2<f64>,
    prior: Array1<f64>,
    costs: Array1<f64>,
    alpha: f64,
}

impl RsaModel {
    pub const DEFAULT_ALPHA: f64 = 1.0;

    /// Build a model with the default temperature.
    ///
    /// `prior` must have one entry per lexicon column (state) and `costs` one
    /// entry per lexicon row (message). Neither needs to be normalized.
    pub fn new(lexicon: Array2<f64>, prior: Array1<f64>, costs: Array1<f64>) -> RsaResult<Self> {
        let (messages, states) = lexicon.dim();
        if prior.len() != states {
            return Err(RsaError::PriorLength {
                prior: prior.len(),
                states,
            });
        }
        if costs.len() != messages {
            return Err(RsaError::CostLength {
                costs: costs.len(),
                messages,
            });
        }
        Ok(Self {
            lexicon,
            prior,
            costs,
            alpha: Self::DEFAULT_ALPHA,
        })
    }

    /// Build from nested rows, rejecting ragged lexicons.
    pub fn from_rows(lexicon: &[Vec<f64>], prior: &[f64], costs: &[f64]) -> RsaResult<Self> {
        let states = lexicon.first().map_or(prior.len(), Vec::len);
        let mut flat = Vec::with_capacity(lexicon.len() * states);
        for (row, values) in lexicon.iter().enumerate() {
            if values.len() != states {
                return Err(RsaError::RaggedLexicon {
                    row,
                    len: values.len(),
                    expected: states,
                });
            }
            flat.extend_from_slice(values);
        }
        let lexicon = Array2::from_shape_vec((lexicon.len(), states), flat)
            .map_err(|e| RsaError::InvalidArgument(e.to_string()))?;
        Self::new(
            lexicon,
            Array1::from_vec(prior.to_vec()),
            Array1::from_vec(costs.to_vec()),
        )
    }

    /// Set the speaker temperature. Not range-checked: alpha is expected to
    /// be positive and the presentation layer enforces that.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn lexicon(&self) -> &Array2<f64> {
        &self.lexicon
    }

    pub fn prior(&self) -> &Array1<f64> {
        &self.prior
    }

    pub fn costs(&self) -> &Array1<f64> {
        &self.costs
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn num_messages(&self) -> usize {
        self.lexicon.nrows()
    }

    pub fn num_states(&self) -> usize {
        self.lexicon.ncols()
    }

    /// `rownorm(lexicon ⊙ prior)`: truth conditions weighted by the prior.
    pub fn literal_listener(&self) -> Array2<f64> {
        rownorm(&scale_columns(&self.lexicon, &self.prior))
    }

    /// `rownorm(exp(alpha * (ln L0ᵀ + costs)))`.
    ///
    /// Costs are added to the log-likelihood as given, so a message is made
    /// more expensive by giving it a more negative cost.
    pub fn speaker(&self) -> Array2<f64> {
        let lit = self.literal_listener().reversed_axes();
        let utilities = (safelog(&lit) + &self.costs) * self.alpha;
        rownorm(&utilities.mapv(f64::exp))
    }

    /// `rownorm(S1ᵀ ⊙ prior)`.
    pub fn listener(&self) -> Array2<f64> {
        let spk = self.speaker().reversed_axes();
        rownorm(&scale_columns(&spk, &self.prior))
    }
}
