// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

//! Labeled reference games.
//!
//! Labels are metadata carried next to the lexicon for display; the model
//! itself only ever sees positional matrices.

use crate::error::{RsaError, RsaResult};
use crate::matrix::zero_support_rows;
use crate::model::RsaModel;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

fn default_alpha() -> f64 {
    RsaModel::DEFAULT_ALPHA
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceGame {
    pub messages: Vec<String>,
    pub states: Vec<String>,
    /// Rows are messages, columns are states.
    pub lexicon: Vec<Vec<f64>>,
    pub prior: Vec<f64>,
    pub costs: Vec<f64>,
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl ReferenceGame {
    /// Two referents: `r1` wears glasses and no hat, `r2` wears glasses and a
    /// hat. "hat" is true only of `r2`, "glasses" of both.
    pub fn core_lexicon(prior: [f64; 2], costs: [f64; 2]) -> Self {
        Self {
            messages: vec!["hat".to_string(), "glasses".to_string()],
            states: vec!["r1".to_string(), "r2".to_string()],
            lexicon: vec![vec![0.0, 1.0], vec![1.0, 1.0]],
            prior: prior.to_vec(),
            costs: costs.to_vec(),
            alpha: RsaModel::DEFAULT_ALPHA,
        }
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn from_json(bytes: &[u8]) -> RsaResult<Self> {
        let game: Self = serde_json::from_slice(bytes)
            .map_err(|e| RsaError::InvalidArgument(format!("reference game json: {e}")))?;
        game.validate()?;
        Ok(game)
    }

    /// Everything `RsaModel` checks at construction, then the label counts
    /// against the built model's shape.
    pub fn validate(&self) -> RsaResult<()> {
        self.checked_model().map(|_| ())
    }

    fn checked_model(&self) -> RsaResult<RsaModel> {
        let model = self.model()?;
        if self.messages.len() != model.num_messages() {
            return Err(RsaError::LabelCount {
                axis: "message",
                labels: self.messages.len(),
                expected: model.num_messages(),
            });
        }
        if self.states.len() != model.num_states() {
            return Err(RsaError::LabelCount {
                axis: "state",
                labels: self.states.len(),
                expected: model.num_states(),
            });
        }
        Ok(model)
    }

    pub fn model(&self) -> RsaResult<RsaModel> {
        Ok(RsaModel::from_rows(&self.lexicon, &self.prior, &self.costs)?.with_alpha(self.alpha))
    }

    /// Replace whichever parameters are set. Lengths are not checked here;
    /// a mismatch surfaces from `validate` or `solve`.
    pub fn with_overrides(mut self, overrides: &ParameterOverrides) -> Self {
        if let Some(prior) = &overrides.prior {
            self.prior = prior.clone();
        }
        if let Some(costs) = &overrides.costs {
            self.costs = costs.clone();
        }
        if let Some(alpha) = overrides.alpha {
            self.alpha = alpha;
        }
        self
    }

    pub fn solve(&self) -> RsaResult<GameReport> {
        let model = self.checked_model()?;

        let empty = zero_support_rows(model.lexicon());
        if !empty.is_empty() {
            let labels: Vec<&str> = empty.iter().map(|&i| self.messages[i].as_str()).collect();
            tracing::warn!(target: "rsa.game", messages=?labels, "lexicon rows with zero support; results will contain NaN");
        }
        tracing::debug!(
            target: "rsa.game",
            messages = model.num_messages(),
            states = model.num_states(),
            alpha = model.alpha(),
            "solving reference game"
        );

        Ok(GameReport {
            literal_listener: LabeledMatrix::new(
                &self.messages,
                &self.states,
                &model.literal_listener(),
            ),
            speaker: LabeledMatrix::new(&self.states, &self.messages, &model.speaker()),
            listener: LabeledMatrix::new(&self.messages, &self.states, &model.listener()),
        })
    }
}

/// User-adjustable parameters, as exposed by an interactive front end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterOverrides {
    pub prior: Option<Vec<f64>>,
    pub costs: Option<Vec<f64>>,
    pub alpha: Option<f64>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        self.prior.is_none() && self.costs.is_none() && self.alpha.is_none()
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(prior) = &self.prior {
            if prior.iter().any(|p| !p.is_finite() || *p < 0.0) {
                return Err("prior entries must be finite and >= 0");
            }
        }
        if let Some(costs) = &self.costs {
            if costs.iter().any(|c| !c.is_finite()) {
                return Err("costs must be finite");
            }
        }
        if let Some(alpha) = self.alpha {
            if !alpha.is_finite() || alpha <= 0.0 {
                return Err("alpha must be finite and > 0");
            }
        }
        Ok(())
    }
}

/// A result matrix with its axis labels. Non-finite values serialize as
/// `null` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledMatrix {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl LabeledMatrix {
    pub fn new(rows: &[String], columns: &[String], values: &Array2<f64>) -> Self {
        Self {
            row_labels: rows.to_vec(),
            column_labels: columns.to_vec(),
            values: values.outer_iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn get(&self, row: &str, column: &str) -> Option<f64> {
        let r = self.row_labels.iter().position(|l| l == row)?;
        let c = self.column_labels.iter().position(|l| l == column)?;
        self.values.get(r)?.get(c).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    /// Rows: messages; columns: states.
    pub literal_listener: LabeledMatrix,
    /// Rows: states; columns: messages.
    pub speaker: LabeledMatrix,
    /// Rows: messages; columns: states.
    pub listener: LabeledMatrix,
}
