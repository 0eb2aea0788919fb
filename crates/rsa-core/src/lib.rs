// Copyright [2026] [Joseph Verdicchio]
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

//! rsa-core
//!
//! The Rational Speech Acts model of pragmatic inference, one level deep:
//! - literal listener `L0(s | m) ∝ [[m]](s) · P(s)`
//! - pragmatic speaker `S1(m | s) ∝ exp(α · (ln L0(s | m) + cost(m)))`
//! - pragmatic listener `L1(s | m) ∝ S1(m | s) · P(s)`
//!
//! Degenerate inputs are not errors: a message with no support yields NaN
//! rows and a zero literal probability yields `-inf` utility, both visible
//! in the output matrices.

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod error;
pub mod game;
pub mod matrix;
pub mod model;
pub mod scenarios;

pub use crate::error::{RsaError, RsaResult};
pub use crate::game::{GameReport, LabeledMatrix, ParameterOverrides, ReferenceGame};
pub use crate::model::RsaModel;
