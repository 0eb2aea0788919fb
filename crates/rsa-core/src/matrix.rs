// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

//! Numeric primitives over dense `f64` matrices.
//!
//! None of these functions guard against degenerate input. A row summing to
//! zero normalizes to NaN and `ln 0` is `-inf`; callers see those values in
//! the output rather than an error.

use ndarray::{Array1, Array2, Axis};

/// Divide every row by its sum so each row sums to one.
pub fn rownorm(mat: &Array2<f64>) -> Array2<f64> {
    let sums = row_sums(mat).insert_axis(Axis(1));
    mat / &sums
}

/// Elementwise natural log. `ln 0 = -inf`, negative inputs give NaN.
pub fn safelog(mat: &Array2<f64>) -> Array2<f64> {
    mat.mapv(f64::ln)
}

/// Multiply each row elementwise by `weights`, which is indexed by column.
///
/// `weights.len()` must equal `mat.ncols()`; the model checks this at
/// construction time.
pub fn scale_columns(mat: &Array2<f64>, weights: &Array1<f64>) -> Array2<f64> {
    mat * weights
}

pub fn row_sums(mat: &Array2<f64>) -> Array1<f64> {
    mat.sum_axis(Axis(1))
}

/// Rows whose entries sum to exactly zero.
pub fn zero_support_rows(mat: &Array2<f64>) -> Vec<usize> {
    row_sums(mat)
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == 0.0)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const TOL: f64 = 1e-12;

    #[test]
    fn rownorm_makes_rows_stochastic() {
        let m = array![[1.0, 3.0], [2.0, 2.0], [0.0, 5.0]];
        let n = rownorm(&m);
        assert_eq!(n.dim(), (3, 2));
        for s in row_sums(&n).iter() {
            assert!((s - 1.0).abs() < TOL);
        }
        assert!((n[[0, 0]] - 0.25).abs() < TOL);
        assert!((n[[2, 1]] - 1.0).abs() < TOL);
    }

    #[test]
    fn rownorm_zero_row_is_nan_and_leaves_other_rows_alone() {
        let m = array![[0.0, 0.0], [1.0, 1.0]];
        let n = rownorm(&m);
        assert!(n[[0, 0]].is_nan());
        assert!(n[[0, 1]].is_nan());
        assert!((n[[1, 0]] - 0.5).abs() < TOL);
    }

    #[test]
    fn safelog_zero_is_negative_infinity() {
        let m = array![[0.0, 1.0], [std::f64::consts::E, -1.0]];
        let l = safelog(&m);
        assert_eq!(l[[0, 0]], f64::NEG_INFINITY);
        assert_eq!(l[[0, 1]], 0.0);
        assert!((l[[1, 0]] - 1.0).abs() < TOL);
        assert!(l[[1, 1]].is_nan());
    }

    #[test]
    fn scale_columns_broadcasts_across_rows() {
        let m = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let w = array![0.5, 0.0, 2.0];
        let s = scale_columns(&m, &w);
        assert_eq!(s, array![[0.5, 0.0, 6.0], [2.0, 0.0, 12.0]]);
    }

    #[test]
    fn zero_support_rows_finds_only_exact_zero_sums() {
        let m = array![[0.0, 0.0], [1e-300, 0.0], [0.0, 0.0], [1.0, 1.0]];
        assert_eq!(zero_support_rows(&m), vec![0, 2]);
    }
}
