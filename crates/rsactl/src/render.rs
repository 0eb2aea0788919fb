// Copyright (c) 2026 Joseph Verdicchio and Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text tables. Values are printed as computed, so NaN and `-inf`
//! appear verbatim.

use rsa_core::{LabeledMatrix, ReferenceGame};
use std::fmt::Write;

fn cell(v: f64) -> String {
    if v.is_finite() {
        format!("{v:.4}")
    } else {
        format!("{v}")
    }
}

fn table(corner: &str, header: &[String], rows: &[(String, Vec<String>)]) -> String {
    let label_width = rows
        .iter()
        .map(|(l, _)| l.len())
        .chain(std::iter::once(corner.len()))
        .max()
        .unwrap_or(0);
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(c, h)| {
            rows.iter()
                .filter_map(|(_, cells)| cells.get(c))
                .map(String::len)
                .chain(std::iter::once(h.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let _ = write!(out, "{corner:<label_width$}");
    for (h, &w) in header.iter().zip(&widths) {
        let _ = write!(out, "  {h:>w$}");
    }
    out.push('\n');
    for (label, cells) in rows {
        let _ = write!(out, "{label:<label_width$}");
        for (c, &w) in cells.iter().zip(&widths) {
            let _ = write!(out, "  {c:>w$}");
        }
        out.push('\n');
    }
    out
}

pub fn render_matrix(matrix: &LabeledMatrix) -> String {
    let rows: Vec<(String, Vec<String>)> = matrix
        .row_labels
        .iter()
        .zip(&matrix.values)
        .map(|(l, vals)| (l.clone(), vals.iter().copied().map(cell).collect()))
        .collect();
    table("", &matrix.column_labels, &rows)
}

/// Lexicon with a trailing costs column, followed by prior and alpha rows.
pub fn render_game(game: &ReferenceGame) -> String {
    let mut header = game.states.clone();
    header.push("costs".to_string());

    let mut rows: Vec<(String, Vec<String>)> = game
        .messages
        .iter()
        .zip(&game.lexicon)
        .zip(&game.costs)
        .map(|((m, row), cost)| {
            let mut cells: Vec<String> = row.iter().copied().map(cell).collect();
            cells.push(cell(*cost));
            (m.clone(), cells)
        })
        .collect();

    let mut prior: Vec<String> = game.prior.iter().copied().map(cell).collect();
    prior.push(String::new());
    rows.push(("prior".to_string(), prior));

    let mut alpha = vec![cell(game.alpha)];
    alpha.resize(header.len(), String::new());
    rows.push(("alpha".to_string(), alpha));

    table("", &header, &rows)
}
