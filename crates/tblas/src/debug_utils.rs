//! Matrix rendering for debugging sessions.
//!
//! [`format_matrix`] produces aligned text; [`visualize_matrix`] produces the
//! JSON understood by the VS Code debug visualizer extension.

use std::fmt::{Display, Write};

use serde_json::{Value, json};

use crate::scalar::Scalar;
use crate::view::Matrix;

/// Matrices with more rows or columns than this are visualized as text.
pub const TABLE_LIMIT: usize = 15;

/// One line per row, each entry right-aligned in 16 columns.
///
/// ```
/// use tblas::debug_utils::format_matrix;
/// use tblas::view::DenseView;
///
/// let a = DenseView::col_major(&[1.0, 2.0], 2, 1).unwrap();
/// let text = format_matrix(&a);
/// assert_eq!(text.lines().count(), 2);
/// assert!(text.lines().next().unwrap().trim_start().starts_with('1'));
/// ```
pub fn format_matrix<T, A>(a: &A) -> String
where
    T: Scalar + Display,
    A: Matrix<T> + ?Sized,
{
    let mut out = String::new();
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let _ = write!(out, "{:>16} ", a.at(i, j));
        }
        out.push('\n');
    }
    out
}

/// Text document with column indices above the values (3 decimals).
pub fn visualize_matrix_text<T, A>(a: &A) -> Value
where
    T: Scalar + Display,
    A: Matrix<T> + ?Sized,
{
    let mut text = String::new();
    for j in 0..a.ncols() {
        let _ = write!(text, "{j:>10} ");
    }
    text.push('\n');
    for i in 0..a.nrows() {
        for j in 0..a.ncols() {
            let _ = write!(text, "{:>10.3} ", a.at(i, j));
        }
        text.push('\n');
    }
    json!({ "kind": { "text": true }, "text": text })
}

/// Plotly table with one cell column per matrix column.
pub fn visualize_matrix_table<T, A>(a: &A) -> Value
where
    T: Scalar + Display,
    A: Matrix<T> + ?Sized,
{
    let header: Vec<usize> = (0..a.ncols()).collect();
    let cells: Vec<Vec<String>> = (0..a.ncols())
        .map(|j| (0..a.nrows()).map(|i| format!("{:.3}", a.at(i, j))).collect())
        .collect();
    json!({
        "kind": { "plotly": true },
        "data": [{
            "header": { "values": header },
            "cells": { "values": cells },
            "type": "table",
        }],
        "layout": {},
    })
}

/// Table for small matrices, text once either dimension exceeds [`TABLE_LIMIT`].
pub fn visualize_matrix<T, A>(a: &A) -> Value
where
    T: Scalar + Display,
    A: Matrix<T> + ?Sized,
{
    if a.nrows().max(a.ncols()) > TABLE_LIMIT {
        visualize_matrix_text(a)
    } else {
        visualize_matrix_table(a)
    }
}
