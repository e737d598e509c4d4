//! # Correlation Module
//!
//! Pearson product-moment correlation and correlation matrices over named
//! vectors.
//!
//! ## Boundary behavior
//!
//! A constant vector has zero standard deviation, so its correlation with
//! anything is undefined. That case yields `f64::NAN` rather than an error:
//! the sentinel stays in the matrix and callers decide what to do with it.
//! Unequal vector lengths are a hard error (`DimensionMismatch`) - there is
//! no pairwise-deletion fallback here.

use crate::error::{AnalysisError, Result};
use crate::report::builder::{Renderable, ReportTable, SectionBuilder};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Pearson correlation coefficient between two vectors.
///
/// Fails with `DimensionMismatch` when the vectors differ in length.
/// Returns `f64::NAN` when either vector is constant or has fewer than two
/// observations.
///
/// # Examples
/// ```
/// use rel_core::stats::correlation::pearson;
///
/// let r = pearson(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if x.len() != y.len() {
        return Err(AnalysisError::DimensionMismatch { expected: x.len(), found: y.len() });
    }
    let n = x.len();
    if n < 2 {
        return Ok(f64::NAN);
    }

    let mx = x.iter().sum::<f64>() / n as f64;
    let my = y.iter().sum::<f64>() / n as f64;

    let mut cov = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        cov += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx == 0.0 || syy == 0.0 {
        // Constant vector: correlation undefined
        return Ok(f64::NAN);
    }
    Ok(cov / (sxx.sqrt() * syy.sqrt()))
}

/// Symmetric matrix of pairwise Pearson correlations, indexed by the names
/// the vectors were supplied under, in supply order.
///
/// The diagonal is 1.0 by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    codes: Vec<String>,
    values: DMatrix<f64>,
}

impl CorrelationMatrix {
    /// Wrap a precomputed square matrix with its row/column labels.
    ///
    /// Fails with `DimensionMismatch` when the matrix is not square or its
    /// dimension disagrees with the label count.
    pub fn new(codes: Vec<String>, values: DMatrix<f64>) -> Result<Self> {
        if values.nrows() != values.ncols() {
            return Err(AnalysisError::DimensionMismatch {
                expected: values.nrows(),
                found: values.ncols(),
            });
        }
        if codes.len() != values.nrows() {
            return Err(AnalysisError::DimensionMismatch {
                expected: codes.len(),
                found: values.nrows(),
            });
        }
        Ok(Self { codes, values })
    }

    /// Row/column labels in matrix order.
    pub fn codes(&self) -> &[String] {
        &self.codes
    }

    /// Matrix dimension (number of variables).
    pub fn dim(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Entry at (row, column).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[(row, col)]
    }

    /// Entry for a pair of labels, if both are present.
    pub fn between(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.codes.iter().position(|c| c == a)?;
        let j = self.codes.iter().position(|c| c == b)?;
        Some(self.values[(i, j)])
    }

    /// The underlying matrix.
    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }
}

impl Renderable for CorrelationMatrix {
    fn render(&self, builder: &mut SectionBuilder) {
        let mut header = vec![String::new()];
        header.extend(self.codes.iter().cloned());
        let rows = self
            .codes
            .iter()
            .enumerate()
            .map(|(i, code)| {
                let mut row = vec![code.clone()];
                row.extend((0..self.dim()).map(|j| format!("{:.3}", self.values[(i, j)])));
                row
            })
            .collect();
        builder.table(ReportTable { header, rows });
    }
}

/// Build the correlation matrix of named vectors, preserving supply order as
/// row/column order.
///
/// All vectors must have the same length; the first vector fixes the
/// expected observation count and any later disagreement fails with
/// `DimensionMismatch`. An empty input yields a valid 0x0 matrix.
pub fn correlation_matrix(named: &[(String, Vec<f64>)]) -> Result<CorrelationMatrix> {
    let n = named.len();
    let mut values = DMatrix::from_element(n, n, 1.0);
    if let Some((_, first)) = named.first() {
        let cases = first.len();
        for (_, vector) in named.iter().skip(1) {
            if vector.len() != cases {
                return Err(AnalysisError::DimensionMismatch {
                    expected: cases,
                    found: vector.len(),
                });
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                let r = pearson(&named[i].1, &named[j].1)?;
                values[(i, j)] = r;
                values[(j, i)] = r;
            }
        }
    }
    let codes = named.iter().map(|(code, _)| code.clone()).collect();
    CorrelationMatrix::new(codes, values)
}
