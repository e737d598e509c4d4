//! # Principal Axis Factor Extraction
//!
//! Iterated principal-axis factoring over a correlation matrix. Unlike PCA,
//! the diagonal of the analyzed matrix holds communality estimates rather
//! than total variances, and those estimates are refined until they settle.
//!
//! ## Algorithm
//!
//! 1. Seed communalities: squared multiple correlations (1 - 1/diag(R^-1))
//!    when `smc` is set and the matrix is invertible, otherwise the largest
//!    absolute off-diagonal entry of each row.
//! 2. Replace the diagonal with the current communalities, eigen-decompose,
//!    and compute loadings for the first `m` factors.
//! 3. Re-estimate communalities as row sums of squared loadings.
//! 4. Stop when the largest communality change drops below `epsilon`;
//!    otherwise repeat, up to `max_iterations`, then fail with
//!    `NoConvergence`.

use crate::error::{AnalysisError, Result};
use crate::factor::{kaiser_criterion, loadings_from_eigen, sorted_symmetric_eigen};
use crate::report::builder::{Renderable, ReportTable, SectionBuilder};
use crate::stats::correlation::CorrelationMatrix;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

/// Options for principal-axis extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxisOptions {
    /// Number of factors to retain. `None` applies the Kaiser criterion to
    /// the unreduced correlation matrix.
    pub m: Option<usize>,
    /// Iteration budget for communality refinement.
    pub max_iterations: usize,
    /// Convergence threshold on the largest communality change.
    pub epsilon: f64,
    /// Seed communalities with squared multiple correlations. When false, or
    /// when the matrix cannot be inverted, the largest absolute off-diagonal
    /// entry of each row is used instead.
    pub smc: bool,
}

impl Default for PrincipalAxisOptions {
    fn default() -> Self {
        Self { m: None, max_iterations: 25, epsilon: 1e-3, smc: true }
    }
}

impl PrincipalAxisOptions {
    /// Populate options from a JSON map through a fixed allow-list.
    ///
    /// Recognized keys: `"m"`, `"max_iterations"`, `"epsilon"`, `"smc"`.
    /// Unknown keys and values of the wrong type are ignored.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "m" => {
                    if let Some(m) = value.as_u64() {
                        options.m = Some(m as usize);
                    }
                }
                "max_iterations" => {
                    if let Some(iterations) = value.as_u64() {
                        options.max_iterations = iterations as usize;
                    }
                }
                "epsilon" => {
                    if let Some(epsilon) = value.as_f64() {
                        options.epsilon = epsilon;
                    }
                }
                "smc" => {
                    if let Some(smc) = value.as_bool() {
                        options.smc = smc;
                    }
                }
                _ => {}
            }
        }
        options
    }
}

/// Result of a principal-axis factor extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrincipalAxis {
    /// Variable labels, in correlation-matrix order.
    pub codes: Vec<String>,
    /// Number of retained factors.
    pub m: usize,
    /// Factor loadings, variables x m.
    pub loadings: DMatrix<f64>,
    /// Final communality estimates, one per variable.
    pub communalities: Vec<f64>,
    /// Eigenvalues of the final reduced matrix, descending.
    pub eigenvalues: Vec<f64>,
    /// Iterations used until convergence.
    pub iterations: usize,
}

impl PrincipalAxis {
    /// Run principal-axis extraction against a correlation matrix.
    pub fn extract(
        matrix: &CorrelationMatrix,
        options: &PrincipalAxisOptions,
    ) -> Result<PrincipalAxis> {
        let n = matrix.dim();
        if n == 0 {
            return Ok(PrincipalAxis {
                codes: Vec::new(),
                m: 0,
                loadings: DMatrix::zeros(0, 0),
                communalities: Vec::new(),
                eigenvalues: Vec::new(),
                iterations: 0,
            });
        }

        let (full_eigenvalues, _) = sorted_symmetric_eigen(matrix.values());
        let m = options.m.unwrap_or_else(|| kaiser_criterion(&full_eigenvalues)).min(n);

        let mut communalities = initial_communalities(matrix.values(), options.smc);
        debug!(dim = n, m, smc = options.smc, "starting principal axis iteration");

        for iteration in 1..=options.max_iterations {
            let mut reduced = matrix.values().clone();
            for i in 0..n {
                reduced[(i, i)] = communalities[i];
            }
            let (eigenvalues, vectors) = sorted_symmetric_eigen(&reduced);
            let loadings = loadings_from_eigen(&eigenvalues, &vectors, m);

            let updated: Vec<f64> = (0..n)
                .map(|i| (0..m).map(|j| loadings[(i, j)] * loadings[(i, j)]).sum())
                .collect();
            let delta = communalities
                .iter()
                .zip(&updated)
                .map(|(old, new)| (old - new).abs())
                .fold(0.0f64, f64::max);
            trace!(iteration, delta, "communality update");
            communalities = updated;

            if delta < options.epsilon {
                return Ok(PrincipalAxis {
                    codes: matrix.codes().to_vec(),
                    m,
                    loadings,
                    communalities,
                    eigenvalues,
                    iterations: iteration,
                });
            }
        }

        Err(AnalysisError::NoConvergence { iterations: options.max_iterations })
    }
}

/// Seed communality estimates for the reduced matrix diagonal.
fn initial_communalities(matrix: &DMatrix<f64>, smc: bool) -> Vec<f64> {
    let n = matrix.nrows();
    if n == 1 {
        return vec![1.0];
    }
    if smc {
        if let Some(inverse) = matrix.clone().try_inverse() {
            let estimates: Vec<f64> = (0..n).map(|i| 1.0 - 1.0 / inverse[(i, i)]).collect();
            if estimates.iter().all(|h| h.is_finite()) {
                return estimates;
            }
        }
    }
    // Fallback: largest absolute correlation of each row
    (0..n)
        .map(|i| {
            (0..n)
                .filter(|&j| j != i)
                .map(|j| matrix[(i, j)].abs())
                .fold(0.0f64, f64::max)
        })
        .collect()
}

impl Renderable for PrincipalAxis {
    fn render(&self, builder: &mut SectionBuilder) {
        builder.paragraph(format!(
            "Factors retained: {} (converged after {} iterations)",
            self.m, self.iterations
        ));
        let mut header = vec![String::new()];
        header.extend((0..self.m).map(|j| format!("F{}", j + 1)));
        header.push("h2".into());
        builder.table(ReportTable {
            header,
            rows: self
                .codes
                .iter()
                .enumerate()
                .map(|(i, code)| {
                    let mut row = vec![code.clone()];
                    row.extend((0..self.m).map(|j| format!("{:.4}", self.loadings[(i, j)])));
                    row.push(format!("{:.4}", self.communalities[i]));
                    row
                })
                .collect(),
        });
    }
}
