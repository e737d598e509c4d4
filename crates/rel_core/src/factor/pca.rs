//! # Principal Component Analysis
//!
//! PCA over a correlation matrix: eigen-decomposition, components ordered by
//! descending eigenvalue, loadings scaled to correlations between variables
//! and components.
//!
//! ## Component count
//!
//! The number of retained components comes from the options; when no `m` is
//! configured the Kaiser criterion applies (eigenvalues >= 1.0, minimum one
//! component). An `m` larger than the matrix dimension is clamped down.

use crate::factor::{kaiser_criterion, loadings_from_eigen, sorted_symmetric_eigen};
use crate::report::builder::{Renderable, ReportTable, SectionBuilder};
use crate::stats::correlation::CorrelationMatrix;
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Options for principal component extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PcaOptions {
    /// Number of components to retain. `None` applies the Kaiser criterion.
    pub m: Option<usize>,
}

impl PcaOptions {
    /// Populate options from a JSON map through a fixed allow-list.
    ///
    /// Recognized key: `"m"` (non-negative integer). Unknown keys and values
    /// of the wrong type are ignored.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let mut options = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "m" => {
                    if let Some(m) = value.as_u64() {
                        options.m = Some(m as usize);
                    }
                }
                _ => {}
            }
        }
        options
    }
}

/// Result of a principal component analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pca {
    /// Variable labels, in correlation-matrix order.
    pub codes: Vec<String>,
    /// All eigenvalues, descending.
    pub eigenvalues: Vec<f64>,
    /// Number of retained components.
    pub m: usize,
    /// Component loadings, variables x m.
    pub loadings: DMatrix<f64>,
}

impl Pca {
    /// Run PCA against a correlation matrix.
    pub fn extract(matrix: &CorrelationMatrix, options: &PcaOptions) -> Pca {
        let n = matrix.dim();
        let (eigenvalues, vectors) = sorted_symmetric_eigen(matrix.values());
        let m = options.m.unwrap_or_else(|| kaiser_criterion(&eigenvalues)).min(n);
        let loadings = loadings_from_eigen(&eigenvalues, &vectors, m);
        debug!(dim = n, m, "extracted principal components");
        Pca { codes: matrix.codes().to_vec(), eigenvalues, m, loadings }
    }

    /// Proportion of total variance explained by each eigenvalue.
    ///
    /// Total variance of a correlation matrix equals its dimension.
    pub fn explained_variance(&self) -> Vec<f64> {
        let total = self.codes.len() as f64;
        self.eigenvalues.iter().map(|value| value / total).collect()
    }

}

impl Renderable for Pca {
    fn render(&self, builder: &mut SectionBuilder) {
        builder.paragraph(format!("Components retained: {}", self.m));
        let explained = self.explained_variance();
        builder.table(ReportTable {
            header: vec!["Component".into(), "Eigenvalue".into(), "Proportion".into()],
            rows: self
                .eigenvalues
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    vec![
                        format!("PC{}", i + 1),
                        format!("{:.4}", value),
                        format!("{:.4}", explained[i]),
                    ]
                })
                .collect(),
        });
        let mut header = vec![String::new()];
        header.extend((0..self.m).map(|j| format!("PC{}", j + 1)));
        builder.table(ReportTable {
            header,
            rows: self
                .codes
                .iter()
                .enumerate()
                .map(|(i, code)| {
                    let mut row = vec![code.clone()];
                    row.extend((0..self.m).map(|j| format!("{:.4}", self.loadings[(i, j)])));
                    row
                })
                .collect(),
        });
    }
}
