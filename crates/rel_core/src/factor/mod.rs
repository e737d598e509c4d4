//! # Factor Analysis Module
//!
//! Factor-extraction methods over a correlation matrix.
//!
//! ## Submodules
//!
//! - `pca` - Principal component analysis
//! - `principal_axis` - Iterated principal-axis factor extraction
//!
//! Both methods share the eigen-decomposition helpers below: eigenvalues
//! sorted descending, loadings scaled by the square root of the eigenvalue,
//! and a deterministic sign convention (each loading column sums to a
//! non-negative value).

pub mod pca;
pub mod principal_axis;

pub use pca::{Pca, PcaOptions};
pub use principal_axis::{PrincipalAxis, PrincipalAxisOptions};

use nalgebra::DMatrix;

/// Eigen-decomposition of a symmetric matrix with eigenvalues sorted in
/// descending order and eigenvector columns reordered to match.
pub(crate) fn sorted_symmetric_eigen(matrix: &DMatrix<f64>) -> (Vec<f64>, DMatrix<f64>) {
    let n = matrix.nrows();
    if n == 0 {
        return (Vec::new(), DMatrix::zeros(0, 0));
    }
    let eigen = matrix.clone().symmetric_eigen();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        eigen.eigenvalues[b]
            .partial_cmp(&eigen.eigenvalues[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let eigenvalues: Vec<f64> = order.iter().map(|&i| eigen.eigenvalues[i]).collect();
    let mut vectors = DMatrix::zeros(n, n);
    for (dst, &src) in order.iter().enumerate() {
        vectors.set_column(dst, &eigen.eigenvectors.column(src));
    }
    (eigenvalues, vectors)
}

/// Loadings for the first `m` components: eigenvector times sqrt(eigenvalue),
/// with negative eigenvalues clamped to zero before the square root and each
/// column sign-flipped so its sum is non-negative.
pub(crate) fn loadings_from_eigen(
    eigenvalues: &[f64],
    vectors: &DMatrix<f64>,
    m: usize,
) -> DMatrix<f64> {
    let n = vectors.nrows();
    let mut loadings = DMatrix::zeros(n, m);
    for j in 0..m {
        let scale = eigenvalues[j].max(0.0).sqrt();
        let mut column: Vec<f64> = (0..n).map(|i| vectors[(i, j)] * scale).collect();
        if column.iter().sum::<f64>() < 0.0 {
            for value in column.iter_mut() {
                *value = -*value;
            }
        }
        for i in 0..n {
            loadings[(i, j)] = column[i];
        }
    }
    loadings
}

/// Kaiser criterion: retain components with eigenvalue >= 1.0, at least one
/// when any eigenvalue exists.
pub(crate) fn kaiser_criterion(eigenvalues: &[f64]) -> usize {
    if eigenvalues.is_empty() {
        return 0;
    }
    eigenvalues.iter().filter(|&&value| value >= 1.0).count().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_eigen_descending() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 0.5, 1.0]);
        let (values, _) = sorted_symmetric_eigen(&matrix);
        assert!((values[0] - 1.5).abs() < 1e-9, "largest eigenvalue 1.5, got {}", values[0]);
        assert!((values[1] - 0.5).abs() < 1e-9, "smallest eigenvalue 0.5, got {}", values[1]);
    }

    #[test]
    fn test_kaiser_at_least_one() {
        assert_eq!(kaiser_criterion(&[0.6, 0.4]), 1);
        assert_eq!(kaiser_criterion(&[1.5, 1.0, 0.5]), 2);
        assert_eq!(kaiser_criterion(&[]), 0);
    }

    #[test]
    fn test_loading_sign_convention() {
        let matrix = DMatrix::from_row_slice(2, 2, &[1.0, 0.5, 0.5, 1.0]);
        let (values, vectors) = sorted_symmetric_eigen(&matrix);
        let loadings = loadings_from_eigen(&values, &vectors, 1);
        assert!(loadings.column(0).iter().sum::<f64>() >= 0.0);
    }
}
