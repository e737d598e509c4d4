//! Inter-scale correlation matrix builder.

use crate::error::Result;
use crate::multiscale::registry::ScaleRegistry;
use crate::stats::correlation::{correlation_matrix, CorrelationMatrix};
use tracing::debug;

/// Build the correlation matrix between the registered scales' composite
/// vectors, with scale codes as row/column labels in registration order.
///
/// Computed fresh on every call; composite vectors of differing length fail
/// with `DimensionMismatch`, propagated unchanged from the correlation
/// primitive.
pub fn build_correlation_matrix(registry: &ScaleRegistry) -> Result<CorrelationMatrix> {
    let named: Vec<(String, Vec<f64>)> = registry
        .iter()
        .map(|(code, scale)| (code.to_string(), scale.sum_vector()))
        .collect();
    debug!(scales = named.len(), "building inter-scale correlation matrix");
    correlation_matrix(&named)
}
