//! # Scale Analysis
//!
//! Reliability statistics for one scale: Cronbach's alpha, the standardized
//! variant, composite summary statistics, and item-total correlations.
//!
//! ## Boundary behavior
//!
//! Alpha needs at least two items and a non-degenerate composite; outside
//! that the coefficients are `f64::NAN`, matching the NaN sentinel used for
//! degenerate correlations elsewhere in the crate.

use crate::report::builder::{Renderable, ReportTable, SectionBuilder};
use crate::scale::dataset::ItemDataset;
use crate::stats::correlation::pearson;
use crate::stats::descriptive::{mean, sd, variance};
use serde::{Deserialize, Serialize};

/// Options accepted when registering a scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    /// Display name; the registry generates `"Scale {code}"` when absent.
    pub name: Option<String>,
}

/// Reliability analysis of a single scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScaleAnalysis {
    name: String,
    dataset: ItemDataset,
}

impl ScaleAnalysis {
    pub fn new(dataset: ItemDataset, name: impl Into<String>) -> Self {
        Self { name: name.into(), dataset }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dataset(&self) -> &ItemDataset {
        &self.dataset
    }

    /// Composite vector: elementwise sum across item columns, one value per
    /// observation.
    pub fn sum_vector(&self) -> Vec<f64> {
        self.dataset.sum_vector()
    }

    /// Cronbach's alpha: `(k / (k - 1)) * (1 - sum(item variances) / composite variance)`.
    ///
    /// `f64::NAN` with fewer than two items, fewer than two cases, or a
    /// zero-variance composite.
    pub fn alpha(&self) -> f64 {
        let k = self.dataset.item_count();
        if k < 2 {
            return f64::NAN;
        }
        let total_variance = match variance(&self.sum_vector()) {
            Some(value) if value > 0.0 => value,
            _ => return f64::NAN,
        };
        let item_variance_sum: f64 = self
            .dataset
            .items()
            .map(|(_, column)| variance(column).unwrap_or(f64::NAN))
            .sum();
        let k = k as f64;
        (k / (k - 1.0)) * (1.0 - item_variance_sum / total_variance)
    }

    /// Standardized alpha: `k * r / (1 + (k - 1) * r)` with `r` the mean
    /// inter-item correlation. `f64::NAN` when any pairwise correlation is
    /// degenerate.
    pub fn standardized_alpha(&self) -> f64 {
        let k = self.dataset.item_count();
        if k < 2 {
            return f64::NAN;
        }
        let columns: Vec<&[f64]> = self.dataset.items().map(|(_, column)| column).collect();
        let mut sum = 0.0;
        let mut pairs = 0usize;
        for i in 0..k {
            for j in (i + 1)..k {
                // Columns share one dataset, so lengths always agree
                sum += pearson(columns[i], columns[j]).unwrap_or(f64::NAN);
                pairs += 1;
            }
        }
        let r = sum / pairs as f64;
        let k = k as f64;
        k * r / (1.0 + (k - 1.0) * r)
    }

    /// Mean of the composite vector.
    pub fn mean(&self) -> f64 {
        mean(&self.sum_vector()).unwrap_or(f64::NAN)
    }

    /// Sample standard deviation of the composite vector.
    pub fn sd(&self) -> f64 {
        sd(&self.sum_vector()).unwrap_or(f64::NAN)
    }

    /// Pearson correlation of each item with the composite vector, in item
    /// order. Degenerate pairs yield `f64::NAN` entries.
    pub fn item_total_correlations(&self) -> Vec<(String, f64)> {
        let total = self.sum_vector();
        self.dataset
            .items()
            .map(|(name, column)| (name.to_string(), pearson(column, &total).unwrap_or(f64::NAN)))
            .collect()
    }
}

impl Renderable for ScaleAnalysis {
    fn render(&self, builder: &mut SectionBuilder) {
        builder.section(self.name.clone(), |section| {
            section.paragraph(format!("Items: {}", self.dataset.item_count()));
            section.paragraph(format!("Valid cases: {}", self.dataset.cases()));
            section.paragraph(format!("Cronbach's alpha: {:.4}", self.alpha()));
            section.paragraph(format!("Standardized alpha: {:.4}", self.standardized_alpha()));
            section.paragraph(format!("Scale mean: {:.4}", self.mean()));
            section.paragraph(format!("Scale sd: {:.4}", self.sd()));
            section.table(ReportTable {
                header: vec!["Item".into(), "r item-total".into()],
                rows: self
                    .item_total_correlations()
                    .into_iter()
                    .map(|(name, r)| vec![name, format!("{:.4}", r)])
                    .collect(),
            });
        });
    }
}
