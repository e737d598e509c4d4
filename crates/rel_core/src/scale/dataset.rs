//! Item datasets: the raw material of a scale analysis.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// Ordered, named item columns with one value per observation (case).
///
/// Construction enforces the dimension contract: at least one item column,
/// and every column the same length. Nothing else about the data is
/// validated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDataset {
    items: Vec<(String, Vec<f64>)>,
}

impl ItemDataset {
    /// Build a dataset from named item columns.
    pub fn new(items: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let (_, first) = items
            .first()
            .ok_or_else(|| AnalysisError::EmptyDataset("no item columns".into()))?;
        let cases = first.len();
        for (_, column) in &items {
            if column.len() != cases {
                return Err(AnalysisError::DimensionMismatch {
                    expected: cases,
                    found: column.len(),
                });
            }
        }
        Ok(Self { items })
    }

    /// Build a dataset from unnamed columns, generating item names
    /// `i1`, `i2`, ...
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let items = columns
            .into_iter()
            .enumerate()
            .map(|(index, column)| (format!("i{}", index + 1), column))
            .collect();
        Self::new(items)
    }

    /// Number of observations per item.
    pub fn cases(&self) -> usize {
        self.items[0].1.len()
    }

    /// Number of item columns.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Item names in column order.
    pub fn names(&self) -> Vec<&str> {
        self.items.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Iterate over `(name, column)` pairs in column order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.items.iter().map(|(name, column)| (name.as_str(), column.as_slice()))
    }

    /// Column by name.
    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.items
            .iter()
            .find(|(candidate, _)| candidate == name)
            .map(|(_, column)| column.as_slice())
    }

    /// Composite vector: the elementwise sum across all item columns, one
    /// value per observation.
    pub fn sum_vector(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.cases()];
        for (_, column) in &self.items {
            for (sum, value) in sums.iter_mut().zip(column) {
                *sum += value;
            }
        }
        sums
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_vector() {
        let ds = ItemDataset::from_columns(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]])
            .unwrap();
        assert_eq!(ds.sum_vector(), vec![5.0, 7.0, 9.0]);
        assert_eq!(ds.cases(), 3);
        assert_eq!(ds.item_count(), 2);
    }

    #[test]
    fn test_generated_item_names() {
        let ds = ItemDataset::from_columns(vec![vec![1.0], vec![2.0]]).unwrap();
        assert_eq!(ds.names(), vec!["i1", "i2"]);
    }

    #[test]
    fn test_ragged_columns_rejected() {
        let err = ItemDataset::from_columns(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        match err {
            AnalysisError::DimensionMismatch { expected, found } => {
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset_rejected() {
        assert!(matches!(
            ItemDataset::from_columns(vec![]),
            Err(AnalysisError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_column_lookup() {
        let ds = ItemDataset::new(vec![("a".into(), vec![1.0]), ("b".into(), vec![2.0])])
            .unwrap();
        assert_eq!(ds.column("b"), Some(&[2.0][..]));
        assert!(ds.column("c").is_none());
    }
}
