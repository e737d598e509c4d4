//! Multi-scale analysis configuration.
//!
//! Construction accepts a JSON map restricted to a fixed allow-list of keys;
//! unrecognized keys (and recognized keys holding values of the wrong type)
//! are ignored, never rejected.

use crate::factor::pca::PcaOptions;
use crate::factor::principal_axis::PrincipalAxisOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default display name of a multi-scale analysis.
pub const DEFAULT_ANALYSIS_NAME: &str = "Multiple Scale analysis";

/// Configuration of a `MultiScaleAnalysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiScaleConfig {
    /// Display name, used as the report's top section title.
    pub name: String,
    /// Emit the inter-scale correlation matrix section in reports.
    pub summary_correlation_matrix: bool,
    /// Emit the PCA section in reports.
    pub summary_pca: bool,
    /// Emit the principal-axis section in reports.
    pub summary_principal_axis: bool,
    /// Options used by `pca()` when no override is supplied.
    pub pca_options: PcaOptions,
    /// Options used by `principal_axis()` when no override is supplied.
    pub principal_axis_options: PrincipalAxisOptions,
}

impl Default for MultiScaleConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ANALYSIS_NAME.to_string(),
            summary_correlation_matrix: false,
            summary_pca: false,
            summary_principal_axis: false,
            pca_options: PcaOptions::default(),
            principal_axis_options: PrincipalAxisOptions::default(),
        }
    }
}

impl MultiScaleConfig {
    /// Populate a configuration from a JSON map through the fixed allow-list:
    /// `name`, `summary_correlation_matrix`, `summary_pca`,
    /// `summary_principal_axis`, `pca_options`, `principal_axis_options`.
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        let mut config = Self::default();
        for (key, value) in map {
            match key.as_str() {
                "name" => {
                    if let Some(name) = value.as_str() {
                        config.name = name.to_string();
                    }
                }
                "summary_correlation_matrix" => {
                    if let Some(flag) = value.as_bool() {
                        config.summary_correlation_matrix = flag;
                    }
                }
                "summary_pca" => {
                    if let Some(flag) = value.as_bool() {
                        config.summary_pca = flag;
                    }
                }
                "summary_principal_axis" => {
                    if let Some(flag) = value.as_bool() {
                        config.summary_principal_axis = flag;
                    }
                }
                "pca_options" => {
                    if let Some(options) = value.as_object() {
                        config.pca_options = PcaOptions::from_map(options);
                    }
                }
                "principal_axis_options" => {
                    if let Some(options) = value.as_object() {
                        config.principal_axis_options = PrincipalAxisOptions::from_map(options);
                    }
                }
                _ => {}
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = MultiScaleConfig::default();
        assert_eq!(config.name, "Multiple Scale analysis");
        assert!(!config.summary_correlation_matrix);
        assert!(!config.summary_pca);
        assert!(!config.summary_principal_axis);
        assert_eq!(config.pca_options.m, None);
    }

    #[test]
    fn test_from_map_recognized_keys() {
        let map = json!({
            "name": "Burnout battery",
            "summary_pca": true,
            "pca_options": {"m": 2},
            "principal_axis_options": {"max_iterations": 40}
        });
        let config = MultiScaleConfig::from_map(map.as_object().unwrap());
        assert_eq!(config.name, "Burnout battery");
        assert!(config.summary_pca);
        assert!(!config.summary_correlation_matrix);
        assert_eq!(config.pca_options.m, Some(2));
        assert_eq!(config.principal_axis_options.max_iterations, 40);
    }

    #[test]
    fn test_from_map_ignores_unknown_keys() {
        let map = json!({"bogus": 1, "also_bogus": {"x": 2}, "summary_pca": true});
        let config = MultiScaleConfig::from_map(map.as_object().unwrap());
        assert!(config.summary_pca);
        assert_eq!(config.name, "Multiple Scale analysis");
    }

    #[test]
    fn test_from_map_ignores_mistyped_values() {
        let map = json!({"summary_pca": "yes", "name": 7});
        let config = MultiScaleConfig::from_map(map.as_object().unwrap());
        assert!(!config.summary_pca);
        assert_eq!(config.name, "Multiple Scale analysis");
    }
}
