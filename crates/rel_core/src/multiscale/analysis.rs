//! # Multi-Scale Analysis
//!
//! The aggregate root: configuration plus the scale registry, factor
//! analysis dispatch, and hierarchical report assembly.
//!
//! Derived results (correlation matrix, PCA, principal axis, report) are
//! recomputed from current registry state on every call; nothing is cached.

use crate::error::Result;
use crate::factor::pca::{Pca, PcaOptions};
use crate::factor::principal_axis::{PrincipalAxis, PrincipalAxisOptions};
use crate::multiscale::composite::build_correlation_matrix;
use crate::multiscale::config::MultiScaleConfig;
use crate::multiscale::registry::ScaleRegistry;
use crate::report::builder::ReportSection;
use crate::report::locale::Localizer;
use crate::scale::analysis::{ScaleAnalysis, ScaleOptions};
use crate::scale::dataset::ItemDataset;
use crate::stats::correlation::CorrelationMatrix;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// A named collection of scale analyses with derived inter-scale results.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MultiScaleAnalysis {
    config: MultiScaleConfig,
    scales: ScaleRegistry,
}

impl MultiScaleAnalysis {
    pub fn new(config: MultiScaleConfig) -> Self {
        Self { config, scales: ScaleRegistry::new() }
    }

    /// Construct from a JSON configuration map (fixed allow-list, unknown
    /// keys ignored).
    pub fn from_map(map: &serde_json::Map<String, Value>) -> Self {
        Self::new(MultiScaleConfig::from_map(map))
    }

    /// Construct and run a setup closure against the new instance before it
    /// is returned, so scales and configuration tweaks can be applied
    /// fluently in one expression.
    pub fn build(config: MultiScaleConfig, setup: impl FnOnce(&mut Self)) -> Self {
        let mut analysis = Self::new(config);
        setup(&mut analysis);
        analysis
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &MultiScaleConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MultiScaleConfig {
        &mut self.config
    }

    pub fn scales(&self) -> &ScaleRegistry {
        &self.scales
    }

    /// Register a scale under `code`; see `ScaleRegistry::add_scale`.
    pub fn add_scale(
        &mut self,
        code: impl Into<String>,
        dataset: ItemDataset,
        options: Option<ScaleOptions>,
    ) -> &ScaleAnalysis {
        self.scales.add_scale(code, dataset, options)
    }

    pub fn get_scale(&self, code: &str) -> Option<&ScaleAnalysis> {
        self.scales.get_scale(code)
    }

    pub fn remove_scale(&mut self, code: &str) -> Option<ScaleAnalysis> {
        self.scales.remove_scale(code)
    }

    /// Correlation matrix between the registered scales' composite vectors,
    /// computed fresh from current registry state.
    pub fn correlation_matrix(&self) -> Result<CorrelationMatrix> {
        build_correlation_matrix(&self.scales)
    }

    /// Principal component analysis of the current correlation matrix.
    ///
    /// A supplied override replaces the configured `pca_options` wholesale;
    /// there is no field-level merge.
    pub fn pca(&self, override_options: Option<&PcaOptions>) -> Result<Pca> {
        let effective = override_options.unwrap_or(&self.config.pca_options);
        let matrix = self.correlation_matrix()?;
        Ok(Pca::extract(&matrix, effective))
    }

    /// Principal-axis extraction over the current correlation matrix.
    ///
    /// Same override semantics as `pca`: the override replaces the
    /// configured `principal_axis_options` wholesale.
    pub fn principal_axis(
        &self,
        override_options: Option<&PrincipalAxisOptions>,
    ) -> Result<PrincipalAxis> {
        let effective = override_options.unwrap_or(&self.config.principal_axis_options);
        let matrix = self.correlation_matrix()?;
        PrincipalAxis::extract(&matrix, effective)
    }

    /// Assemble the hierarchical report for this analysis.
    pub fn report(&self, localizer: &Localizer) -> Result<ReportSection> {
        ReportAssembler::new(localizer).build(self)
    }
}

/// Assembles a `MultiScaleAnalysis` into a hierarchical report.
///
/// Section order is fixed: per-scale reliability, then (flag-gated)
/// correlation matrix, PCA, and principal axis. Sections whose flag is off
/// are absent, not empty. Any failure in a derived computation aborts the
/// whole build.
pub struct ReportAssembler<'a> {
    localizer: &'a Localizer,
}

impl<'a> ReportAssembler<'a> {
    pub fn new(localizer: &'a Localizer) -> Self {
        Self { localizer }
    }

    pub fn build(&self, analysis: &MultiScaleAnalysis) -> Result<ReportSection> {
        let config = analysis.config();
        let name = analysis.name();
        debug!(name, scales = analysis.scales().len(), "assembling multi-scale report");

        // Fail before any tree is built: the report is all-or-nothing.
        let correlation = if config.summary_correlation_matrix {
            Some(analysis.correlation_matrix()?)
        } else {
            None
        };
        let pca = if config.summary_pca { Some(analysis.pca(None)?) } else { None };
        let principal_axis =
            if config.summary_principal_axis { Some(analysis.principal_axis(None)?) } else { None };

        Ok(ReportSection::build(name, |b| {
            b.section(self.localizer.label("report-scale-reliability", &[]), |s| {
                for (_, scale) in analysis.scales().iter() {
                    s.add(scale);
                }
            });
            if let Some(matrix) = &correlation {
                let title =
                    self.localizer.label("report-correlation-matrix", &[("name", name)]);
                b.section(title, |s| s.add(matrix));
            }
            if let Some(pca) = &pca {
                let title = self.localizer.label("report-pca", &[("name", name)]);
                b.section(title, |s| s.add(pca));
            }
            if let Some(principal_axis) = &principal_axis {
                let title = self.localizer.label("report-principal-axis", &[("name", name)]);
                b.section(title, |s| s.add(principal_axis));
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;
    use serde_json::json;

    fn dataset(columns: Vec<Vec<f64>>) -> ItemDataset {
        ItemDataset::from_columns(columns).unwrap()
    }

    /// Two scales with correlated, non-degenerate composites.
    fn populated(config: MultiScaleConfig) -> MultiScaleAnalysis {
        MultiScaleAnalysis::build(config, |analysis| {
            analysis.add_scale("s1", dataset(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]), None);
            analysis.add_scale("s2", dataset(vec![vec![1.0, 0.0, 2.0], vec![2.0, 1.0, 2.0]]), None);
        })
    }

    #[test]
    fn test_build_closure_runs_before_return() {
        let analysis = MultiScaleAnalysis::build(MultiScaleConfig::default(), |a| {
            a.add_scale("s1", dataset(vec![vec![1.0, 2.0, 3.0]]), None);
            a.config_mut().summary_pca = true;
        });
        assert_eq!(analysis.scales().len(), 1);
        assert!(analysis.config().summary_pca);
    }

    #[test]
    fn test_from_map_construction() {
        let map = json!({"name": "Battery", "summary_correlation_matrix": true});
        let analysis = MultiScaleAnalysis::from_map(map.as_object().unwrap());
        assert_eq!(analysis.name(), "Battery");
        assert!(analysis.config().summary_correlation_matrix);
    }

    #[test]
    fn test_pca_uses_configured_options() {
        let mut config = MultiScaleConfig::default();
        config.pca_options = PcaOptions { m: Some(2) };
        let analysis = populated(config);
        let pca = analysis.pca(None).unwrap();
        assert_eq!(pca.m, 2);
    }

    #[test]
    fn test_pca_override_replaces_configured() {
        let mut config = MultiScaleConfig::default();
        config.pca_options = PcaOptions { m: Some(2) };
        let analysis = populated(config);
        let pca = analysis.pca(Some(&PcaOptions { m: Some(1) })).unwrap();
        assert_eq!(pca.m, 1, "override replaces configured options wholesale");
    }

    #[test]
    fn test_principal_axis_override_replaces_configured() {
        let mut config = MultiScaleConfig::default();
        config.principal_axis_options = PrincipalAxisOptions { m: Some(1), ..Default::default() };
        let analysis = populated(config);
        let result = analysis
            .principal_axis(Some(&PrincipalAxisOptions { m: Some(2), ..Default::default() }))
            .unwrap();
        assert_eq!(result.m, 2);
    }

    #[test]
    fn test_report_default_flags_single_subsection() {
        let analysis = populated(MultiScaleConfig::default());
        let localizer = Localizer::new().unwrap();
        let report = analysis.report(&localizer).unwrap();
        assert_eq!(report.title, "Multiple Scale analysis");
        let titles: Vec<&str> = report.subsections().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Reliability analysis of scales"]);
    }

    #[test]
    fn test_report_per_scale_sections_in_registration_order() {
        let analysis = populated(MultiScaleConfig::default());
        let localizer = Localizer::new().unwrap();
        let report = analysis.report(&localizer).unwrap();
        let reliability = report.subsections().next().unwrap();
        let scale_titles: Vec<&str> =
            reliability.subsections().map(|s| s.title.as_str()).collect();
        assert_eq!(scale_titles, vec!["Scale s1", "Scale s2"]);
    }

    #[test]
    fn test_report_all_sections_in_fixed_order() {
        let config = MultiScaleConfig {
            name: "Battery".into(),
            summary_correlation_matrix: true,
            summary_pca: true,
            summary_principal_axis: true,
            ..Default::default()
        };
        let analysis = populated(config);
        let localizer = Localizer::new().unwrap();
        let report = analysis.report(&localizer).unwrap();
        assert_eq!(report.title, "Battery");
        let titles: Vec<&str> = report.subsections().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Reliability analysis of scales",
                "Correlation matrix for Battery",
                "PCA for Battery",
                "Principal Axis for Battery",
            ]
        );
    }

    #[test]
    fn test_report_recomputes_after_registry_change() {
        let mut analysis = populated(MultiScaleConfig::default());
        let localizer = Localizer::new().unwrap();
        analysis.remove_scale("s2");
        let report = analysis.report(&localizer).unwrap();
        let reliability = report.subsections().next().unwrap();
        assert_eq!(reliability.subsections().count(), 1);
    }

    #[test]
    fn test_report_propagates_dimension_mismatch() {
        let config =
            MultiScaleConfig { summary_correlation_matrix: true, ..Default::default() };
        let analysis = MultiScaleAnalysis::build(config, |a| {
            a.add_scale("s1", dataset(vec![vec![1.0, 2.0, 3.0]]), None);
            a.add_scale("s2", dataset(vec![vec![1.0, 2.0]]), None);
        });
        let localizer = Localizer::new().unwrap();
        let err = analysis.report(&localizer).unwrap_err();
        assert!(matches!(err, AnalysisError::DimensionMismatch { expected: 3, found: 2 }));
    }

    #[test]
    fn test_report_skips_uncomputable_sections_when_flags_off() {
        // Mismatched composites are fine as long as no cross-scale summary
        // is requested
        let analysis = MultiScaleAnalysis::build(MultiScaleConfig::default(), |a| {
            a.add_scale("s1", dataset(vec![vec![1.0, 2.0, 3.0]]), None);
            a.add_scale("s2", dataset(vec![vec![1.0, 2.0]]), None);
        });
        let localizer = Localizer::new().unwrap();
        assert!(analysis.report(&localizer).is_ok());
    }

    #[test]
    fn test_correlation_matrix_not_cached() {
        let mut analysis = populated(MultiScaleConfig::default());
        assert_eq!(analysis.correlation_matrix().unwrap().dim(), 2);
        analysis.add_scale("s3", dataset(vec![vec![2.0, 1.0, 4.0]]), None);
        assert_eq!(analysis.correlation_matrix().unwrap().dim(), 3);
    }
}
