//! # rel_core - Multi-Scale Reliability Analysis Engine
//!
//! This library aggregates named "scale" reliability sub-analyses into one
//! multi-scale result: per-scale Cronbach reliability, an inter-scale
//! correlation matrix over composite scores, on-demand principal-component
//! and principal-axis factor analyses, and hierarchical report assembly.
//!
//! ## Features
//! - Order-preserving scale registry with silent in-place re-registration
//! - Composite vectors and Pearson correlation matrix derived fresh per call
//! - PCA and principal-axis extraction with configured or overriding options
//! - Localized, hierarchical report building
//!
//! ## Example
//! ```
//! use rel_core::{ItemDataset, Localizer, MultiScaleAnalysis, MultiScaleConfig};
//!
//! let config = MultiScaleConfig { summary_correlation_matrix: true, ..Default::default() };
//! let analysis = MultiScaleAnalysis::build(config, |a| {
//!     a.add_scale(
//!         "s1",
//!         ItemDataset::from_columns(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap(),
//!         None,
//!     );
//!     a.add_scale(
//!         "s2",
//!         ItemDataset::from_columns(vec![vec![1.0, 0.0, 2.0], vec![2.0, 1.0, 2.0]]).unwrap(),
//!         None,
//!     );
//! });
//! let localizer = Localizer::new().unwrap();
//! let report = analysis.report(&localizer).unwrap();
//! assert_eq!(report.subsections().count(), 2);
//! ```

pub mod error;
pub mod factor;
pub mod multiscale;
pub mod report;
pub mod scale;
pub mod stats;

// Re-export the main analysis surface
pub use error::{AnalysisError, Result};
pub use multiscale::{
    build_correlation_matrix, MultiScaleAnalysis, MultiScaleConfig, ReportAssembler,
    ScaleRegistry, DEFAULT_ANALYSIS_NAME,
};

// Re-export collaborator and result types
pub use factor::{Pca, PcaOptions, PrincipalAxis, PrincipalAxisOptions};
pub use report::{
    render_text, Localizer, Renderable, ReportElement, ReportSection, ReportTable,
    SectionBuilder,
};
pub use scale::{ItemDataset, ScaleAnalysis, ScaleOptions};
pub use stats::{correlation_matrix, pearson, CorrelationMatrix};
