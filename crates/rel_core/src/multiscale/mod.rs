//! # Multi-Scale Module
//!
//! The aggregation layer: a registry of named scales, derivation of the
//! inter-scale correlation matrix from composite vectors, factor-analysis
//! dispatch with configured or overriding options, and hierarchical report
//! assembly.
//!
//! ## Submodules
//!
//! - `registry` - Order-preserving code-to-scale registry
//! - `config` - Analysis configuration with allow-listed option-map parsing
//! - `composite` - Inter-scale correlation matrix builder
//! - `analysis` - `MultiScaleAnalysis` aggregate root and report assembler

pub mod analysis;
pub mod composite;
pub mod config;
pub mod registry;

pub use analysis::{MultiScaleAnalysis, ReportAssembler};
pub use composite::build_correlation_matrix;
pub use config::{MultiScaleConfig, DEFAULT_ANALYSIS_NAME};
pub use registry::ScaleRegistry;
