//! # Scale Module
//!
//! A scale is a named reliability sub-analysis over a dataset of item
//! vectors (for example, survey items belonging to one construct).
//!
//! ## Submodules
//!
//! - `dataset` - Named item columns with dimension checking
//! - `analysis` - Reliability statistics and report rendering for one scale

pub mod analysis;
pub mod dataset;

pub use analysis::{ScaleAnalysis, ScaleOptions};
pub use dataset::ItemDataset;
