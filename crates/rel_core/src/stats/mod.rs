//! # Statistics Module
//!
//! Numeric primitives shared by the scale and factor analyses.
//!
//! ## Submodules
//!
//! - `descriptive` - Mean, sample variance, standard deviation
//! - `correlation` - Pearson correlation and named-vector correlation matrices

pub mod correlation;
pub mod descriptive;

pub use correlation::{correlation_matrix, pearson, CorrelationMatrix};
pub use descriptive::{mean, sd, variance};
