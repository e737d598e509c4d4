use thiserror::Error;

/// Errors produced by reliability analysis operations.
///
/// Collaborator failures bubble unmodified to the outermost caller; nothing
/// is caught or translated on the way up. Absent scale codes and unknown
/// configuration keys are not errors (see `ScaleRegistry` and
/// `MultiScaleConfig`).
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Dimension mismatch: expected {expected} observations, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("Empty dataset: {0}")]
    EmptyDataset(String),

    #[error("No convergence after {iterations} iterations")]
    NoConvergence { iterations: usize },

    #[error("Failed to parse localization resource: {0}")]
    LocaleParse(String),

    #[error("Locale not loaded: {0}")]
    LocaleNotFound(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
