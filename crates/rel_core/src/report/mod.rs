//! # Report Module
//!
//! Hierarchical report tree used to present analysis results.
//!
//! ## Submodules
//!
//! - `builder` - Section tree, building context, `Renderable` trait
//! - `text` - Plain-text rendering of a section tree
//! - `locale` - Fluent-based label lookup for section titles

pub mod builder;
pub mod locale;
pub mod text;

pub use builder::{Renderable, ReportElement, ReportSection, ReportTable, SectionBuilder};
pub use locale::{Localizer, DEFAULT_LOCALE, SUPPORTED_LOCALES};
pub use text::render_text;
