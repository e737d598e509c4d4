//! Order-preserving registry of named scales.

use crate::scale::analysis::{ScaleAnalysis, ScaleOptions};
use crate::scale::dataset::ItemDataset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered mapping from scale code to its analysis.
///
/// Iteration order is registration order. Re-registering an existing code
/// overwrites the stored analysis in place without moving the code's
/// position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScaleRegistry {
    order: Vec<String>,
    scales: HashMap<String, ScaleAnalysis>,
}

impl ScaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a scale under `code`, constructing its analysis from the
    /// dataset. The scale name defaults to `"Scale {code}"` when the options
    /// carry none. An existing entry for `code` is silently overwritten in
    /// place.
    pub fn add_scale(
        &mut self,
        code: impl Into<String>,
        dataset: ItemDataset,
        options: Option<ScaleOptions>,
    ) -> &ScaleAnalysis {
        let code = code.into();
        let name = options
            .and_then(|o| o.name)
            .unwrap_or_else(|| format!("Scale {}", code));
        if !self.scales.contains_key(&code) {
            self.order.push(code.clone());
        }
        self.scales.insert(code.clone(), ScaleAnalysis::new(dataset, name));
        &self.scales[&code]
    }

    /// Stored analysis for `code`, if registered.
    pub fn get_scale(&self, code: &str) -> Option<&ScaleAnalysis> {
        self.scales.get(code)
    }

    /// Remove and return the entry for `code`. Unknown codes leave the
    /// registry untouched and return `None`.
    pub fn remove_scale(&mut self, code: &str) -> Option<ScaleAnalysis> {
        let removed = self.scales.remove(code)?;
        self.order.retain(|candidate| candidate != code);
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Registered codes in registration order.
    pub fn codes(&self) -> &[String] {
        &self.order
    }

    /// Iterate `(code, analysis)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScaleAnalysis)> {
        self.order.iter().map(|code| (code.as_str(), &self.scales[code]))
    }
}
