//! Session state of the explorer.
//!
//! The state starts [`Phase::Empty`] and becomes [`Phase::Loaded`] once the
//! dataset arrives. Until then every query answers with empty results, so
//! callers never need to special-case a failed load.

use bjcp_model::{Dataset, StyleTagDescription, Subcategory};
use tracing::{debug, info};

use crate::error::Result;
use crate::filter::{FilterSelection, FilterState, evaluate};
use crate::search::SearchIndex;

#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Empty,
    Loaded(Dataset),
}

/// Dataset plus the current filter selection.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    phase: Phase,
    filters: FilterState,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the loaded dataset. Any previous filter selection is dropped.
    pub fn populate(&mut self, dataset: Dataset) {
        info!(
            styles = dataset.subcategories.len(),
            tag_categories = dataset.tag_descriptions.len(),
            "state populated"
        );
        self.filters.clear();
        self.phase = Phase::Loaded(dataset);
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.phase, Phase::Loaded(_))
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.phase {
            Phase::Loaded(dataset) => Some(dataset),
            Phase::Empty => None,
        }
    }

    #[must_use]
    pub fn tag_descriptions(&self) -> &[StyleTagDescription] {
        self.dataset()
            .map(|dataset| dataset.tag_descriptions.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn subcategories(&self) -> &[Subcategory] {
        self.dataset()
            .map(|dataset| dataset.subcategories.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Toggle a raw `(category, value)` pair.
    pub fn toggle(&mut self, category: &str, value: &str) {
        self.filters.toggle(category, value);
    }

    /// Resolve `selection` against the tag vocabulary, then toggle it.
    ///
    /// Does nothing until a dataset is populated.
    pub fn apply(&mut self, selection: &FilterSelection) -> Result<()> {
        if !self.is_loaded() {
            debug!(filter = %selection, "dataset not loaded, ignoring filter");
            return Ok(());
        }
        let resolved = selection.resolve(self.tag_descriptions())?;
        debug!(filter = %resolved, "applying filter");
        self.filters.toggle(resolved.category, resolved.tag);
        Ok(())
    }

    /// Styles matching the current selection, recomputed from scratch.
    #[must_use]
    pub fn matching(&self) -> Vec<&Subcategory> {
        let matches = evaluate(self.subcategories(), &self.filters);
        debug!(
            filters = self.filters.len(),
            matches = matches.len(),
            "filters evaluated"
        );
        matches
    }

    #[must_use]
    pub fn search_index(&self) -> SearchIndex<'_> {
        SearchIndex::new(self.subcategories())
    }
}
