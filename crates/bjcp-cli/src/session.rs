//! One explorer run: load the dataset, apply filters, draw charts.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bjcp_chart::{ChartRequest, ChartSet, chartable, redraw};
use bjcp_core::{AppState, FilterSelection};
use bjcp_ingest::{DatasetIssue, DatasetSource, LoadedDataset, load};

/// Loaded state of a run plus the issues met while loading.
#[derive(Debug)]
pub struct Session {
    pub source: DatasetSource,
    pub state: AppState,
    pub issues: Vec<DatasetIssue>,
}

impl Session {
    /// Fetch the dataset from `source` and populate the state.
    pub fn open(source: DatasetSource) -> Result<Self> {
        let loaded = load(&source).with_context(|| format!("load dataset from {source}"))?;
        Ok(Self::from_loaded(source, loaded))
    }

    #[must_use]
    pub fn from_loaded(source: DatasetSource, loaded: LoadedDataset) -> Self {
        let mut state = AppState::new();
        state.populate(loaded.dataset);
        Self {
            source,
            state,
            issues: loaded.issues,
        }
    }

    /// Toggle each selection in order. A selection repeated an even number of
    /// times cancels out.
    pub fn apply_filters(&mut self, selections: &[FilterSelection]) -> Result<()> {
        let span = info_span!("filter", selections = selections.len());
        let _guard = span.enter();
        for selection in selections {
            self.state
                .apply(selection)
                .with_context(|| format!("apply filter {selection}"))?;
        }
        info!(
            active = self.state.filters().len(),
            matches = self.state.matching().len(),
            "filters applied"
        );
        Ok(())
    }

    /// Charts for the styles matching the current filters.
    #[must_use]
    pub fn charts(&self, request: &ChartRequest) -> ChartSet {
        let span = info_span!("chart", width = request.container_width);
        let _guard = span.enter();
        let matching = self.state.matching();
        let mut charts = ChartSet::new();
        redraw(&mut charts, &chartable(&matching), request);
        charts
    }
}
