use std::path::Path;

use crate::data::aggregate::{
    self, cost_half_million_by_sector, CategoryCount, ScopeSummaryRow,
};
use crate::data::error::ExportError;
use crate::data::export;
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::model::{ProjectDataset, ProjectRecord};

// ---------------------------------------------------------------------------
// Dashboard views
// ---------------------------------------------------------------------------

/// Which central view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardView {
    #[default]
    Projects,
    Summary,
    Charts,
}

impl DashboardView {
    pub const ALL: [DashboardView; 3] = [
        DashboardView::Projects,
        DashboardView::Summary,
        DashboardView::Charts,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DashboardView::Projects => "Projects",
            DashboardView::Summary => "Summary",
            DashboardView::Charts => "Charts",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// The base dataset is loaded once and never mutated; the filtered view and
/// its aggregations are recomputed in full from it on every criteria change.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until the user loads a file).
    pub dataset: Option<ProjectDataset>,

    /// Current sidebar selections.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria, in source order.
    pub visible_indices: Vec<usize>,

    /// In-scope/out-of-scope summary of the filtered view.
    pub scope_summary: Vec<ScopeSummaryRow>,

    /// Sector counts of the filtered view.
    pub sector_counts: Vec<CategoryCount>,

    /// Top-10 location counts of the filtered view.
    pub location_counts: Vec<CategoryCount>,

    /// Sector counts of base-dataset projects under 0.5M. Computed once per
    /// load: this chart reads the unfiltered base dataset by design.
    pub cost_half_counts: Vec<CategoryCount>,

    /// Active central view.
    pub view: DashboardView,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and reset the criteria.
    pub fn set_dataset(&mut self, dataset: ProjectDataset) {
        self.criteria = FilterCriteria::default();
        self.cost_half_counts = cost_half_million_by_sector(&dataset);
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the filtered view and its aggregations after a criteria
    /// change. Full recompute from the immutable base, never incremental.
    pub fn refilter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.visible_indices = filtered_indices(ds, &self.criteria);
            let visible: Vec<&ProjectRecord> = self
                .visible_indices
                .iter()
                .map(|&i| &ds.records[i])
                .collect();
            self.scope_summary = aggregate::scope_summary(visible.iter().copied());
            self.sector_counts = aggregate::sector_distribution(visible.iter().copied());
            self.location_counts = aggregate::location_distribution(visible.iter().copied());
        }
    }

    /// Number of records in the filtered view.
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Write the current filtered view to `path` as a single-sheet xlsx.
    /// Failure aborts only the export; the session is unaffected.
    pub fn export_filtered(&self, path: &Path) -> Result<(), ExportError> {
        let Some(ds) = &self.dataset else {
            return Ok(());
        };
        let bytes = export::to_xlsx_bytes(self.visible_indices.iter().map(|&i| &ds.records[i]))?;
        std::fs::write(path, bytes).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::FlagChoice;
    use crate::data::testutil::{dataset, record};
    use std::collections::BTreeSet;

    fn sample_state() -> AppState {
        let mut state = AppState::default();
        state.set_dataset(dataset(vec![
            record("P-1").sector("Roads").in_scope("Y").cost_under_0_5m("Y").build(),
            record("P-2").sector("Water").in_scope("N").cost_under_0_5m("N").build(),
            record("P-3").sector("Roads").in_scope("Y").cost_under_0_5m("Y").build(),
        ]));
        state
    }

    #[test]
    fn loading_shows_everything() {
        let state = sample_state();
        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert_eq!(state.scope_summary.len(), 2);
    }

    #[test]
    fn refilter_recomputes_view_and_aggregations() {
        let mut state = sample_state();
        state.criteria.sectors = BTreeSet::from(["Water".to_string()]);
        state.refilter();

        assert_eq!(state.visible_indices, vec![1]);
        assert_eq!(state.sector_counts.len(), 1);
        assert_eq!(state.scope_summary[0].label, "Out of Scope");
        assert_eq!(state.scope_summary[0].percent, 100.0);
    }

    #[test]
    fn cost_half_chart_ignores_criteria_changes() {
        let mut state = sample_state();
        let baseline = state.cost_half_counts.clone();

        state.criteria.sectors = BTreeSet::from(["Water".to_string()]);
        state.criteria.in_scope = FlagChoice::No;
        state.refilter();

        assert_eq!(state.cost_half_counts, baseline);
        assert_eq!(state.cost_half_counts[0].count, 2);
    }

    #[test]
    fn empty_view_is_valid() {
        let mut state = sample_state();
        state.criteria.sectors = BTreeSet::from(["Energy".to_string()]);
        state.refilter();

        assert!(state.visible_indices.is_empty());
        assert!(state.scope_summary.is_empty());
        assert!(state.sector_counts.is_empty());
    }
}
