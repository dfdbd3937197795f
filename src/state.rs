use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::color::CauseColors;
use crate::data::filter::{FilterState, init_filter_state};
use crate::data::loader;
use crate::data::model::AccidentDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which dashboard page is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Yearly trend line chart for one selected cause.
    Trend,
    /// Cause distribution pie chart plus the filtered data table.
    Distribution,
}

/// The sidebar widgets' current positions, not yet committed.
///
/// Editing a slider or checkbox only changes this; the shared [`FilterState`]
/// moves when "Apply Filter" or "Reset" is pressed.
#[derive(Debug, Clone, Default)]
pub struct PendingFilter {
    pub years: (i64, i64),
    pub causes: BTreeSet<String>,
}

/// The full UI state, independent of rendering. One instance is shared by
/// both pages.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<AccidentDataset>,

    /// Path the dataset was (or will be) loaded from.
    pub data_path: PathBuf,

    /// Active page.
    pub page: Page,

    /// Uncommitted sidebar selections.
    pub pending: PendingFilter,

    /// Committed filter shared by both pages.
    pub filter: FilterState,

    /// Cause chosen in the trend page's dropdown.
    pub selected_cause: Option<String>,

    /// Cause → colour mapping for the pie chart and legend.
    pub colors: CauseColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        let mut state = AppState {
            dataset: None,
            data_path,
            page: Page::Trend,
            pending: PendingFilter::default(),
            filter: FilterState::default(),
            selected_cause: None,
            colors: CauseColors::default(),
            status_message: None,
        };
        state.reload();
        state
    }

    /// Load (or reload) the CSV at `data_path`. Errors become the status
    /// message; the previous dataset is kept so the session survives.
    pub fn reload(&mut self) {
        let path = self.data_path.clone();
        self.load_from(&path);
    }

    /// Load a dataset from `path` and make it current.
    pub fn load_from(&mut self, path: &Path) {
        match loader::load_csv(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records from {} ({}..={})",
                    dataset.len(),
                    path.display(),
                    dataset.year_bounds.0,
                    dataset.year_bounds.1
                );
                self.data_path = path.to_path_buf();
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Ingest a newly loaded dataset, initialise filters and colours.
    pub fn set_dataset(&mut self, dataset: AccidentDataset) {
        self.filter = init_filter_state(&dataset);
        self.pending = PendingFilter {
            years: dataset.year_bounds,
            causes: BTreeSet::new(),
        };
        self.colors = CauseColors::new(dataset.cause_labels());
        self.selected_cause = None;
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Commit the pending sidebar selections to the shared filter.
    pub fn apply_filter(&mut self) {
        if let Some(ds) = &self.dataset {
            let years = self.pending.years;
            let causes = self.pending.causes.clone();
            self.filter.apply(ds, years, causes);
        }
    }

    /// Restore the unfiltered view and snap the sidebar back to match.
    pub fn reset_filter(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filter.reset(ds);
            self.pending = PendingFilter {
                years: ds.year_bounds,
                causes: BTreeSet::new(),
            };
        }
    }

    /// Toggle one cause in the pending (uncommitted) selection.
    pub fn toggle_pending_cause(&mut self, cause: &str) {
        if !self.pending.causes.remove(cause) {
            self.pending.causes.insert(cause.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_records;

    fn state_with(text: &str) -> AppState {
        let dataset = read_records(csv::Reader::from_reader(text.as_bytes())).unwrap();
        let mut state = AppState {
            dataset: None,
            data_path: PathBuf::new(),
            page: Page::Trend,
            pending: PendingFilter::default(),
            filter: FilterState::default(),
            selected_cause: None,
            colors: CauseColors::default(),
            status_message: None,
        };
        state.set_dataset(dataset);
        state
    }

    #[test]
    fn slider_edits_do_not_filter_until_apply() {
        let mut state = state_with("Year,Main Cause\n2019,Speeding\n2020,Alcohol\n2021,Alcohol\n");

        state.pending.years = (2020, 2021);
        assert_eq!(state.filter.visible.len(), 3);

        state.apply_filter();
        assert_eq!(state.filter.visible.len(), 2);
        assert_eq!(state.filter.years, (2020, 2021));
    }

    #[test]
    fn apply_then_apply_then_reset_walks_the_state_machine() {
        let mut state = state_with("Year,Main Cause\n2019,Speeding\n2020,Alcohol\n2021,Alcohol\n");

        state.pending.years = (2020, 2021);
        state.apply_filter();
        assert_eq!(state.filter.visible.len(), 2);

        state.toggle_pending_cause("Alcohol");
        state.apply_filter();
        assert_eq!(state.filter.visible.len(), 2);
        assert!(state.filter.causes.contains("Alcohol"));

        state.reset_filter();
        assert_eq!(state.filter.visible.len(), 3);
        assert_eq!(state.pending.years, (2019, 2021));
        assert!(state.pending.causes.is_empty());
    }

    #[test]
    fn toggle_pending_cause_round_trips() {
        let mut state = state_with("Year,Main Cause\n2020,Speeding\n");
        state.toggle_pending_cause("Speeding");
        assert!(state.pending.causes.contains("Speeding"));
        state.toggle_pending_cause("Speeding");
        assert!(state.pending.causes.is_empty());
    }
}
