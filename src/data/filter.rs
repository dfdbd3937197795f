use std::collections::BTreeSet;

use super::aggregate::normalize_cause;
use super::model::AccidentDataset;

// ---------------------------------------------------------------------------
// Committed filter: the last applied year range and cause selection
// ---------------------------------------------------------------------------

/// The committed filter state shared by both pages.
///
/// `visible` is always exactly the records satisfying the stored range and
/// cause set; it changes only through [`apply`] and [`reset`], never while
/// the user is still dragging sliders (deferred-apply semantics).
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Inclusive applied year range.
    pub years: (i64, i64),
    /// Applied cause selection (canonical labels). Empty means "all".
    pub causes: BTreeSet<String>,
    /// Indices of records passing the applied filter (cached).
    pub visible: Vec<usize>,
}

/// Initialise a [`FilterState`] to the unfiltered view: full year bounds,
/// no cause restriction, every record visible.
pub fn init_filter_state(dataset: &AccidentDataset) -> FilterState {
    FilterState {
        years: dataset.year_bounds,
        causes: BTreeSet::new(),
        visible: (0..dataset.len()).collect(),
    }
}

/// Return indices of records passing the given year range and cause set.
///
/// A record passes when:
/// * its year is within `[years.0, years.1]` inclusive, and
/// * `causes` is empty (no restriction) or its normalized cause is among the
///   normalized selections. Records with no cause fail any non-empty set.
pub fn filtered_indices(
    dataset: &AccidentDataset,
    years: (i64, i64),
    causes: &BTreeSet<String>,
) -> Vec<usize> {
    let normalized: BTreeSet<String> = causes.iter().map(|c| normalize_cause(c)).collect();

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            if rec.year < years.0 || rec.year > years.1 {
                return false;
            }
            if normalized.is_empty() {
                return true;
            }
            match &rec.main_cause {
                Some(cause) => normalized.contains(&normalize_cause(cause)),
                None => false,
            }
        })
        .map(|(i, _)| i)
        .collect()
}

impl FilterState {
    /// Commit a new year range and cause set, recomputing `visible`.
    pub fn apply(
        &mut self,
        dataset: &AccidentDataset,
        years: (i64, i64),
        causes: BTreeSet<String>,
    ) {
        self.visible = filtered_indices(dataset, years, &causes);
        self.years = years;
        self.causes = causes;
    }

    /// Restore the unfiltered view.
    pub fn reset(&mut self, dataset: &AccidentDataset) {
        *self = init_filter_state(dataset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_records;

    fn speeding_dataset() -> AccidentDataset {
        // 5 rows, years {2019,2019,2020,2021,2021}, all "Speeding".
        let text = "Year,Main Cause\n\
                    2019,Speeding\n2019,Speeding\n2020,Speeding\n\
                    2021,Speeding\n2021,Speeding\n";
        read_records(csv::Reader::from_reader(text.as_bytes())).unwrap()
    }

    #[test]
    fn apply_year_range_keeps_only_rows_within_bounds() {
        let ds = speeding_dataset();
        let mut filter = init_filter_state(&ds);
        filter.apply(&ds, (2020, 2021), BTreeSet::new());

        assert_eq!(filter.visible.len(), 3);
        for &i in &filter.visible {
            assert!((2020..=2021).contains(&ds.records[i].year));
        }
    }

    #[test]
    fn cause_selection_restricts_the_year_filtered_rows() {
        let text = "Year,Main Cause\n2020,Speeding\n2020,Alcohol\n2021,Alcohol\n2022,Alcohol\n";
        let ds = read_records(csv::Reader::from_reader(text.as_bytes())).unwrap();

        let year_only = filtered_indices(&ds, (2020, 2021), &BTreeSet::new());
        let causes: BTreeSet<String> = ["Alcohol".to_string()].into();
        let both = filtered_indices(&ds, (2020, 2021), &causes);

        assert!(both.iter().all(|i| year_only.contains(i)));
        for &i in &both {
            assert_eq!(ds.records[i].main_cause.as_deref(), Some("Alcohol"));
        }
        assert_eq!(both.len(), 2);
    }

    #[test]
    fn cause_matching_ignores_case_and_whitespace() {
        let text = "Year,Main Cause\n2020, Alcohol \n2021,ALCOHOL\n2021,Speeding\n";
        let ds = read_records(csv::Reader::from_reader(text.as_bytes())).unwrap();

        let causes: BTreeSet<String> = ["alcohol".to_string()].into();
        let visible = filtered_indices(&ds, ds.year_bounds, &causes);
        assert_eq!(visible.len(), 2);
    }

    #[test]
    fn uncaused_rows_fail_any_nonempty_selection() {
        let text = "Year,Main Cause\n2020,\n2020,Speeding\n";
        let ds = read_records(csv::Reader::from_reader(text.as_bytes())).unwrap();

        let causes: BTreeSet<String> = ["Speeding".to_string()].into();
        assert_eq!(filtered_indices(&ds, ds.year_bounds, &causes).len(), 1);
        assert_eq!(filtered_indices(&ds, ds.year_bounds, &BTreeSet::new()).len(), 2);
    }

    #[test]
    fn reset_restores_full_dataset_and_bounds() {
        let ds = speeding_dataset();
        let mut filter = init_filter_state(&ds);
        filter.apply(&ds, (2020, 2020), ["Speeding".to_string()].into());
        assert_eq!(filter.visible.len(), 1);

        filter.reset(&ds);
        assert_eq!(filter.visible.len(), ds.len());
        assert_eq!(filter.years, (2019, 2021));
        assert!(filter.causes.is_empty());
    }
}
