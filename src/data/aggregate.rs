use std::collections::BTreeMap;

use super::model::AccidentDataset;

// ---------------------------------------------------------------------------
// Cause normalization
// ---------------------------------------------------------------------------

/// Normalize a cause string for matching: trim and lowercase.
///
/// Applied uniformly wherever causes are compared, so `"Alcohol"`,
/// `" alcohol "` and `"ALCOHOL"` are the same cause.
pub fn normalize_cause(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Trend: per-year counts for one cause
// ---------------------------------------------------------------------------

/// Count the visible records matching `cause`, grouped by year.
///
/// Returns `(year, count)` pairs in strictly ascending year order. An empty
/// result means the cause matches no visible record and the caller should
/// warn instead of plotting.
pub fn yearly_trend(
    dataset: &AccidentDataset,
    visible: &[usize],
    cause: &str,
) -> Vec<(i64, u64)> {
    let wanted = normalize_cause(cause);
    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();

    for &i in visible {
        let rec = &dataset.records[i];
        let Some(rec_cause) = &rec.main_cause else {
            continue;
        };
        if normalize_cause(rec_cause) == wanted {
            *counts.entry(rec.year).or_default() += 1;
        }
    }

    counts.into_iter().collect()
}

/// Canonical labels of the causes present among the visible records, sorted.
///
/// Drives the trend page's dropdown, which therefore shrinks as filters are
/// applied.
pub fn visible_causes(dataset: &AccidentDataset, visible: &[usize]) -> Vec<String> {
    let mut labels: BTreeMap<String, String> = BTreeMap::new();
    for &i in visible {
        if let Some(cause) = &dataset.records[i].main_cause {
            let key = normalize_cause(cause);
            let label = dataset
                .cause_label(&key)
                .unwrap_or(cause.as_str())
                .to_string();
            labels.entry(key).or_insert(label);
        }
    }
    labels.into_values().collect()
}

// ---------------------------------------------------------------------------
// Distribution: per-cause counts
// ---------------------------------------------------------------------------

/// One slice of the cause distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CauseCount {
    /// Canonical display label.
    pub label: String,
    pub count: u64,
}

/// Count visible records per distinct cause, descending by count.
///
/// Causes are grouped by their normalized key and labelled with the dataset's
/// canonical casing. Ties break alphabetically so the order is stable.
/// Records without a cause are excluded (they still show in the data table).
pub fn cause_distribution(dataset: &AccidentDataset, visible: &[usize]) -> Vec<CauseCount> {
    let mut counts: BTreeMap<String, (String, u64)> = BTreeMap::new();

    for &i in visible {
        let Some(cause) = &dataset.records[i].main_cause else {
            continue;
        };
        let key = normalize_cause(cause);
        let entry = counts.entry(key.clone()).or_insert_with(|| {
            let label = dataset
                .cause_label(&key)
                .unwrap_or(cause.as_str())
                .to_string();
            (label, 0)
        });
        entry.1 += 1;
    }

    let mut slices: Vec<CauseCount> = counts
        .into_values()
        .map(|(label, count)| CauseCount { label, count })
        .collect();
    slices.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::filtered_indices;
    use crate::data::loader::read_records;
    use std::collections::BTreeSet;

    fn dataset(text: &str) -> AccidentDataset {
        read_records(csv::Reader::from_reader(text.as_bytes())).unwrap()
    }

    fn all_indices(ds: &AccidentDataset) -> Vec<usize> {
        (0..ds.len()).collect()
    }

    #[test]
    fn trend_counts_sum_to_matching_rows_in_ascending_years() {
        let ds = dataset(
            "Year,Main Cause\n2021,Speeding\n2019,Speeding\n2019,Speeding\n\
             2020,Alcohol\n2021,Speeding\n",
        );
        let trend = yearly_trend(&ds, &all_indices(&ds), "Speeding");

        let total: u64 = trend.iter().map(|(_, c)| c).sum();
        assert_eq!(total, 4);

        let years: Vec<i64> = trend.iter().map(|(y, _)| *y).collect();
        assert_eq!(years, vec![2019, 2021]);
        assert_eq!(trend, vec![(2019, 2), (2021, 2)]);
    }

    #[test]
    fn trend_after_year_filter_matches_the_scenario() {
        let ds = dataset(
            "Year,Main Cause\n2019,Speeding\n2019,Speeding\n2020,Speeding\n\
             2021,Speeding\n2021,Speeding\n",
        );
        let visible = filtered_indices(&ds, (2020, 2021), &BTreeSet::new());
        assert_eq!(visible.len(), 3);

        let trend = yearly_trend(&ds, &visible, "Speeding");
        assert_eq!(trend, vec![(2020, 1), (2021, 2)]);
    }

    #[test]
    fn trend_normalization_is_idempotent() {
        let ds = dataset("Year,Main Cause\n2020,Alcohol\n2021, alcohol \n2021,ALCOHOL\n");
        let visible = all_indices(&ds);

        let a = yearly_trend(&ds, &visible, "Alcohol");
        let b = yearly_trend(&ds, &visible, " alcohol ");
        let c = yearly_trend(&ds, &visible, "ALCOHOL");
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, vec![(2020, 1), (2021, 2)]);
    }

    #[test]
    fn unknown_cause_yields_empty_trend() {
        let ds = dataset("Year,Main Cause\n2020,Speeding\n");
        assert!(yearly_trend(&ds, &all_indices(&ds), "Weather").is_empty());
    }

    #[test]
    fn distribution_counts_sum_to_caused_rows_sorted_descending() {
        let ds = dataset(
            "Year,Main Cause\n2020,Speeding\n2020,Alcohol\n2021,Speeding\n\
             2021,Speeding\n2021,Weather\n",
        );
        let dist = cause_distribution(&ds, &all_indices(&ds));

        let total: u64 = dist.iter().map(|s| s.count).sum();
        assert_eq!(total, ds.len() as u64);
        for pair in dist.windows(2) {
            assert!(pair[0].count >= pair[1].count);
        }
        assert_eq!(dist[0].label, "Speeding");
        assert_eq!(dist[0].count, 3);
    }

    #[test]
    fn distribution_merges_casing_variants_under_one_label() {
        let ds = dataset("Year,Main Cause\n2020,Alcohol\n2021,ALCOHOL\n2021, alcohol \n");
        let dist = cause_distribution(&ds, &all_indices(&ds));
        assert_eq!(dist.len(), 1);
        assert_eq!(dist[0].label, "Alcohol");
        assert_eq!(dist[0].count, 3);
    }

    #[test]
    fn distribution_excludes_uncaused_rows_without_crashing() {
        let ds = dataset("Year,Main Cause\n2020,\n2020,Speeding\n2021,\n");
        let dist = cause_distribution(&ds, &all_indices(&ds));
        assert_eq!(dist, vec![CauseCount { label: "Speeding".into(), count: 1 }]);
    }

    #[test]
    fn dropdown_causes_shrink_with_the_filter() {
        let ds = dataset("Year,Main Cause\n2019,Weather\n2020,Speeding\n2021,Alcohol\n");
        let visible = filtered_indices(&ds, (2020, 2021), &BTreeSet::new());
        let causes = visible_causes(&ds, &visible);
        assert_eq!(causes, vec!["Alcohol".to_string(), "Speeding".to_string()]);
    }
}
