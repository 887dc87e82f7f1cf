use std::collections::BTreeMap;

use super::model::{ProjectDataset, ProjectRecord};

/// Maximum number of groups in the location distribution.
pub const LOCATION_TOP_N: usize = 10;

// ---------------------------------------------------------------------------
// Output shapes
// ---------------------------------------------------------------------------

/// One row of the in-scope/out-of-scope summary table.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeSummaryRow {
    pub label: String,
    pub count: usize,
    /// Share of the summarised total, rounded to 2 decimal places.
    pub percent: f64,
}

/// One bar of a categorical count distribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Scope summary
// ---------------------------------------------------------------------------

/// Group the trimmed In-Scope values of `records`, count them, and express
/// each group as a percentage of the summarised total. `"Y"` and `"N"` are
/// relabelled "In Scope" / "Out of Scope"; stray values keep their literal
/// label. Null flags are not counted. Empty input yields an empty summary.
pub fn scope_summary<'a, I>(records: I) -> Vec<ScopeSummaryRow>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        if let Some(flag) = record.in_scope.as_deref() {
            *counts.entry(flag.trim()).or_default() += 1;
        }
    }
    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut rows: Vec<ScopeSummaryRow> = counts
        .into_iter()
        .map(|(flag, count)| ScopeSummaryRow {
            label: match flag {
                "Y" => "In Scope".to_string(),
                "N" => "Out of Scope".to_string(),
                other => other.to_string(),
            },
            count,
            percent: round2(count as f64 / total as f64 * 100.0),
        })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    rows
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Categorical distributions
// ---------------------------------------------------------------------------

/// Count of filtered projects per distinct sector, descending by count.
pub fn sector_distribution<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    count_categories(records, |r| r.sector.as_deref())
}

/// Count of filtered projects per distinct location, truncated to the
/// [`LOCATION_TOP_N`] most frequent.
pub fn location_distribution<'a, I>(records: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut counts = count_categories(records, |r| r.location.as_deref());
    counts.truncate(LOCATION_TOP_N);
    counts
}

/// Sector counts of projects whose trimmed Cost <0.5M flag is "Y".
///
/// Computed over the unfiltered base dataset: this distribution deliberately
/// ignores the active criteria and only changes when a new file is loaded.
pub fn cost_half_million_by_sector(dataset: &ProjectDataset) -> Vec<CategoryCount> {
    count_categories(
        dataset
            .records
            .iter()
            .filter(|r| r.cost_under_0_5m.as_deref().map(str::trim) == Some("Y")),
        |r| r.sector.as_deref(),
    )
}

/// Group records by a nullable category, skipping nulls. Ordered by count
/// descending, label ascending within equal counts so chart order is stable.
fn count_categories<'a, I, F>(records: I, key: F) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
    F: Fn(&'a ProjectRecord) -> Option<&'a str>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        if let Some(k) = key(record) {
            *counts.entry(k).or_default() += 1;
        }
    }
    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterCriteria};
    use crate::data::testutil::{dataset, record};
    use std::collections::BTreeSet;

    #[test]
    fn scope_summary_counts_and_percentages() {
        let records = vec![
            record("P-1").in_scope("Y").build(),
            record("P-2").in_scope("Y").build(),
            record("P-3").in_scope("N").build(),
        ];
        let summary = scope_summary(&records);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].label, "In Scope");
        assert_eq!(summary[0].count, 2);
        assert_eq!(summary[0].percent, 66.67);
        assert_eq!(summary[1].label, "Out of Scope");
        assert_eq!(summary[1].count, 1);
        assert_eq!(summary[1].percent, 33.33);
    }

    #[test]
    fn scope_summary_percentages_sum_to_100() {
        let records = vec![
            record("P-1").in_scope("Y").build(),
            record("P-2").in_scope(" N ").build(),
            record("P-3").in_scope("TBD").build(),
            record("P-4").in_scope("Y").build(),
            record("P-5").in_scope("N").build(),
            record("P-6").in_scope("Y").build(),
            record("P-7").in_scope("Y").build(),
        ];
        let summary = scope_summary(&records);
        let total: f64 = summary.iter().map(|r| r.percent).sum();
        assert!((total - 100.0).abs() < 0.01, "sum was {total}");
        // Stray values keep their literal label.
        assert!(summary.iter().any(|r| r.label == "TBD"));
    }

    #[test]
    fn scope_summary_of_empty_input_is_empty() {
        let none: Vec<ProjectRecord> = Vec::new();
        assert!(scope_summary(&none).is_empty());
        // Null flags alone also produce no summary.
        let records = vec![record("P-1").build()];
        assert!(scope_summary(&records).is_empty());
    }

    #[test]
    fn sector_distribution_after_filtering() {
        let ds = dataset(vec![
            record("P-1").sector("Roads").build(),
            record("P-2").sector("Water").build(),
            record("P-3").sector("Roads").build(),
        ]);
        let criteria = FilterCriteria {
            sectors: BTreeSet::from(["Roads".to_string()]),
            ..FilterCriteria::default()
        };
        let indices = filtered_indices(&ds, &criteria);
        assert_eq!(indices.len(), 2);

        let dist = sector_distribution(indices.iter().map(|&i| &ds.records[i]));
        assert_eq!(
            dist,
            vec![CategoryCount {
                label: "Roads".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn location_distribution_caps_at_ten_groups() {
        let mut records = Vec::new();
        for i in 0..12 {
            // Town-00 appears three times, the rest once each.
            records.push(record(&format!("P-{i}")).location(&format!("Town-{i:02}")).build());
        }
        records.push(record("P-x").location("Town-00").build());
        records.push(record("P-y").location("Town-00").build());

        let dist = location_distribution(&records);
        assert_eq!(dist.len(), LOCATION_TOP_N);
        assert_eq!(dist[0].label, "Town-00");
        assert_eq!(dist[0].count, 3);
        // Ties broken alphabetically.
        assert_eq!(dist[1].label, "Town-01");
    }

    #[test]
    fn distributions_skip_null_categories() {
        let records = vec![
            record("P-1").sector("Roads").build(),
            record("P-2").build(),
        ];
        let dist = sector_distribution(&records);
        assert_eq!(dist.len(), 1);
    }

    #[test]
    fn cost_half_million_uses_the_base_dataset() {
        let ds = dataset(vec![
            record("P-1").sector("Roads").cost_under_0_5m("Y").build(),
            record("P-2").sector("Water").cost_under_0_5m(" Y ").build(),
            record("P-3").sector("Roads").cost_under_0_5m("N").build(),
            record("P-4").sector("Roads").build(),
        ]);
        let dist = cost_half_million_by_sector(&ds);
        assert_eq!(
            dist,
            vec![
                CategoryCount {
                    label: "Roads".to_string(),
                    count: 1
                },
                CategoryCount {
                    label: "Water".to_string(),
                    count: 1
                },
            ]
        );
    }
}
