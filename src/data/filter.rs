use std::collections::BTreeSet;

use super::model::{ProjectDataset, ProjectRecord};

// ---------------------------------------------------------------------------
// Filter criteria: the current sidebar selections
// ---------------------------------------------------------------------------

/// Tri-state selection for a Y/N flag column.
///
/// `Yes`/`No` match the record's trimmed value against the literal `"Y"` or
/// `"N"` — exact, case-sensitive. Null or stray values fail both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagChoice {
    #[default]
    Any,
    Yes,
    No,
}

impl FlagChoice {
    pub const ALL: [FlagChoice; 3] = [FlagChoice::Any, FlagChoice::Yes, FlagChoice::No];

    /// Whether a record's raw flag value passes this selection.
    pub fn admits(self, value: Option<&str>) -> bool {
        match self {
            FlagChoice::Any => true,
            FlagChoice::Yes => value.map(str::trim) == Some("Y"),
            FlagChoice::No => value.map(str::trim) == Some("N"),
        }
    }

    /// Widget label.
    pub fn label(self) -> &'static str {
        match self {
            FlagChoice::Any => "All",
            FlagChoice::Yes => "Y",
            FlagChoice::No => "N",
        }
    }
}

/// The full set of user-selected filter criteria.
///
/// An empty membership set means "no constraint" for that column; `Any`
/// means the same for the flag columns. All active criteria are conjunctive.
/// Rebuilt from widget state on every interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub sectors: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub proposers: BTreeSet<String>,
    pub in_scope: FlagChoice,
    pub cost_under_4m: FlagChoice,
    pub cost_under_2m: FlagChoice,
    pub cost_under_1m: FlagChoice,
    pub cost_under_0_5m: FlagChoice,
}

impl FilterCriteria {
    /// Whether any criterion is active.
    pub fn is_unconstrained(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Whether a record satisfies every active criterion.
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        member(&self.sectors, record.sector.as_deref())
            && member(&self.locations, record.location.as_deref())
            && member(&self.proposers, record.proposer.as_deref())
            && self.in_scope.admits(record.in_scope.as_deref())
            && self.cost_under_4m.admits(record.cost_under_4m.as_deref())
            && self.cost_under_2m.admits(record.cost_under_2m.as_deref())
            && self.cost_under_1m.admits(record.cost_under_1m.as_deref())
            && self.cost_under_0_5m.admits(record.cost_under_0_5m.as_deref())
    }
}

/// Membership predicate: an empty selection passes everything; a non-empty
/// selection passes only records whose value is present and selected.
fn member(selected: &BTreeSet<String>, value: Option<&str>) -> bool {
    selected.is_empty() || value.is_some_and(|v| selected.contains(v))
}

/// Return indices of records that pass all active criteria, in source order.
///
/// An empty result is valid, not an error.
pub fn filtered_indices(dataset: &ProjectDataset, criteria: &FilterCriteria) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, record)| criteria.matches(record))
        .map(|(i, _)| i)
        .collect()
}
