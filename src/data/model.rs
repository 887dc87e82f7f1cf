use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// Canonical column names, in source order. Input files are mapped onto these
/// positionally; exports write them back as the header row.
pub const COLUMN_NAMES: [&str; 12] = [
    "Code",
    "Location",
    "Intervention",
    "Sector",
    "Proposer",
    "Cost <4M",
    "Cost <2M",
    "Cost <1M",
    "Cost <0.5M",
    "In Scope",
    "Rationale",
    "Comment",
];

// ---------------------------------------------------------------------------
// ProjectRecord – one row of the project list
// ---------------------------------------------------------------------------

/// A single project (one row of the source spreadsheet).
///
/// All fields except `code` are nullable; a `None` means the source cell was
/// empty. Flag fields (`cost_under_*`, `in_scope`) keep their raw string form
/// and are only trimmed at comparison time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    pub code: String,
    pub location: Option<String>,
    pub intervention: Option<String>,
    pub sector: Option<String>,
    pub proposer: Option<String>,
    pub cost_under_4m: Option<String>,
    pub cost_under_2m: Option<String>,
    pub cost_under_1m: Option<String>,
    pub cost_under_0_5m: Option<String>,
    pub in_scope: Option<String>,
    pub rationale: Option<String>,
    pub comment: Option<String>,
}

impl ProjectRecord {
    /// Build a record from positional cells. Returns `None` when the Code
    /// cell is empty or blank — such rows are dropped at load time.
    pub fn from_columns(cells: &[Option<String>]) -> Option<Self> {
        let code = cells.first().cloned().flatten()?;
        if code.trim().is_empty() {
            return None;
        }
        let field = |i: usize| cells.get(i).cloned().flatten();
        Some(ProjectRecord {
            code,
            location: field(1),
            intervention: field(2),
            sector: field(3),
            proposer: field(4),
            cost_under_4m: field(5),
            cost_under_2m: field(6),
            cost_under_1m: field(7),
            cost_under_0_5m: field(8),
            in_scope: field(9),
            rationale: field(10),
            comment: field(11),
        })
    }

    /// Value of the column at `index` (order of [`COLUMN_NAMES`]).
    pub fn column(&self, index: usize) -> Option<&str> {
        match index {
            0 => Some(self.code.as_str()),
            1 => self.location.as_deref(),
            2 => self.intervention.as_deref(),
            3 => self.sector.as_deref(),
            4 => self.proposer.as_deref(),
            5 => self.cost_under_4m.as_deref(),
            6 => self.cost_under_2m.as_deref(),
            7 => self.cost_under_1m.as_deref(),
            8 => self.cost_under_0_5m.as_deref(),
            9 => self.in_scope.as_deref(),
            10 => self.rationale.as_deref(),
            11 => self.comment.as_deref(),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ProjectDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded project list, with distinct-value indices for the three
/// categorical columns so the filter widgets can be populated without
/// rescanning. Records keep source order; the dataset is immutable after
/// load.
#[derive(Debug, Clone)]
pub struct ProjectDataset {
    /// All valid records (rows with a non-empty Code), in source order.
    pub records: Vec<ProjectRecord>,
    /// Distinct non-null Sector values, sorted.
    pub sectors: BTreeSet<String>,
    /// Distinct non-null Location values, sorted.
    pub locations: BTreeSet<String>,
    /// Distinct non-null Proposer values, sorted.
    pub proposers: BTreeSet<String>,
}

impl ProjectDataset {
    /// Build the categorical indices from the loaded records.
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        let mut sectors = BTreeSet::new();
        let mut locations = BTreeSet::new();
        let mut proposers = BTreeSet::new();

        for record in &records {
            if let Some(s) = &record.sector {
                sectors.insert(s.clone());
            }
            if let Some(l) = &record.location {
                locations.insert(l.clone());
            }
            if let Some(p) = &record.proposer {
                proposers.insert(p.clone());
            }
        }
        ProjectDataset {
            records,
            sectors,
            locations,
            proposers,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
