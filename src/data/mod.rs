/// Data layer: core types, loading, filtering, aggregation, and export.
///
/// Pipeline:
/// ```text
///  .xlsx / .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip junk rows, map 12 columns, drop codeless rows
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ProjectDataset │  Vec<ProjectRecord>, distinct-value indices
///   └────────────────┘
///        │
///        ├──────────────────────────────┐
///        ▼                              ▼
///   ┌──────────┐                  ┌───────────┐
///   │  filter   │  criteria →     │ aggregate │  scope summary,
///   └──────────┘  surviving idx   └───────────┘  count distributions
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  filtered view → xlsx bytes
///   └──────────┘
/// ```
pub mod aggregate;
pub mod error;
pub mod export;
pub mod filter;
pub mod loader;
pub mod model;

#[cfg(test)]
pub(crate) mod testutil {
    use super::model::{ProjectDataset, ProjectRecord};

    /// Start building a test record with the given code.
    pub fn record(code: &str) -> RecordBuilder {
        RecordBuilder(ProjectRecord {
            code: code.to_string(),
            location: None,
            intervention: None,
            sector: None,
            proposer: None,
            cost_under_4m: None,
            cost_under_2m: None,
            cost_under_1m: None,
            cost_under_0_5m: None,
            in_scope: None,
            rationale: None,
            comment: None,
        })
    }

    pub fn dataset(records: Vec<ProjectRecord>) -> ProjectDataset {
        ProjectDataset::from_records(records)
    }

    pub struct RecordBuilder(ProjectRecord);

    impl RecordBuilder {
        pub fn location(mut self, v: &str) -> Self {
            self.0.location = Some(v.to_string());
            self
        }
        pub fn sector(mut self, v: &str) -> Self {
            self.0.sector = Some(v.to_string());
            self
        }
        pub fn proposer(mut self, v: &str) -> Self {
            self.0.proposer = Some(v.to_string());
            self
        }
        pub fn cost_under_4m(mut self, v: &str) -> Self {
            self.0.cost_under_4m = Some(v.to_string());
            self
        }
        pub fn cost_under_2m(mut self, v: &str) -> Self {
            self.0.cost_under_2m = Some(v.to_string());
            self
        }
        pub fn cost_under_1m(mut self, v: &str) -> Self {
            self.0.cost_under_1m = Some(v.to_string());
            self
        }
        pub fn cost_under_0_5m(mut self, v: &str) -> Self {
            self.0.cost_under_0_5m = Some(v.to_string());
            self
        }
        pub fn in_scope(mut self, v: &str) -> Self {
            self.0.in_scope = Some(v.to_string());
            self
        }
        pub fn build(self) -> ProjectRecord {
            self.0
        }
    }
}
