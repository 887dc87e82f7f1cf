use std::io::{Cursor, Read, Seek};
use std::path::Path;

use anyhow::Context;
use calamine::{open_workbook, Data, Reader, Xlsx};

use super::error::LoadError;
use super::model::{ProjectDataset, ProjectRecord, COLUMN_NAMES};

/// Leading non-data rows in a source project list, before the header row.
pub const LEADING_ROWS: usize = 2;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a project list from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` / `.xlsm` – Excel workbook, first sheet (recommended)
/// * `.csv`            – same layout: two leading rows, header, data
///
/// The header row's content is discarded; the twelve canonical column names
/// of [`COLUMN_NAMES`] are assigned positionally. Rows without a Code are
/// dropped.
pub fn load_file(path: &Path) -> Result<ProjectDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" | "xlsm" => load_xlsx(path),
        "csv" => load_csv(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

/// Load a project list from in-memory xlsx bytes, skipping `leading_rows`
/// rows before the header. Exported files carry no leading rows, so a
/// re-load of an export uses `leading_rows = 0`.
pub fn read_xlsx_bytes(bytes: &[u8], leading_rows: usize) -> Result<ProjectDataset, LoadError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    dataset_from_workbook(&mut workbook, leading_rows)
}

// ---------------------------------------------------------------------------
// Excel loader
// ---------------------------------------------------------------------------

fn load_xlsx(path: &Path) -> Result<ProjectDataset, LoadError> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    dataset_from_workbook(&mut workbook, LEADING_ROWS)
}

fn dataset_from_workbook<RS: Read + Seek>(
    workbook: &mut Xlsx<RS>,
    leading_rows: usize,
) -> Result<ProjectDataset, LoadError> {
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(LoadError::NoSheets)?;
    let range = workbook.worksheet_range(&sheet_name)?;

    dataset_from_rows(
        range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect()),
        leading_rows,
    )
}

/// String form of a cell, `None` for empty cells. Whole floats lose the
/// trailing `.0` so flag columns stored as numbers still compare sanely.
fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => Some(format!("{}", *f as i64)),
        Data::Float(f) => Some(f.to_string()),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout mirrors the workbook layout: two leading rows, a header row,
/// then data rows. Empty fields are treated as null.
fn load_csv(path: &Path) -> Result<ProjectDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(
            record
                .iter()
                .map(|cell| {
                    if cell.is_empty() {
                        None
                    } else {
                        Some(cell.to_string())
                    }
                })
                .collect(),
        );
    }
    dataset_from_rows(rows, LEADING_ROWS)
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

/// Skip `leading_rows` rows, consume the header row, then map the remaining
/// rows positionally onto the twelve-column schema. Rows whose Code cell is
/// empty are dropped; columns past the schema are ignored.
fn dataset_from_rows<I>(rows: I, leading_rows: usize) -> Result<ProjectDataset, LoadError>
where
    I: IntoIterator<Item = Vec<Option<String>>>,
{
    let mut rows = rows.into_iter().skip(leading_rows);
    let header = rows.next().ok_or(LoadError::MissingHeader)?;
    if header.len() < COLUMN_NAMES.len() {
        return Err(LoadError::TooFewColumns {
            found: header.len(),
            expected: COLUMN_NAMES.len(),
        });
    }

    let records = rows
        .filter_map(|cells| ProjectRecord::from_columns(&cells))
        .collect();
    Ok(ProjectDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<Option<String>> {
        cells
            .iter()
            .map(|c| {
                if c.is_empty() {
                    None
                } else {
                    Some(c.to_string())
                }
            })
            .collect()
    }

    fn header() -> Vec<Option<String>> {
        row(&COLUMN_NAMES)
    }

    #[test]
    fn skips_leading_rows_and_header() {
        let rows = vec![
            row(&["Ministry of Works"]),
            row(&["Project List 2026"]),
            header(),
            row(&[
                "P-001", "Belize City", "Bridge", "Roads", "MoW", "Y", "Y", "N", "N", "Y", "", "",
            ]),
        ];
        let ds = dataset_from_rows(rows, 2).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records[0].code, "P-001");
        assert_eq!(ds.records[0].sector.as_deref(), Some("Roads"));
    }

    #[test]
    fn drops_rows_without_code() {
        let rows = vec![
            header(),
            row(&["P-001", "", "", "Roads", "", "", "", "", "", "", "", ""]),
            row(&["", "San Pedro", "", "Water", "", "", "", "", "", "", "", ""]),
            row(&["   ", "", "", "", "", "", "", "", "", "", "", ""]),
            row(&["P-002", "", "", "Water", "", "", "", "", "", "", "", ""]),
        ];
        let ds = dataset_from_rows(rows, 0).unwrap();
        let codes: Vec<&str> = ds.records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["P-001", "P-002"]);
    }

    #[test]
    fn narrow_source_is_rejected() {
        let rows = vec![row(&["Code", "Location", "Sector"])];
        match dataset_from_rows(rows, 0) {
            Err(LoadError::TooFewColumns { found: 3, expected: 12 }) => {}
            other => panic!("expected TooFewColumns, got {other:?}"),
        }
    }

    #[test]
    fn missing_header_is_rejected() {
        let rows: Vec<Vec<Option<String>>> = vec![row(&["junk"])];
        assert!(matches!(
            dataset_from_rows(rows, 2),
            Err(LoadError::MissingHeader)
        ));
    }

    #[test]
    fn distinct_values_are_indexed() {
        let rows = vec![
            header(),
            row(&["P-1", "North", "", "Roads", "MoW", "", "", "", "", "", "", ""]),
            row(&["P-2", "South", "", "Water", "MoH", "", "", "", "", "", "", ""]),
            row(&["P-3", "North", "", "Roads", "", "", "", "", "", "", "", ""]),
        ];
        let ds = dataset_from_rows(rows, 0).unwrap();
        assert_eq!(
            ds.sectors.iter().collect::<Vec<_>>(),
            vec!["Roads", "Water"]
        );
        assert_eq!(ds.locations.len(), 2);
        assert_eq!(ds.proposers.len(), 2);
    }
}
