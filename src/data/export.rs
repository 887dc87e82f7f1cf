use rust_xlsxwriter::{Workbook, Worksheet};

use super::error::ExportError;
use super::model::{ProjectRecord, COLUMN_NAMES};

/// Sheet name of the exported workbook.
pub const SHEET_NAME: &str = "Filtered Projects";

/// Suggested download file name.
pub const DEFAULT_FILE_NAME: &str = "filtered_projects.xlsx";

/// Serialize the given records to a single-sheet xlsx byte buffer: a header
/// row with the twelve canonical column names followed by one row per
/// record, no index column, in the order given.
pub fn to_xlsx_bytes<'a, I>(records: I) -> Result<Vec<u8>, ExportError>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let mut workbook = Workbook::new();
    let mut worksheet = Worksheet::new();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in COLUMN_NAMES.iter().enumerate() {
        worksheet.write_string(0, col as u16, *name)?;
    }
    for (i, record) in records.into_iter().enumerate() {
        let row = (i + 1) as u32;
        for col in 0..COLUMN_NAMES.len() {
            if let Some(value) = record.column(col) {
                worksheet.write_string(row, col as u16, value)?;
            }
        }
    }

    workbook.push_worksheet(worksheet);
    Ok(workbook.save_to_buffer()?)
}
