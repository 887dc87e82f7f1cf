use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while loading a project list. Fatal to the load action: no
/// partial dataset is ever produced.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),
    #[error("workbook contains no sheets")]
    NoSheets,
    #[error("source ends before the header row")]
    MissingHeader,
    #[error("source has {found} columns, expected at least {expected}")]
    TooFewColumns { found: usize, expected: usize },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure while exporting the filtered view. Aborts only the export
/// action; the rest of the session is unaffected.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet serialization failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("could not write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
