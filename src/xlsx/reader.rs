//! Input collaborator: workbook reading.
//!
//! Extracts an ordered sequence of normalized [`TimeRecord`]s from a time
//! export workbook. Columns are located by header text, resolved once into a
//! [`ColumnMap`], never by fixed position. Both `.xls` and `.xlsx` inputs
//! open transparently.

use std::path::Path;
use std::str::FromStr;

use calamine::{Data, Reader, open_workbook_auto};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use tracing::{info, warn};

use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::TimeRecord;

/// Mapping from logical field name to physical column index.
///
/// Resolved once from the header row before any data row is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    /// Zero-based index of the project column.
    pub project: usize,
    /// Zero-based index of the consultant column.
    pub consultant: usize,
    /// Zero-based index of the logged-hours column.
    pub hours: usize,
}

impl ColumnMap {
    /// Resolves the column map from a header row.
    ///
    /// Header cells are compared after trimming. Columns beyond the three
    /// required ones (the export also carries a `Date` column, among others)
    /// are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ColumnNotFound`] naming the first configured
    /// header that is absent from the row.
    pub fn resolve(headers: &[Data], config: &ReportConfig) -> EngineResult<Self> {
        let find = |header: &str| -> EngineResult<usize> {
            headers
                .iter()
                .position(|cell| cell_text(cell) == header)
                .ok_or_else(|| EngineError::ColumnNotFound {
                    header: header.to_string(),
                })
        };

        Ok(Self {
            project: find(&config.project_header)?,
            consultant: find(&config.consultant_header)?,
            hours: find(&config.hours_header)?,
        })
    }
}

/// Reads the time export at `path` into normalized records.
///
/// Opens the workbook, resolves the configured worksheet and columns, and
/// yields one record per data row in sheet order. Blank project or
/// consultant cells become empty strings and blank or non-numeric hour
/// cells become zero; downstream passes tolerate both.
///
/// # Errors
///
/// - [`EngineError::InputNotFound`] if `path` does not exist.
/// - [`EngineError::WorkbookRead`] if the workbook cannot be opened.
/// - [`EngineError::SheetNotFound`] if the configured sheet is missing.
/// - [`EngineError::ColumnNotFound`] if a configured header is missing.
pub fn read_time_report(path: &Path, config: &ReportConfig) -> EngineResult<Vec<TimeRecord>> {
    if !path.is_file() {
        return Err(EngineError::InputNotFound {
            path: path.display().to_string(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|e| EngineError::WorkbookRead {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    if !workbook
        .sheet_names()
        .iter()
        .any(|name| name == &config.input_sheet)
    {
        return Err(EngineError::SheetNotFound {
            sheet: config.input_sheet.clone(),
        });
    }

    let range = workbook
        .worksheet_range(&config.input_sheet)
        .map_err(|e| EngineError::WorkbookRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let headers = rows.next().ok_or_else(|| EngineError::ColumnNotFound {
        header: config.project_header.clone(),
    })?;
    let columns = ColumnMap::resolve(headers, config)?;

    let mut records = Vec::new();
    for row in rows {
        let project = cell_text(row.get(columns.project).unwrap_or(&Data::Empty));
        let consultant = cell_text(row.get(columns.consultant).unwrap_or(&Data::Empty));
        let hours = cell_hours(row.get(columns.hours).unwrap_or(&Data::Empty));
        records.push(TimeRecord::new(project, consultant, hours));
    }

    if records.is_empty() {
        warn!(sheet = %config.input_sheet, "Worksheet contains no data rows");
    }
    info!(records = records.len(), path = %path.display(), "Extracted time records");

    Ok(records)
}

/// Normalizes a cell to trimmed text; empty cells become empty strings.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Normalizes a cell to decimal hours; anything non-numeric becomes zero.
fn cell_hours(cell: &Data) -> Decimal {
    match cell {
        Data::Float(f) => Decimal::from_f64(*f).unwrap_or(Decimal::ZERO),
        Data::Int(i) => Decimal::from(*i),
        Data::String(s) => Decimal::from_str(s.trim()).unwrap_or(Decimal::ZERO),
        _ => Decimal::ZERO,
    }
}
