//! Output collaborator: workbook writing.
//!
//! Renders an [`AllocationReport`] as a two-sheet workbook: the allocation
//! table (Consultant / Total Hours / Project / Hours / %) and the FTE table
//! (Project / FTE). All styling lives here; the calculation passes supply
//! plain structured rows.

use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};
use tracing::info;

use crate::config::ReportConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::AllocationReport;

/// Reusable cell formats for the report sheets.
struct ReportFormats {
    header_left: Format,
    header_center: Format,
    center: Format,
}

impl ReportFormats {
    fn new() -> Self {
        let header = Format::new().set_bold().set_italic();
        Self {
            header_left: header
                .clone()
                .set_align(FormatAlign::Left)
                .set_align(FormatAlign::VerticalCenter),
            header_center: header
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
            center: Format::new()
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter),
        }
    }
}

/// Writes the report workbook to `path`.
///
/// # Errors
///
/// Returns [`EngineError::WorkbookWrite`] if the workbook cannot be built
/// or saved.
pub fn write_report(
    path: &Path,
    report: &AllocationReport,
    config: &ReportConfig,
) -> EngineResult<()> {
    let mut workbook = build_workbook(report, config).map_err(|e| write_error(path, e))?;
    workbook.save(path).map_err(|e| write_error(path, e))?;

    info!(
        rows = report.rows.len(),
        fte_entries = report.fte_entries.len(),
        path = %path.display(),
        "Wrote report workbook"
    );
    Ok(())
}

fn write_error(path: &Path, e: XlsxError) -> EngineError {
    EngineError::WorkbookWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

fn build_workbook(report: &AllocationReport, config: &ReportConfig) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let formats = ReportFormats::new();

    add_allocation_sheet(&mut workbook, report, config, &formats)?;
    add_fte_sheet(&mut workbook, report, config, &formats)?;

    Ok(workbook)
}

fn add_allocation_sheet(
    workbook: &mut Workbook,
    report: &AllocationReport,
    config: &ReportConfig,
    formats: &ReportFormats,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.allocation_sheet)?;

    sheet.write_string_with_format(0, 0, "Consultant", &formats.header_left)?;
    sheet.write_string_with_format(0, 1, "Total Hours", &formats.header_center)?;
    sheet.write_string_with_format(0, 2, "Project", &formats.header_left)?;
    sheet.write_string_with_format(0, 3, "Hours", &formats.header_center)?;
    sheet.write_string_with_format(0, 4, "%", &formats.header_center)?;

    sheet.set_column_width(0, 18)?;
    sheet.set_column_width(1, 12)?;
    sheet.set_column_width(2, 37)?;
    sheet.set_column_width(3, 8)?;
    sheet.set_column_width(4, 6)?;

    for (i, row) in report.rows.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &row.consultant)?;
        sheet.write_number_with_format(r, 1, cell_number(row.total_hours), &formats.center)?;
        sheet.write_string(r, 2, &row.project)?;
        sheet.write_number_with_format(r, 3, cell_number(row.hours), &formats.center)?;
        sheet.write_number_with_format(r, 4, cell_number(row.percentage), &formats.center)?;
    }

    Ok(())
}

fn add_fte_sheet(
    workbook: &mut Workbook,
    report: &AllocationReport,
    config: &ReportConfig,
    formats: &ReportFormats,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(&config.fte_sheet)?;

    sheet.write_string_with_format(0, 0, "Project", &formats.header_left)?;
    sheet.write_string_with_format(0, 1, "FTE", &formats.header_center)?;

    sheet.set_column_width(0, 37)?;
    sheet.set_column_width(1, 8)?;

    for (i, entry) in report.fte_entries.iter().enumerate() {
        let r = (i + 1) as u32;
        sheet.write_string(r, 0, &entry.project)?;
        sheet.write_number_with_format(r, 1, cell_number(entry.fte), &formats.center)?;
    }

    Ok(())
}

/// Converts a decimal to the f64 a worksheet cell holds. Presentation
/// boundary only; all calculation stays in `Decimal`.
fn cell_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
