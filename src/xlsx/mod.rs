//! Spreadsheet collaborators for the Allocation Reporting Engine.
//!
//! The reader extracts normalized time records from a Teamwork workbook
//! export; the writer renders the finished report tables as a styled
//! two-sheet workbook. The calculation passes never touch files; these
//! modules are the only place workbook formats are known.

mod reader;
mod writer;

pub use reader::{ColumnMap, read_time_report};
pub use writer::write_report;
