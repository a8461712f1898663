//! Error types for the Allocation Reporting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during report generation.

use thiserror::Error;

/// The main error type for the Allocation Reporting Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use allocation_engine::error::EngineError;
///
/// let error = EngineError::InputNotFound {
///     path: "/missing/All Time Report.xls".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Input workbook not found: /missing/All Time Report.xls"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A (consultant, project) pair exists without a matching consultant total.
    ///
    /// This indicates a bug in the aggregation pass or malformed upstream
    /// data; report generation must abort rather than emit a partial report.
    #[error("Inconsistent data: consultant '{consultant}' has hours logged on '{project}' but no total")]
    InconsistentData {
        /// The consultant missing from the totals mapping.
        consultant: String,
        /// The project the orphaned hours were logged against.
        project: String,
    },

    /// A consultant's total hours is zero while per-project entries exist.
    ///
    /// The allocation percentage would divide by zero; fatal for the same
    /// reason as [`EngineError::InconsistentData`].
    #[error("Division by zero: consultant '{consultant}' has zero total hours but logged project entries")]
    DivisionByZero {
        /// The consultant with a zero hours total.
        consultant: String,
    },

    /// The input workbook was not found at the specified path.
    #[error("Input workbook not found: {path}")]
    InputNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The input workbook could not be opened or read.
    #[error("Failed to read workbook '{path}': {message}")]
    WorkbookRead {
        /// The path to the workbook that failed to read.
        path: String,
        /// A description of the read error.
        message: String,
    },

    /// The named worksheet was not found in the input workbook.
    #[error("Worksheet not found: {sheet}")]
    SheetNotFound {
        /// The worksheet name that was not found.
        sheet: String,
    },

    /// A required column header was not found in the header row.
    #[error("Column header not found: {header}")]
    ColumnNotFound {
        /// The header text that was not found.
        header: String,
    },

    /// The output workbook could not be written.
    #[error("Failed to write workbook '{path}': {message}")]
    WorkbookWrite {
        /// The path to the workbook that failed to write.
        path: String,
        /// A description of the write error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inconsistent_data_displays_consultant_and_project() {
        let error = EngineError::InconsistentData {
            consultant: "Carol".to_string(),
            project: "ProjZ".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Inconsistent data: consultant 'Carol' has hours logged on 'ProjZ' but no total"
        );
    }

    #[test]
    fn test_division_by_zero_displays_consultant() {
        let error = EngineError::DivisionByZero {
            consultant: "Dan".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Division by zero: consultant 'Dan' has zero total hours but logged project entries"
        );
    }

    #[test]
    fn test_input_not_found_displays_path() {
        let error = EngineError::InputNotFound {
            path: "All Time Report.xls".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Input workbook not found: All Time Report.xls"
        );
    }

    #[test]
    fn test_sheet_not_found_displays_sheet() {
        let error = EngineError::SheetNotFound {
            sheet: "Overview".to_string(),
        };
        assert_eq!(error.to_string(), "Worksheet not found: Overview");
    }

    #[test]
    fn test_column_not_found_displays_header() {
        let error = EngineError::ColumnNotFound {
            header: "Decimal Hours".to_string(),
        };
        assert_eq!(error.to_string(), "Column header not found: Decimal Hours");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_sheet_not_found() -> EngineResult<()> {
            Err(EngineError::SheetNotFound {
                sheet: "Overview".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_sheet_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
