//! Report configuration.
//!
//! This module provides [`ReportConfig`], the configuration step that names
//! the input worksheet, the column headers used to locate fields, and the
//! output sheet titles. Defaults match the standard Teamwork export; a YAML
//! file can override any subset of fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Configuration for locating input fields and naming output sheets.
///
/// # Example
///
/// ```
/// use allocation_engine::config::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.input_sheet, "Overview");
/// assert_eq!(config.hours_header, "Decimal Hours");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Name of the worksheet holding the time entries.
    pub input_sheet: String,
    /// Header text of the project column.
    pub project_header: String,
    /// Header text of the consultant column.
    pub consultant_header: String,
    /// Header text of the logged-hours column.
    pub hours_header: String,
    /// Title of the output allocation sheet.
    pub allocation_sheet: String,
    /// Title of the output FTE sheet.
    pub fte_sheet: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_sheet: "Overview".to_string(),
            project_header: "Project".to_string(),
            consultant_header: "Who".to_string(),
            hours_header: "Decimal Hours".to_string(),
            allocation_sheet: "Allocation %".to_string(),
            fte_sheet: "Project FTE".to_string(),
        }
    }
}

impl ReportConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Every field is optional in the file; omitted fields keep their
    /// default values.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] if the file cannot be read,
    /// or [`EngineError::ConfigParseError`] if it is not valid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
