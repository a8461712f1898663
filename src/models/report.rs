//! Report row models.
//!
//! This module contains the derived, read-only result rows produced by the
//! report calculator: [`AllocationRow`], [`FteEntry`], and the
//! [`AllocationReport`] pairing the two ordered tables.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of the allocation report.
///
/// Describes the share of a consultant's total logged hours that went to a
/// single project. Rows exist only for pairs with a positive percentage.
///
/// # Example
///
/// ```
/// use allocation_engine::models::AllocationRow;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let row = AllocationRow {
///     consultant: "Alice".to_string(),
///     total_hours: Decimal::from_str("20.0").unwrap(),
///     project: "ProjX".to_string(),
///     hours: Decimal::from_str("10.0").unwrap(),
///     percentage: Decimal::from_str("50").unwrap(),
/// };
/// assert_eq!(row.percentage, Decimal::from_str("50").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    /// The consultant the row belongs to.
    pub consultant: String,
    /// The consultant's total logged hours across all projects.
    pub total_hours: Decimal,
    /// The project the hours were logged against.
    pub project: String,
    /// The hours the consultant logged on this project.
    pub hours: Decimal,
    /// The share of the consultant's total hours spent on this project,
    /// expressed 0-100 (`hours * 100 / total_hours`).
    pub percentage: Decimal,
}

/// One row of the FTE report.
///
/// The full-time-equivalent headcount a project consumes, derived by summing
/// allocation percentages across consultants and dividing by 100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FteEntry {
    /// The project name.
    pub project: String,
    /// The FTE figure, rounded to 2 decimal places unless rounding would
    /// collapse a non-zero value to exactly zero, in which case the
    /// unrounded value is retained.
    pub fte: Decimal,
}

/// The two ordered result tables of one report run.
///
/// `rows` is sorted by (consultant, project); `fte_entries` is sorted by
/// project. Both orderings are lexicographic, keeping output deterministic
/// and reviewable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationReport {
    /// The allocation rows, sorted by (consultant, project).
    pub rows: Vec<AllocationRow>,
    /// The FTE entries, sorted by project.
    pub fte_entries: Vec<FteEntry>,
}
