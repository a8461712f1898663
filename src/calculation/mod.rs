//! Calculation logic for the Allocation Reporting Engine.
//!
//! This module contains the three passes that turn extracted time records
//! into report tables: hour accumulation, allocation percentage derivation,
//! and FTE computation, plus the [`generate_report`] entry point that runs
//! them in sequence.

mod accumulate;
mod allocation;
mod fte;

pub use accumulate::{accumulate_hours, pair_sum_for_consultant};
pub use allocation::{AllocationOutcome, calculate_allocation};
pub use fte::calculate_fte;

use tracing::info;

use crate::error::EngineResult;
use crate::models::{AllocationReport, TimeRecord};

/// Runs the full report pipeline over a record sequence.
///
/// Accumulates hours, derives allocation rows, and computes FTE entries,
/// returning both ordered tables. One atomic computation: any fatal
/// calculator error aborts the run and no tables are produced.
///
/// # Errors
///
/// Propagates [`calculate_allocation`]'s errors.
pub fn generate_report<I>(records: I) -> EngineResult<AllocationReport>
where
    I: IntoIterator<Item = TimeRecord>,
{
    let ledger = accumulate_hours(records);
    info!(
        consultants = ledger.by_consultant.len(),
        pairs = ledger.by_consultant_project.len(),
        "Accumulated hours"
    );

    let outcome = calculate_allocation(&ledger)?;
    let fte_entries = calculate_fte(&outcome.fte_by_project);
    info!(
        allocation_rows = outcome.rows.len(),
        fte_entries = fte_entries.len(),
        "Calculated allocation and FTE tables"
    );

    Ok(AllocationReport {
        rows: outcome.rows,
        fte_entries,
    })
}
