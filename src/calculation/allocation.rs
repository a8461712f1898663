//! Allocation pass.
//!
//! This module walks the hours ledger in sorted key order, derives the
//! per-row allocation percentages, and accumulates the per-project
//! percentage sums consumed by the FTE pass.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AllocationRow, HoursLedger};

/// The result of the allocation pass: the ordered report rows and the
/// per-project percentage accumulator handed to the FTE pass.
#[derive(Debug, Clone, Default)]
pub struct AllocationOutcome {
    /// Allocation rows, sorted by (consultant, project).
    pub rows: Vec<AllocationRow>,
    /// Sum of allocation percentages per project, across all consultants.
    pub fte_by_project: HashMap<String, Decimal>,
}

/// Computes allocation rows and per-project percentage sums from a ledger.
///
/// (Consultant, project) pairs are visited in sorted key order so output is
/// deterministic. For each pair, the consultant's total hours is looked up
/// and the pair's share of it is computed as `hours * 100 / total`. A row is
/// emitted only when that percentage is positive; zero or negative shares
/// (possible with corrective entries) are suppressed without error. Emitted
/// percentages are also folded into the per-project FTE accumulator.
///
/// # Errors
///
/// Both error conditions indicate the ledger's own invariant is broken, so
/// the pass aborts rather than emit a partial report:
///
/// - [`EngineError::InconsistentData`] if a pair's consultant has no entry
///   in the per-consultant totals.
/// - [`EngineError::DivisionByZero`] if a pair's consultant has a total of
///   exactly zero hours.
///
/// # Example
///
/// ```
/// use allocation_engine::calculation::{accumulate_hours, calculate_allocation};
/// use allocation_engine::models::TimeRecord;
/// use rust_decimal::Decimal;
///
/// let ledger = accumulate_hours(vec![
///     TimeRecord::new("ProjX", "Alice", Decimal::new(100, 1)),
///     TimeRecord::new("ProjY", "Alice", Decimal::new(100, 1)),
/// ]);
/// let outcome = calculate_allocation(&ledger).unwrap();
/// assert_eq!(outcome.rows.len(), 2);
/// assert_eq!(outcome.rows[0].percentage, Decimal::new(50, 0));
/// ```
pub fn calculate_allocation(ledger: &HoursLedger) -> EngineResult<AllocationOutcome> {
    let mut pairs: Vec<(&(String, String), &Decimal)> =
        ledger.by_consultant_project.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let mut outcome = AllocationOutcome::default();

    for ((consultant, project), hours) in pairs {
        let total_hours = ledger.consultant_total(consultant).ok_or_else(|| {
            EngineError::InconsistentData {
                consultant: consultant.clone(),
                project: project.clone(),
            }
        })?;

        if total_hours.is_zero() {
            return Err(EngineError::DivisionByZero {
                consultant: consultant.clone(),
            });
        }

        let percentage = *hours * Decimal::ONE_HUNDRED / total_hours;

        if percentage > Decimal::ZERO {
            *outcome
                .fte_by_project
                .entry(project.clone())
                .or_insert(Decimal::ZERO) += percentage;

            outcome.rows.push(AllocationRow {
                consultant: consultant.clone(),
                total_hours,
                project: project.clone(),
                hours: *hours,
                percentage,
            });
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::calculation::accumulate_hours;
    use crate::models::TimeRecord;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn ledger_from(records: Vec<(&str, &str, &str)>) -> HoursLedger {
        accumulate_hours(
            records
                .into_iter()
                .map(|(proj, cons, hours)| TimeRecord::new(proj, cons, dec(hours))),
        )
    }

    #[test]
    fn test_basic_allocation() {
        let ledger = ledger_from(vec![
            ("ProjX", "Alice", "10.0"),
            ("ProjX", "Bob", "30.0"),
            ("ProjY", "Alice", "10.0"),
        ]);

        let outcome = calculate_allocation(&ledger).unwrap();

        assert_eq!(outcome.rows.len(), 3);

        let alice_x = &outcome.rows[0];
        assert_eq!(alice_x.consultant, "Alice");
        assert_eq!(alice_x.project, "ProjX");
        assert_eq!(alice_x.total_hours, dec("20.0"));
        assert_eq!(alice_x.hours, dec("10.0"));
        assert_eq!(alice_x.percentage, dec("50"));

        let alice_y = &outcome.rows[1];
        assert_eq!(alice_y.project, "ProjY");
        assert_eq!(alice_y.percentage, dec("50"));

        let bob_x = &outcome.rows[2];
        assert_eq!(bob_x.consultant, "Bob");
        assert_eq!(bob_x.percentage, dec("100"));
    }

    #[test]
    fn test_fte_accumulator_sums_across_consultants() {
        let ledger = ledger_from(vec![
            ("ProjX", "Alice", "10.0"),
            ("ProjX", "Bob", "30.0"),
            ("ProjY", "Alice", "10.0"),
        ]);

        let outcome = calculate_allocation(&ledger).unwrap();

        assert_eq!(outcome.fte_by_project["ProjX"], dec("150"));
        assert_eq!(outcome.fte_by_project["ProjY"], dec("50"));
    }

    #[test]
    fn test_rows_sorted_by_consultant_then_project() {
        let ledger = ledger_from(vec![
            ("Zeta", "Bob", "1.0"),
            ("Alpha", "Bob", "1.0"),
            ("Midway", "Alice", "1.0"),
        ]);

        let outcome = calculate_allocation(&ledger).unwrap();
        let keys: Vec<(String, String)> = outcome
            .rows
            .iter()
            .map(|r| (r.consultant.clone(), r.project.clone()))
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0].0, "Alice");
    }

    #[test]
    fn test_missing_consultant_total_is_fatal() {
        let mut ledger = HoursLedger::new();
        ledger
            .by_consultant_project
            .insert(("Carol".to_string(), "ProjZ".to_string()), dec("5.0"));

        let err = calculate_allocation(&ledger).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InconsistentData { ref consultant, ref project }
                if consultant == "Carol" && project == "ProjZ"
        ));
    }

    #[test]
    fn test_zero_total_hours_is_fatal() {
        let mut ledger = HoursLedger::new();
        ledger.by_consultant.insert("Dan".to_string(), dec("0.0"));
        ledger
            .by_consultant_project
            .insert(("Dan".to_string(), "ProjA".to_string()), dec("0.0"));

        let err = calculate_allocation(&ledger).unwrap_err();
        assert!(matches!(
            err,
            EngineError::DivisionByZero { ref consultant } if consultant == "Dan"
        ));
    }

    #[test]
    fn test_zero_share_row_suppressed() {
        let ledger = ledger_from(vec![
            ("ProjX", "Alice", "10.0"),
            ("ProjY", "Alice", "0.0"),
        ]);

        let outcome = calculate_allocation(&ledger).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].project, "ProjX");
        assert!(!outcome.fte_by_project.contains_key("ProjY"));
    }

    #[test]
    fn test_negative_share_suppressed_without_error() {
        let ledger = ledger_from(vec![
            ("ProjX", "Alice", "10.0"),
            ("ProjY", "Alice", "-2.0"),
        ]);

        let outcome = calculate_allocation(&ledger).unwrap();
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].project, "ProjX");
        // The positive row's percentage reflects the reduced total.
        assert_eq!(outcome.rows[0].percentage, dec("125"));
    }

    #[test]
    fn test_empty_ledger_yields_empty_outcome() {
        let outcome = calculate_allocation(&HoursLedger::new()).unwrap();
        assert!(outcome.rows.is_empty());
        assert!(outcome.fte_by_project.is_empty());
    }
}
