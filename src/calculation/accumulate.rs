//! Hour accumulation pass.
//!
//! This module folds a sequence of time records into the two accumulator
//! mappings of an [`HoursLedger`].

use std::collections::hash_map::Entry;

use rust_decimal::Decimal;

use crate::models::{HoursLedger, TimeRecord};

/// Accumulates a record sequence into per-consultant and per-pair totals.
///
/// Every record adds its hours to the consultant's total (initialized to the
/// record's hours on first occurrence). The (consultant, project) pair total
/// accumulates only when both names are non-empty and the pair has been seen
/// before; otherwise the pair is (re)initialized to the record's hours. A
/// pair with a blank consultant or blank project therefore never grows past
/// the hours of the last record that touched it. This asymmetry is kept
/// deliberately so reports stay byte-compatible with prior runs over exports
/// containing blank cells.
///
/// Pure function of its input; the whole sequence is consumed before the
/// ledger is returned. No validation is performed: zero and negative hours
/// (corrective entries) are summed as-is.
///
/// # Example
///
/// ```
/// use allocation_engine::calculation::accumulate_hours;
/// use allocation_engine::models::TimeRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![
///     TimeRecord::new("ProjX", "Alice", Decimal::new(100, 1)),
///     TimeRecord::new("ProjY", "Alice", Decimal::new(100, 1)),
/// ];
/// let ledger = accumulate_hours(records);
/// assert_eq!(ledger.consultant_total("Alice"), Some(Decimal::new(200, 1)));
/// ```
pub fn accumulate_hours<I>(records: I) -> HoursLedger
where
    I: IntoIterator<Item = TimeRecord>,
{
    let mut ledger = HoursLedger::new();

    for record in records {
        let TimeRecord {
            project,
            consultant,
            hours,
        } = record;

        ledger
            .by_consultant
            .entry(consultant.clone())
            .and_modify(|total| *total += hours)
            .or_insert(hours);

        let has_names = !consultant.is_empty() && !project.is_empty();
        match ledger.by_consultant_project.entry((consultant, project)) {
            Entry::Occupied(mut entry) if has_names => *entry.get_mut() += hours,
            // Blank-named pairs reset instead of accumulating.
            Entry::Occupied(mut entry) => {
                entry.insert(hours);
            }
            Entry::Vacant(entry) => {
                entry.insert(hours);
            }
        }
    }

    ledger
}

/// Convenience wrapper summing a consultant's pair totals.
///
/// Used by tests and diagnostics to check the ledger invariant; not part of
/// the report pipeline itself.
pub fn pair_sum_for_consultant(ledger: &HoursLedger, consultant: &str) -> Decimal {
    ledger
        .by_consultant_project
        .iter()
        .filter(|((cons, _), _)| cons == consultant)
        .map(|(_, hours)| *hours)
        .sum()
}
