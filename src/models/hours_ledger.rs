//! Hours ledger model.
//!
//! This module defines the [`HoursLedger`], the pair of accumulator mappings
//! produced by the aggregation pass and consumed by the report calculator.

use std::collections::HashMap;

use rust_decimal::Decimal;

/// The two hour-accumulator mappings derived from a record sequence.
///
/// `by_consultant` maps each consultant name to their cumulative logged
/// hours; `by_consultant_project` maps each (consultant, project) pair to
/// the hours logged on that combination. Both maps are unordered; the
/// report calculator sorts keys when producing output tables.
///
/// For pairs accumulated with non-empty consultant and project names, the
/// per-project sums for a consultant equal that consultant's total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoursLedger {
    /// Total hours per consultant.
    pub by_consultant: HashMap<String, Decimal>,
    /// Total hours per (consultant, project) pair.
    pub by_consultant_project: HashMap<(String, String), Decimal>,
}

impl HoursLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total hours logged by a consultant, if any.
    pub fn consultant_total(&self, consultant: &str) -> Option<Decimal> {
        self.by_consultant.get(consultant).copied()
    }

    /// Returns the hours a consultant logged on a project, if any.
    pub fn pair_total(&self, consultant: &str, project: &str) -> Option<Decimal> {
        self.by_consultant_project
            .get(&(consultant.to_string(), project.to_string()))
            .copied()
    }

    /// Returns true if no records have been folded in.
    pub fn is_empty(&self) -> bool {
        self.by_consultant.is_empty() && self.by_consultant_project.is_empty()
    }
}
