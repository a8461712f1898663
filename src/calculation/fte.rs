//! FTE pass.
//!
//! This module converts the per-project percentage sums from the allocation
//! pass into full-time-equivalent entries.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::FteEntry;

/// Computes the ordered FTE table from per-project percentage sums.
///
/// Projects are visited in sorted order. Each project's FTE is its
/// percentage sum divided by 100, rounded to 2 decimal places with
/// round-half-to-even. When rounding would collapse a non-zero value to
/// exactly zero, the unrounded value is kept instead, so a small-but-real
/// allocation never reports as 0.00 FTE.
///
/// # Example
///
/// ```
/// use allocation_engine::calculation::calculate_fte;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let mut sums = HashMap::new();
/// sums.insert("ProjX".to_string(), Decimal::new(150, 0));
/// let entries = calculate_fte(&sums);
/// assert_eq!(entries[0].fte, Decimal::new(150, 2)); // 1.50
/// ```
pub fn calculate_fte(fte_by_project: &HashMap<String, Decimal>) -> Vec<FteEntry> {
    let mut projects: Vec<&String> = fte_by_project.keys().collect();
    projects.sort();

    projects
        .into_iter()
        .map(|project| {
            let raw = fte_by_project[project] / Decimal::ONE_HUNDRED;
            let rounded = raw.round_dp(2);
            let fte = if rounded.is_zero() && !raw.is_zero() {
                raw
            } else {
                rounded
            };
            FteEntry {
                project: project.clone(),
                fte,
            }
        })
        .collect()
}
