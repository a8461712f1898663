//! Time record model.
//!
//! This module defines the TimeRecord struct representing one normalized row
//! of a time-tracking export.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One logged entry of hours worked by a consultant on a project.
///
/// Records are immutable once extracted from the input workbook and are
/// consumed exactly once by the aggregation pass. Hours are non-negative in
/// normal data, but corrective entries may carry zero or negative values;
/// the engine sums them as-is.
///
/// # Example
///
/// ```
/// use allocation_engine::models::TimeRecord;
/// use rust_decimal::Decimal;
///
/// let record = TimeRecord::new("ProjX", "Alice", Decimal::new(75, 1));
/// assert_eq!(record.hours, Decimal::new(75, 1)); // 7.5 hours
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// The project the hours were logged against. May be empty when the
    /// export row carried no project cell.
    pub project: String,
    /// The consultant who logged the hours. May be empty when the export
    /// row carried no consultant cell.
    pub consultant: String,
    /// The number of hours logged, as a decimal.
    pub hours: Decimal,
}

impl TimeRecord {
    /// Creates a new time record.
    pub fn new(project: impl Into<String>, consultant: impl Into<String>, hours: Decimal) -> Self {
        Self {
            project: project.into(),
            consultant: consultant.into(),
            hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_builds_record() {
        let record = TimeRecord::new("ProjX", "Alice", Decimal::from_str("10.0").unwrap());
        assert_eq!(record.project, "ProjX");
        assert_eq!(record.consultant, "Alice");
        assert_eq!(record.hours, Decimal::from_str("10.0").unwrap());
    }

    #[test]
    fn test_record_serialization() {
        let record = TimeRecord::new("ProjX", "Alice", Decimal::new(75, 1));
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: TimeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_record_deserialization() {
        let json = r#"{
            "project": "ProjX",
            "consultant": "Alice",
            "hours": "7.5"
        }"#;

        let record: TimeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.consultant, "Alice");
        assert_eq!(record.hours, Decimal::new(75, 1));
    }
}
