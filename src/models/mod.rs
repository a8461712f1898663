//! Core data models for the Allocation Reporting Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod hours_ledger;
mod report;
mod time_record;

pub use hours_ledger::HoursLedger;
pub use report::{AllocationReport, AllocationRow, FteEntry};
pub use time_record::TimeRecord;
