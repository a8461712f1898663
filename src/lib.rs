//! Allocation Reporting Engine for Teamwork time exports.
//!
//! This crate ingests a time-tracking export (project, consultant, hours-logged
//! records) and derives two reports: per-consultant, per-project hour
//! allocation with percentage-of-total, and per-project full-time-equivalent
//! (FTE) headcount.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod xlsx;
