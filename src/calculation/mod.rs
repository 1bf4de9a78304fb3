//! Calculation logic for the payroll engine.
//!
//! This module contains the pure calculation steps of a payroll run:
//! classifying a day's check-in and check-out, aggregating a month of
//! attendance, applying the salary formula, and summing the month's
//! records.

mod attendance_status;
mod attendance_summary;
mod payroll_summary;
mod salary;

pub use attendance_status::{
    EARLY_LEAVE_CUTOFF_SECS, LATE_CHECKIN_CUTOFF_SECS, classify_attendance,
};
pub use attendance_summary::aggregate_attendance;
pub use payroll_summary::summarize_payroll;
pub use salary::{STANDARD_HOURS_PER_DAY, calculate_payroll, round_currency};
