//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_month;
mod payroll;

pub use attendance::{
    AttendanceDay, AttendanceStatus, CheckinStatus, CheckoutStatus, MonthlyAttendanceSummary,
};
pub use employee::{EmployeeRecord, EmployeeSalaryInfo, EmployeeStatus};
pub use pay_month::PayMonth;
pub use payroll::{PayrollRecord, PayrollRun, PayrollSummary};
