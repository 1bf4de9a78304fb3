//! File formats of a payroll data directory.
//!
//! These structures are deserialized from the YAML files read by
//! [`super::ConfigLoader`].

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{AttendanceDay, EmployeeRecord};

/// Contents of `settings.yaml`.
///
/// Values are kept as raw strings; they are only interpreted when a run
/// resolves its settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    /// Map of settings key to raw value.
    #[serde(default)]
    pub settings: HashMap<String, String>,
}

/// Contents of `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesFile {
    /// The employee roster.
    pub employees: Vec<EmployeeRecord>,
}

/// A single attendance row in `attendance.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceEntry {
    /// The employee the row belongs to.
    pub employee_id: i64,
    /// The date worked.
    pub work_date: NaiveDate,
    /// Check-in timestamp.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out timestamp.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Overtime hours recorded for the day.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl From<AttendanceEntry> for AttendanceDay {
    fn from(entry: AttendanceEntry) -> Self {
        AttendanceDay {
            work_date: entry.work_date,
            check_in: entry.check_in,
            check_out: entry.check_out,
            overtime_hours: entry.overtime_hours,
        }
    }
}

/// Contents of `attendance.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceFile {
    /// Attendance rows for all employees.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}
