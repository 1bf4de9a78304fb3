//! Attendance models.
//!
//! [`AttendanceDay`] is the raw ledger row; [`AttendanceStatus`] and
//! [`MonthlyAttendanceSummary`] are derived from it and never persisted.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One employee's timesheet entry for a single calendar day.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceDay;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let work_date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let day = AttendanceDay {
///     work_date,
///     check_in: work_date.and_hms_opt(7, 0, 0),
///     check_out: work_date.and_hms_opt(17, 30, 0),
///     overtime_hours: Decimal::ZERO,
/// };
/// assert!(day.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceDay {
    /// The date worked.
    pub work_date: NaiveDate,
    /// Check-in timestamp, if the employee checked in.
    #[serde(default)]
    pub check_in: Option<NaiveDateTime>,
    /// Check-out timestamp, if the employee checked out.
    #[serde(default)]
    pub check_out: Option<NaiveDateTime>,
    /// Overtime hours recorded against this day.
    #[serde(default)]
    pub overtime_hours: Decimal,
}

impl AttendanceDay {
    /// Returns true if both check-in and check-out were recorded.
    pub fn is_complete(&self) -> bool {
        self.check_in.is_some() && self.check_out.is_some()
    }
}

/// Check-in classification for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckinStatus {
    /// No check-in was recorded.
    Absent,
    /// Checked in after the cutoff.
    Late,
    /// Checked in at or before the cutoff.
    OnTime,
}

/// Check-out classification for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStatus {
    /// No check-out was recorded.
    Incomplete,
    /// Checked out before the end of the working day.
    EarlyLeave,
    /// Checked out at or after the end of the working day.
    OnTime,
}

/// Derived status of a single attendance day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendanceStatus {
    /// Check-in classification.
    pub checkin_status: CheckinStatus,
    /// Check-out classification.
    pub checkout_status: CheckoutStatus,
}

/// One employee's attendance totals for a month.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAttendanceSummary {
    /// Days with both check-in and check-out recorded.
    pub work_days: u32,
    /// Days with a late check-in.
    pub late_days: u32,
    /// Days with an early check-out.
    pub early_leave_days: u32,
    /// Configured working days not covered by `work_days`.
    pub absent_days: u32,
    /// Overtime hours recorded across the month.
    pub total_overtime_hours: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_day_without_timestamps() {
        let json = r#"{ "work_date": "2024-03-04" }"#;
        let day: AttendanceDay = serde_json::from_str(json).unwrap();

        assert!(day.check_in.is_none());
        assert!(day.check_out.is_none());
        assert_eq!(day.overtime_hours, Decimal::ZERO);
        assert!(!day.is_complete());
    }

    #[test]
    fn test_deserialize_day_with_timestamps() {
        let json = r#"{
            "work_date": "2024-03-04",
            "check_in": "2024-03-04T07:02:00",
            "check_out": "2024-03-04T17:15:00",
            "overtime_hours": "1.5"
        }"#;
        let day: AttendanceDay = serde_json::from_str(json).unwrap();

        assert!(day.is_complete());
        assert_eq!(day.overtime_hours, Decimal::new(15, 1));
    }

    #[test]
    fn test_status_serialization() {
        let status = AttendanceStatus {
            checkin_status: CheckinStatus::OnTime,
            checkout_status: CheckoutStatus::EarlyLeave,
        };
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["checkin_status"], "on_time");
        assert_eq!(json["checkout_status"], "early_leave");
    }

    #[test]
    fn test_default_summary_is_all_zero() {
        let summary = MonthlyAttendanceSummary::default();
        assert_eq!(summary.work_days, 0);
        assert_eq!(summary.absent_days, 0);
        assert_eq!(summary.total_overtime_hours, Decimal::ZERO);
    }
}
