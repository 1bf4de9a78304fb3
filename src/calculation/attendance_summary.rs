//! Monthly attendance aggregation.
//!
//! This module reduces one employee's attendance days for a month into the
//! counts the salary calculation needs.

use rust_decimal::Decimal;

use crate::config::PayrollSettings;
use crate::models::{
    AttendanceDay, CheckinStatus, CheckoutStatus, MonthlyAttendanceSummary, PayMonth,
};

use super::classify_attendance;

/// Aggregates an employee's attendance days for one month.
///
/// Days dated outside `pay_month` are ignored. Of the remaining days:
///
/// - `work_days` counts days with both check-in and check-out recorded
/// - `late_days` / `early_leave_days` count days classified late / early leave
/// - `total_overtime_hours` sums overtime over every day, complete or not
/// - `absent_days` is the configured working days minus `work_days`, floored at zero
///
/// An employee with no days in the month gets an all-zero summary apart
/// from `absent_days`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::aggregate_attendance;
/// use payroll_engine::config::PayrollSettings;
/// use payroll_engine::models::{AttendanceDay, PayMonth};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let work_date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let days = vec![AttendanceDay {
///     work_date,
///     check_in: work_date.and_hms_opt(7, 30, 0),
///     check_out: work_date.and_hms_opt(17, 0, 0),
///     overtime_hours: Decimal::new(2, 0),
/// }];
///
/// let summary = aggregate_attendance(
///     &days,
///     PayMonth::new(3, 2024).unwrap(),
///     &PayrollSettings::default(),
/// );
/// assert_eq!(summary.work_days, 1);
/// assert_eq!(summary.late_days, 1);
/// assert_eq!(summary.absent_days, 21);
/// assert_eq!(summary.total_overtime_hours, Decimal::new(2, 0));
/// ```
pub fn aggregate_attendance(
    days: &[AttendanceDay],
    pay_month: PayMonth,
    settings: &PayrollSettings,
) -> MonthlyAttendanceSummary {
    let mut work_days = 0u32;
    let mut late_days = 0u32;
    let mut early_leave_days = 0u32;
    let mut total_overtime_hours = Decimal::ZERO;

    for day in days.iter().filter(|day| pay_month.contains(day.work_date)) {
        let status = classify_attendance(day);

        if day.is_complete() {
            work_days += 1;
        }
        if status.checkin_status == CheckinStatus::Late {
            late_days += 1;
        }
        if status.checkout_status == CheckoutStatus::EarlyLeave {
            early_leave_days += 1;
        }
        total_overtime_hours += day.overtime_hours;
    }

    MonthlyAttendanceSummary {
        work_days,
        late_days,
        early_leave_days,
        absent_days: settings.working_days_per_month.saturating_sub(work_days),
        total_overtime_hours,
    }
}
