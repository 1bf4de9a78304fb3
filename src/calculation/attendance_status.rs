//! Attendance classification.
//!
//! This module derives the check-in and check-out status of a single
//! attendance day from its timestamps. Cutoffs are fixed times of day on
//! the work date.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::models::{AttendanceDay, AttendanceStatus, CheckinStatus, CheckoutStatus};

/// Latest on-time check-in, in seconds after midnight of the work date (07:05).
pub const LATE_CHECKIN_CUTOFF_SECS: i64 = 7 * 3600 + 5 * 60;

/// Earliest on-time check-out, in seconds after midnight of the work date (17:00).
pub const EARLY_LEAVE_CUTOFF_SECS: i64 = 17 * 3600;

/// Classifies one attendance day.
///
/// Check-in and check-out are evaluated independently: a missing check-in
/// does not affect how the check-out is classified.
///
/// - check-in missing: `absent`; later than 07:05 on the work date: `late`
/// - check-out missing: `incomplete`; earlier than 17:00 on the work date: `early_leave`
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::classify_attendance;
/// use payroll_engine::models::{AttendanceDay, CheckinStatus, CheckoutStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let work_date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let day = AttendanceDay {
///     work_date,
///     check_in: work_date.and_hms_opt(7, 5, 0),
///     check_out: work_date.and_hms_opt(16, 59, 0),
///     overtime_hours: Decimal::ZERO,
/// };
///
/// let status = classify_attendance(&day);
/// assert_eq!(status.checkin_status, CheckinStatus::OnTime);
/// assert_eq!(status.checkout_status, CheckoutStatus::EarlyLeave);
/// ```
pub fn classify_attendance(day: &AttendanceDay) -> AttendanceStatus {
    let checkin_status = match day.check_in {
        None => CheckinStatus::Absent,
        Some(check_in) if is_after(check_in, day.work_date, LATE_CHECKIN_CUTOFF_SECS) => {
            CheckinStatus::Late
        }
        Some(_) => CheckinStatus::OnTime,
    };

    let checkout_status = match day.check_out {
        None => CheckoutStatus::Incomplete,
        Some(check_out) if is_before(check_out, day.work_date, EARLY_LEAVE_CUTOFF_SECS) => {
            CheckoutStatus::EarlyLeave
        }
        Some(_) => CheckoutStatus::OnTime,
    };

    AttendanceStatus {
        checkin_status,
        checkout_status,
    }
}

/// Position of `timestamp` relative to midnight of `work_date`, as
/// whole seconds plus the sub-second remainder.
fn offset_from_work_date(timestamp: NaiveDateTime, work_date: NaiveDate) -> (i64, u32) {
    let days = timestamp
        .date()
        .signed_duration_since(work_date)
        .num_days();
    let seconds = days * 86_400 + i64::from(timestamp.time().num_seconds_from_midnight());
    (seconds, timestamp.time().nanosecond())
}

fn is_after(timestamp: NaiveDateTime, work_date: NaiveDate, cutoff_secs: i64) -> bool {
    offset_from_work_date(timestamp, work_date) > (cutoff_secs, 0)
}

fn is_before(timestamp: NaiveDateTime, work_date: NaiveDate, cutoff_secs: i64) -> bool {
    offset_from_work_date(timestamp, work_date) < (cutoff_secs, 0)
}
