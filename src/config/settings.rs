//! Payroll settings resolution.
//!
//! This module turns the raw key/value pairs of the settings store into a
//! typed [`PayrollSettings`], substituting a fixed default for every key that
//! is absent, unparsable, or out of range.

use std::collections::HashMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Settings key for the number of paid working days per month.
pub const WORKING_DAYS_PER_MONTH_KEY: &str = "working_days_per_month";
/// Settings key for the overtime multiplier.
pub const OVERTIME_RATE_KEY: &str = "overtime_rate";
/// Settings key for the tax rate, in percent.
pub const TAX_RATE_KEY: &str = "tax_rate";
/// Settings key for the insurance rate, in percent.
pub const INSURANCE_RATE_KEY: &str = "insurance_rate";
/// Settings key for the penalty per late day.
pub const LATE_PENALTY_KEY: &str = "late_penalty_per_day";
/// Settings key for the penalty per early-leave day.
pub const EARLY_LEAVE_PENALTY_KEY: &str = "early_leave_penalty_per_day";

/// Largest rate or penalty accepted from the settings store.
pub const MAX_SETTING_VALUE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Every key read by [`resolve_settings`].
pub const PAYROLL_SETTING_KEYS: [&str; 6] = [
    WORKING_DAYS_PER_MONTH_KEY,
    OVERTIME_RATE_KEY,
    TAX_RATE_KEY,
    INSURANCE_RATE_KEY,
    LATE_PENALTY_KEY,
    EARLY_LEAVE_PENALTY_KEY,
];

/// Configurable rates for one payroll run.
///
/// Assembled once per run and passed by value to every calculation step.
///
/// # Example
///
/// ```
/// use payroll_engine::config::PayrollSettings;
/// use rust_decimal::Decimal;
///
/// let settings = PayrollSettings::default();
/// assert_eq!(settings.working_days_per_month, 22);
/// assert_eq!(settings.overtime_rate, Decimal::new(15, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Paid working days per month; always greater than zero.
    pub working_days_per_month: u32,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_rate: Decimal,
    /// Tax withheld from gross salary, in percent.
    pub tax_rate_percent: Decimal,
    /// Insurance withheld from gross salary, in percent.
    pub insurance_rate_percent: Decimal,
    /// Penalty per late check-in day.
    pub late_penalty_per_day: Decimal,
    /// Penalty per early check-out day.
    pub early_leave_penalty_per_day: Decimal,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            working_days_per_month: 22,
            overtime_rate: Decimal::new(15, 1),
            tax_rate_percent: Decimal::new(10, 0),
            insurance_rate_percent: Decimal::new(8, 0),
            late_penalty_per_day: Decimal::new(50_000, 0),
            early_leave_penalty_per_day: Decimal::new(50_000, 0),
        }
    }
}

/// Resolves payroll settings from raw settings-store values.
///
/// Never fails. Values that are missing or do not parse fall back to the
/// [`PayrollSettings::default`] value for that key. So do values outside
/// the settings constraints: non-positive working days, and rates or
/// penalties below zero or above [`MAX_SETTING_VALUE`]. Fallbacks are
/// logged at debug level and not reported to the caller.
///
/// # Example
///
/// ```
/// use payroll_engine::config::resolve_settings;
/// use rust_decimal::Decimal;
/// use std::collections::HashMap;
///
/// let raw = HashMap::from([
///     ("tax_rate".to_string(), "5".to_string()),
///     ("overtime_rate".to_string(), "abc".to_string()),
/// ]);
/// let settings = resolve_settings(&raw);
/// assert_eq!(settings.tax_rate_percent, Decimal::new(5, 0));
/// assert_eq!(settings.overtime_rate, Decimal::new(15, 1));
/// ```
pub fn resolve_settings(raw: &HashMap<String, String>) -> PayrollSettings {
    let defaults = PayrollSettings::default();

    let working_days_per_month = raw
        .get(WORKING_DAYS_PER_MONTH_KEY)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|days| *days > 0)
        .unwrap_or_else(|| {
            log_fallback(raw, WORKING_DAYS_PER_MONTH_KEY);
            defaults.working_days_per_month
        });

    PayrollSettings {
        working_days_per_month,
        overtime_rate: resolve_decimal(raw, OVERTIME_RATE_KEY, defaults.overtime_rate),
        tax_rate_percent: resolve_decimal(raw, TAX_RATE_KEY, defaults.tax_rate_percent),
        insurance_rate_percent: resolve_decimal(
            raw,
            INSURANCE_RATE_KEY,
            defaults.insurance_rate_percent,
        ),
        late_penalty_per_day: resolve_decimal(raw, LATE_PENALTY_KEY, defaults.late_penalty_per_day),
        early_leave_penalty_per_day: resolve_decimal(
            raw,
            EARLY_LEAVE_PENALTY_KEY,
            defaults.early_leave_penalty_per_day,
        ),
    }
}

fn resolve_decimal(raw: &HashMap<String, String>, key: &str, default: Decimal) -> Decimal {
    raw.get(key)
        .and_then(|value| parse_decimal(value))
        .filter(|value| {
            (!value.is_sign_negative() || value.is_zero()) && *value <= MAX_SETTING_VALUE
        })
        .unwrap_or_else(|| {
            log_fallback(raw, key);
            default
        })
}

fn parse_decimal(value: &str) -> Option<Decimal> {
    let value = value.trim();
    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

fn log_fallback(raw: &HashMap<String, String>, key: &str) {
    match raw.get(key) {
        Some(value) => debug!(key, value = %value, "Unusable setting value, using default"),
        None => debug!(key, "Setting not configured, using default"),
    }
}
