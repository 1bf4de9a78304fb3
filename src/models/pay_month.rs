//! Pay month model.
//!
//! This module contains the [`PayMonth`] type that identifies the calendar
//! month a payroll run covers.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A calendar month and year targeted by a payroll run.
///
/// The engine does not validate the month itself; callers that accept
/// untrusted input should construct values through [`PayMonth::new`].
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayMonth;
/// use chrono::NaiveDate;
///
/// let month = PayMonth::new(3, 2024).unwrap();
/// assert!(month.contains(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()));
/// assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
/// assert_eq!(month.to_string(), "2024-03");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PayMonth {
    /// The month number (1-12).
    pub month: u32,
    /// The calendar year.
    pub year: i32,
}

impl PayMonth {
    /// Creates a pay month, rejecting months outside 1-12.
    pub fn new(month: u32, year: i32) -> EngineResult<Self> {
        if (1..=12).contains(&month) && NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            Ok(Self { month, year })
        } else {
            Err(EngineError::InvalidPayMonth { month, year })
        }
    }

    /// Checks if a given date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.year() == self.year
    }
}

impl fmt::Display for PayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
