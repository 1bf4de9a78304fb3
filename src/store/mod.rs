//! Collaborator interfaces the payroll engine reads from.
//!
//! The engine only ever reads: settings, the employee roster, and the
//! attendance ledger. Each is a trait so the backing storage can be swapped
//! without touching the calculation code. [`InMemoryStore`] implements all
//! three and backs both the binary and the tests.
//!
//! The traits are synchronous and implementations may block; the HTTP layer
//! runs the engine on tokio's blocking thread pool.

mod filter;
mod memory;

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{AttendanceDay, EmployeeSalaryInfo, PayMonth};

pub use filter::RosterFilter;
pub use memory::InMemoryStore;

/// Read-only key/value settings lookup.
pub trait SettingsStore: Send + Sync {
    /// Returns the values stored for `keys`. Keys without a value are
    /// absent from the result rather than an error.
    fn get_all(&self, keys: &[&str]) -> EngineResult<HashMap<String, String>>;
}

/// Read-only employee roster.
pub trait EmployeeDirectory: Send + Sync {
    /// Lists active employees with a base salary, ordered by employee code
    /// ascending, optionally narrowed to a single employee.
    fn list_active_with_salary(
        &self,
        employee_id: Option<i64>,
    ) -> EngineResult<Vec<EmployeeSalaryInfo>>;
}

/// Read-only per-day attendance records.
pub trait AttendanceLedger: Send + Sync {
    /// Returns the employee's attendance rows dated within `pay_month`.
    fn get_for_employee_month(
        &self,
        employee_id: i64,
        pay_month: PayMonth,
    ) -> EngineResult<Vec<AttendanceDay>>;
}
