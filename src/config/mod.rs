//! Configuration for the payroll engine.
//!
//! Payroll rates are resolved per run from raw settings values (see
//! [`resolve_settings`]). The [`ConfigLoader`] reads a YAML data directory
//! holding settings, the employee roster, and attendance records.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let store = ConfigLoader::load("./config/sample").unwrap().into_store();
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::{
    EARLY_LEAVE_PENALTY_KEY, INSURANCE_RATE_KEY, LATE_PENALTY_KEY, MAX_SETTING_VALUE,
    OVERTIME_RATE_KEY, PAYROLL_SETTING_KEYS, PayrollSettings, TAX_RATE_KEY,
    WORKING_DAYS_PER_MONTH_KEY, resolve_settings,
};
pub use types::{AttendanceEntry, AttendanceFile, EmployeesFile, SettingsFile};
