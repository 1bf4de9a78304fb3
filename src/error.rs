//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a payroll run.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Collaborator failures are fatal to the whole run: the engine never
/// returns a partially populated result alongside one of these.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The settings store could not be read.
    #[error("Settings store unavailable: {message}")]
    SettingsUnavailable {
        /// A description of the underlying failure.
        message: String,
    },

    /// The employee directory could not be read.
    #[error("Employee directory unavailable: {message}")]
    RosterUnavailable {
        /// A description of the underlying failure.
        message: String,
    },

    /// The attendance ledger could not be read for an employee.
    #[error("Attendance ledger unavailable for employee {employee_id}: {message}")]
    AttendanceUnavailable {
        /// The employee whose attendance was being fetched.
        employee_id: i64,
        /// A description of the underlying failure.
        message: String,
    },

    /// A month/year pair that does not name a calendar month.
    #[error("Invalid pay month: {month}/{year}")]
    InvalidPayMonth {
        /// The requested month.
        month: u32,
        /// The requested year.
        year: i32,
    },

    /// A salary figure exceeded the representable decimal range.
    #[error("Payroll amount overflowed for employee {employee_id}")]
    CalculationOverflow {
        /// The employee whose record could not be calculated.
        employee_id: i64,
    },
}

impl EngineError {
    /// Returns true if the error was caused by an unreachable collaborator.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            EngineError::SettingsUnavailable { .. }
                | EngineError::RosterUnavailable { .. }
                | EngineError::AttendanceUnavailable { .. }
        )
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/data/employees.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/data/employees.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_attendance_unavailable_displays_employee() {
        let error = EngineError::AttendanceUnavailable {
            employee_id: 42,
            message: "connection reset".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Attendance ledger unavailable for employee 42: connection reset"
        );
    }

    #[test]
    fn test_invalid_pay_month_displays_month_and_year() {
        let error = EngineError::InvalidPayMonth {
            month: 13,
            year: 2024,
        };
        assert_eq!(error.to_string(), "Invalid pay month: 13/2024");
    }

    #[test]
    fn test_calculation_overflow_displays_employee() {
        let error = EngineError::CalculationOverflow { employee_id: 7 };
        assert_eq!(error.to_string(), "Payroll amount overflowed for employee 7");
        assert!(!error.is_unavailable());
    }

    #[test]
    fn test_is_unavailable_only_for_collaborator_failures() {
        assert!(
            EngineError::SettingsUnavailable {
                message: "timeout".to_string()
            }
            .is_unavailable()
        );
        assert!(
            EngineError::RosterUnavailable {
                message: "timeout".to_string()
            }
            .is_unavailable()
        );
        assert!(
            !EngineError::InvalidPayMonth {
                month: 0,
                year: 2024
            }
            .is_unavailable()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_roster_unavailable() -> EngineResult<()> {
            Err(EngineError::RosterUnavailable {
                message: "down".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_roster_unavailable()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
