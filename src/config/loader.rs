//! Data directory loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll
//! settings, the employee roster, and attendance records from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::store::InMemoryStore;

use super::types::{AttendanceFile, EmployeesFile, SettingsFile};

/// Loads a payroll data directory.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── settings.yaml    # Raw payroll settings (key: "value")
/// ├── employees.yaml   # Employee roster
/// └── attendance.yaml  # Per-day attendance rows
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample").unwrap();
/// println!("Loaded {} employees", loader.employee_count());
/// let store = loader.into_store();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    store: InMemoryStore,
    attendance_rows: usize,
}

impl ConfigLoader {
    /// Loads all data files from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any of the three files is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or unexpected fields (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<SettingsFile>(&path.join("settings.yaml"))?;
        let employees = Self::load_yaml::<EmployeesFile>(&path.join("employees.yaml"))?;
        let attendance = Self::load_yaml::<AttendanceFile>(&path.join("attendance.yaml"))?;

        let mut store = settings
            .settings
            .into_iter()
            .fold(InMemoryStore::new(), |store, (key, value)| {
                store.with_setting(key, value)
            });
        store = employees
            .employees
            .into_iter()
            .fold(store, |store, employee| store.with_employee(employee));

        let attendance_rows = attendance.attendance.len();
        for entry in attendance.attendance {
            store.insert_attendance(entry.employee_id, entry.into());
        }

        info!(
            path = %path.display(),
            employees = store.employees().len(),
            attendance_rows,
            "Loaded payroll data directory"
        );

        Ok(Self {
            store,
            attendance_rows,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the number of roster entries loaded, eligible or not.
    pub fn employee_count(&self) -> usize {
        self.store.employees().len()
    }

    /// Returns the number of attendance rows loaded.
    pub fn attendance_count(&self) -> usize {
        self.attendance_rows
    }

    /// Returns the loaded data as an in-memory store.
    pub fn into_store(self) -> InMemoryStore {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PAYROLL_SETTING_KEYS, resolve_settings};
    use crate::models::PayMonth;
    use crate::store::{AttendanceLedger, EmployeeDirectory, SettingsStore};
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/sample"
    }

    #[test]
    fn test_load_sample_directory() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load data: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.employee_count(), 5);
        assert!(loader.attendance_count() > 0);
    }

    #[test]
    fn test_sample_settings_resolve() {
        let store = ConfigLoader::load(config_path()).unwrap().into_store();
        let raw = store.get_all(&PAYROLL_SETTING_KEYS).unwrap();
        let settings = resolve_settings(&raw);

        assert_eq!(settings.working_days_per_month, 22);
        assert_eq!(settings.overtime_rate, Decimal::new(15, 1));
        assert_eq!(settings.tax_rate_percent, Decimal::new(10, 0));
    }

    #[test]
    fn test_sample_roster_only_lists_eligible() {
        let store = ConfigLoader::load(config_path()).unwrap().into_store();
        let roster = store.list_active_with_salary(None).unwrap();

        let codes: Vec<&str> = roster.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["EMP001", "EMP002", "EMP003"]);
    }

    #[test]
    fn test_sample_attendance_for_month() {
        let store = ConfigLoader::load(config_path()).unwrap().into_store();
        let days = store
            .get_for_employee_month(1, PayMonth::new(3, 2024).unwrap())
            .unwrap();
        assert_eq!(days.len(), 3);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }
}
