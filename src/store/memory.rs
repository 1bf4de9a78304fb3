//! In-memory collaborator implementation.

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{AttendanceDay, EmployeeRecord, EmployeeSalaryInfo, PayMonth};

use super::{AttendanceLedger, EmployeeDirectory, RosterFilter, SettingsStore};

/// Settings, roster and attendance held in memory.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeRecord, EmployeeStatus};
/// use payroll_engine::store::{EmployeeDirectory, InMemoryStore};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new().with_employee(EmployeeRecord {
///     id: 1,
///     code: "EMP001".to_string(),
///     full_name: "Nguyen Van A".to_string(),
///     position: None,
///     department_name: None,
///     status: EmployeeStatus::Active,
///     base_salary: Some(Decimal::new(22_000_000, 0)),
/// });
/// assert_eq!(store.list_active_with_salary(None).unwrap().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    settings: HashMap<String, String>,
    employees: Vec<EmployeeRecord>,
    attendance: HashMap<i64, Vec<AttendanceDay>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a raw settings value.
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Adds an employee to the roster.
    pub fn with_employee(mut self, employee: EmployeeRecord) -> Self {
        self.employees.push(employee);
        self
    }

    /// Adds an attendance row for an employee.
    pub fn with_attendance(mut self, employee_id: i64, day: AttendanceDay) -> Self {
        self.insert_attendance(employee_id, day);
        self
    }

    /// Adds an attendance row for an employee in place.
    pub fn insert_attendance(&mut self, employee_id: i64, day: AttendanceDay) {
        self.attendance.entry(employee_id).or_default().push(day);
    }

    /// Returns every employee in the roster, eligible or not.
    pub fn employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }
}

impl SettingsStore for InMemoryStore {
    fn get_all(&self, keys: &[&str]) -> EngineResult<HashMap<String, String>> {
        Ok(keys
            .iter()
            .filter_map(|key| {
                self.settings
                    .get(*key)
                    .map(|value| (key.to_string(), value.clone()))
            })
            .collect())
    }
}

impl EmployeeDirectory for InMemoryStore {
    fn list_active_with_salary(
        &self,
        employee_id: Option<i64>,
    ) -> EngineResult<Vec<EmployeeSalaryInfo>> {
        let filter = RosterFilter::eligible().with_employee(employee_id);

        let mut eligible: Vec<EmployeeSalaryInfo> = self
            .employees
            .iter()
            .filter(|employee| filter.matches(employee))
            .filter_map(EmployeeRecord::salary_info)
            .collect();
        eligible.sort_by(|a, b| a.code.cmp(&b.code));

        Ok(eligible)
    }
}

impl AttendanceLedger for InMemoryStore {
    fn get_for_employee_month(
        &self,
        employee_id: i64,
        pay_month: PayMonth,
    ) -> EngineResult<Vec<AttendanceDay>> {
        let mut days: Vec<AttendanceDay> = self
            .attendance
            .get(&employee_id)
            .map(|days| {
                days.iter()
                    .filter(|day| pay_month.contains(day.work_date))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        days.sort_by_key(|day| day.work_date);

        Ok(days)
    }
}
