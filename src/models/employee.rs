//! Employee model and related types.
//!
//! This module defines the roster row ([`EmployeeRecord`]) and the narrowed
//! view the calculator works with ([`EmployeeSalaryInfo`]).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employment status as recorded in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently employed and paid through payroll.
    Active,
    /// Temporarily not on payroll.
    Inactive,
    /// No longer employed.
    Terminated,
}

/// An employee row as held by the employee directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: i64,
    /// Employee code, used for roster ordering.
    pub code: String,
    /// The employee's full name.
    pub full_name: String,
    /// Job title.
    #[serde(default)]
    pub position: Option<String>,
    /// Name of the employee's department.
    #[serde(default)]
    pub department_name: Option<String>,
    /// Employment status.
    pub status: EmployeeStatus,
    /// Monthly base salary; employees without one are not paid through payroll.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
}

impl EmployeeRecord {
    /// Returns true if the employee is active and has a base salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeRecord, EmployeeStatus};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = EmployeeRecord {
    ///     id: 1,
    ///     code: "EMP001".to_string(),
    ///     full_name: "Nguyen Van A".to_string(),
    ///     position: None,
    ///     department_name: None,
    ///     status: EmployeeStatus::Active,
    ///     base_salary: Some(Decimal::new(22_000_000, 0)),
    /// };
    /// assert!(employee.is_payroll_eligible());
    /// ```
    pub fn is_payroll_eligible(&self) -> bool {
        self.status == EmployeeStatus::Active && self.base_salary.is_some()
    }

    /// Returns the salary view of an eligible employee, or `None` otherwise.
    pub fn salary_info(&self) -> Option<EmployeeSalaryInfo> {
        if self.status != EmployeeStatus::Active {
            return None;
        }
        let base_salary = self.base_salary?;
        Some(EmployeeSalaryInfo {
            employee_id: self.id,
            code: self.code.clone(),
            full_name: self.full_name.clone(),
            position: self.position.clone(),
            department_name: self.department_name.clone(),
            base_salary,
        })
    }
}

/// Identity and base salary of an employee eligible for payroll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSalaryInfo {
    /// Unique identifier for the employee.
    pub employee_id: i64,
    /// Employee code.
    pub code: String,
    /// The employee's full name.
    pub full_name: String,
    /// Job title.
    pub position: Option<String>,
    /// Name of the employee's department.
    pub department_name: Option<String>,
    /// Monthly base salary.
    pub base_salary: Decimal,
}
