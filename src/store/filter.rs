//! Roster filtering.

use crate::models::EmployeeRecord;

/// Declarative predicate selecting the employees a payroll run covers.
///
/// Built once from the optional filters of a request and applied uniformly
/// to every roster row.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{EmployeeRecord, EmployeeStatus};
/// use payroll_engine::store::RosterFilter;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeRecord {
///     id: 5,
///     code: "EMP005".to_string(),
///     full_name: "Pham Van D".to_string(),
///     position: None,
///     department_name: None,
///     status: EmployeeStatus::Active,
///     base_salary: Some(Decimal::new(10_000_000, 0)),
/// };
/// assert!(RosterFilter::eligible().matches(&employee));
/// assert!(!RosterFilter::eligible().with_employee(Some(6)).matches(&employee));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterFilter {
    employee_id: Option<i64>,
}

impl RosterFilter {
    /// Matches every active employee with a base salary.
    pub fn eligible() -> Self {
        Self::default()
    }

    /// Narrows the filter to a single employee when `employee_id` is set.
    pub fn with_employee(mut self, employee_id: Option<i64>) -> Self {
        self.employee_id = employee_id;
        self
    }

    /// Returns true if the employee passes every filter condition.
    pub fn matches(&self, employee: &EmployeeRecord) -> bool {
        employee.is_payroll_eligible() && self.employee_id.is_none_or(|id| id == employee.id)
    }
}
