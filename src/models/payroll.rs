//! Payroll result models.
//!
//! This module contains the [`PayrollRecord`] produced per employee, the
//! month-level [`PayrollSummary`], and the [`PayrollRun`] returned by the
//! engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Itemized payroll for one employee for one month.
///
/// All monetary fields are whole currency units. Records are built once by
/// the calculator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Unique identifier for the employee.
    pub employee_id: i64,
    /// Employee code.
    pub employee_code: String,
    /// The employee's full name.
    pub full_name: String,
    /// Job title.
    pub position: Option<String>,
    /// Name of the employee's department.
    pub department_name: Option<String>,
    /// The month paid (1-12).
    pub month: u32,
    /// The year paid.
    pub year: i32,
    /// Monthly base salary the record was calculated from.
    pub base_salary: Decimal,
    /// Days with both check-in and check-out recorded.
    pub work_days: u32,
    /// Days with a late check-in.
    pub late_days: u32,
    /// Days with an early check-out.
    pub early_leave_days: u32,
    /// Configured working days not worked.
    pub absent_days: u32,
    /// Overtime hours recorded in the month.
    pub overtime_hours: Decimal,
    /// Base salary prorated by days worked.
    pub base_salary_amount: Decimal,
    /// Overtime pay.
    pub overtime_amount: Decimal,
    /// Bonus pay; always zero, bonuses are granted outside this engine.
    pub bonus_amount: Decimal,
    /// Lateness and early-leave penalties.
    pub deduction_amount: Decimal,
    /// Pay before tax and insurance withholding. Not floor-clamped.
    pub gross_salary: Decimal,
    /// Tax withheld.
    pub tax_amount: Decimal,
    /// Insurance withheld.
    pub insurance_amount: Decimal,
    /// Final payable amount. Not floor-clamped.
    pub net_salary: Decimal,
}

/// Month-level totals over all records of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// The month summarized.
    pub month: u32,
    /// The year summarized.
    pub year: i32,
    /// Number of records summarized.
    pub total_employees: usize,
    /// Sum of gross salaries.
    pub total_gross_salary: Decimal,
    /// Sum of net salaries.
    pub total_net_salary: Decimal,
    /// Sum of overtime pay.
    pub total_overtime: Decimal,
    /// Sum of bonuses.
    pub total_bonus: Decimal,
    /// Sum of deductions.
    pub total_deduction: Decimal,
}

/// The complete output of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// One record per eligible employee, in roster order.
    pub payroll_records: Vec<PayrollRecord>,
    /// Totals over `payroll_records`.
    pub summary: PayrollSummary,
    /// Number of records.
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_summary() -> PayrollSummary {
        PayrollSummary {
            month: 3,
            year: 2024,
            total_employees: 0,
            total_gross_salary: Decimal::ZERO,
            total_net_salary: Decimal::ZERO,
            total_overtime: Decimal::ZERO,
            total_bonus: Decimal::ZERO,
            total_deduction: Decimal::ZERO,
        }
    }

    #[test]
    fn test_run_serializes_snake_case_fields() {
        let run = PayrollRun {
            payroll_records: vec![],
            summary: create_summary(),
            total: 0,
        };
        let json = serde_json::to_value(&run).unwrap();

        assert!(json["payroll_records"].as_array().unwrap().is_empty());
        assert_eq!(json["summary"]["total_employees"], 0);
        assert_eq!(json["summary"]["total_gross_salary"], "0");
        assert_eq!(json["total"], 0);
    }

    #[test]
    fn test_summary_deserialization() {
        let json = r#"{
            "month": 3,
            "year": 2024,
            "total_employees": 2,
            "total_gross_salary": "38737500",
            "total_net_salary": "31764750",
            "total_overtime": "937500",
            "total_bonus": "0",
            "total_deduction": "200000"
        }"#;
        let summary: PayrollSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_overtime, Decimal::new(937_500, 0));
    }
}
