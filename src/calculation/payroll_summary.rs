//! Month-level payroll totals.

use rust_decimal::Decimal;

use crate::models::{PayMonth, PayrollRecord, PayrollSummary};

/// Sums a month's payroll records into a [`PayrollSummary`].
///
/// An empty slice yields a zero summary with `total_employees = 0`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::summarize_payroll;
/// use payroll_engine::models::PayMonth;
/// use rust_decimal::Decimal;
///
/// let summary = summarize_payroll(&[], PayMonth::new(3, 2024).unwrap());
/// assert_eq!(summary.total_employees, 0);
/// assert_eq!(summary.total_net_salary, Decimal::ZERO);
/// ```
pub fn summarize_payroll(records: &[PayrollRecord], pay_month: PayMonth) -> PayrollSummary {
    let sum = |field: fn(&PayrollRecord) -> Decimal| -> Decimal {
        records.iter().map(field).sum()
    };

    PayrollSummary {
        month: pay_month.month,
        year: pay_month.year,
        total_employees: records.len(),
        total_gross_salary: sum(|r| r.gross_salary),
        total_net_salary: sum(|r| r.net_salary),
        total_overtime: sum(|r| r.overtime_amount),
        total_bonus: sum(|r| r.bonus_amount),
        total_deduction: sum(|r| r.deduction_amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_payroll;
    use crate::config::PayrollSettings;
    use crate::models::{EmployeeSalaryInfo, MonthlyAttendanceSummary};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn march() -> PayMonth {
        PayMonth::new(3, 2024).unwrap()
    }

    fn record(id: i64, base_salary: &str, work_days: u32, late: u32, overtime: &str) -> PayrollRecord {
        let employee = EmployeeSalaryInfo {
            employee_id: id,
            code: format!("EMP{:03}", id),
            full_name: format!("Employee {}", id),
            position: None,
            department_name: None,
            base_salary: dec(base_salary),
        };
        let summary = MonthlyAttendanceSummary {
            work_days,
            late_days: late,
            early_leave_days: 0,
            absent_days: 22u32.saturating_sub(work_days),
            total_overtime_hours: dec(overtime),
        };
        calculate_payroll(&employee, &summary, &PayrollSettings::default(), march()).unwrap()
    }

    #[test]
    fn test_empty_records_yield_zero_summary() {
        let summary = summarize_payroll(&[], march());

        assert_eq!(summary.month, 3);
        assert_eq!(summary.year, 2024);
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.total_gross_salary, Decimal::ZERO);
        assert_eq!(summary.total_net_salary, Decimal::ZERO);
        assert_eq!(summary.total_overtime, Decimal::ZERO);
        assert_eq!(summary.total_bonus, Decimal::ZERO);
        assert_eq!(summary.total_deduction, Decimal::ZERO);
    }

    #[test]
    fn test_totals_are_field_sums() {
        let records = vec![
            record(1, "22000000", 20, 0, "0"),
            record(2, "22000000", 18, 4, "5"),
        ];
        let summary = summarize_payroll(&records, march());

        assert_eq!(summary.total_employees, 2);
        assert_eq!(summary.total_gross_salary, dec("38737500"));
        assert_eq!(summary.total_net_salary, dec("31764750"));
        assert_eq!(summary.total_overtime, dec("937500"));
        assert_eq!(summary.total_deduction, dec("200000"));
        assert_eq!(summary.total_bonus, Decimal::ZERO);
    }

    #[test]
    fn test_single_record_summary_matches_record() {
        let records = vec![record(1, "9000000", 15, 1, "2.5")];
        let summary = summarize_payroll(&records, march());

        assert_eq!(summary.total_employees, 1);
        assert_eq!(summary.total_gross_salary, records[0].gross_salary);
        assert_eq!(summary.total_net_salary, records[0].net_salary);
        assert_eq!(summary.total_overtime, records[0].overtime_amount);
        assert_eq!(summary.total_deduction, records[0].deduction_amount);
    }
}
