//! Monthly salary calculation.
//!
//! This module applies the salary formula to one employee's monthly
//! attendance summary, producing an itemized [`PayrollRecord`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PayrollSettings;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeSalaryInfo, MonthlyAttendanceSummary, PayMonth, PayrollRecord};

/// Standard working hours per day, used to derive the hourly rate.
pub const STANDARD_HOURS_PER_DAY: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Rounds a monetary amount to whole currency units, midpoints away from zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(12345, 1)), Decimal::new(1235, 0));
/// assert_eq!(round_currency(Decimal::new(-5, 1)), Decimal::new(-1, 0));
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates one employee's payroll record for a month.
///
/// 1. daily salary = base salary / working days per month
/// 2. base salary amount = daily salary x min(work days, working days per month)
/// 3. hourly rate = base salary / working days per month / 8
/// 4. overtime amount = hourly rate x overtime hours x overtime rate
/// 5. deduction = late days x late penalty + early-leave days x early-leave penalty
/// 6. gross = base salary amount + overtime amount - deduction
/// 7. tax = gross x tax rate / 100
/// 8. insurance = gross x insurance rate / 100
/// 9. net = gross - tax - insurance
///
/// Steps 1-5 run on unrounded values. The base, overtime and deduction
/// amounts are each rounded once; gross is derived from those rounded
/// amounts, tax and insurance are rounded from that gross, and net is
/// derived from the rounded figures. Every record therefore satisfies
/// `gross = base + overtime - deduction` and `net = gross - tax - insurance`
/// exactly. Rounding only once, when the record is built, would break those
/// identities; in exchange net can differ from that figure by one currency
/// unit (two at the very most). Gross and net are not clamped and may be
/// negative when penalties exceed pay.
///
/// # Errors
///
/// Returns [`EngineError::CalculationOverflow`] when any intermediate amount
/// leaves the representable decimal range.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::config::PayrollSettings;
/// use payroll_engine::models::{EmployeeSalaryInfo, MonthlyAttendanceSummary, PayMonth};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeSalaryInfo {
///     employee_id: 1,
///     code: "EMP001".to_string(),
///     full_name: "Nguyen Van A".to_string(),
///     position: None,
///     department_name: None,
///     base_salary: Decimal::new(22_000_000, 0),
/// };
/// let summary = MonthlyAttendanceSummary {
///     work_days: 20,
///     absent_days: 2,
///     ..MonthlyAttendanceSummary::default()
/// };
///
/// let record = calculate_payroll(
///     &employee,
///     &summary,
///     &PayrollSettings::default(),
///     PayMonth::new(3, 2024).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(record.gross_salary, Decimal::new(20_000_000, 0));
/// assert_eq!(record.net_salary, Decimal::new(16_400_000, 0));
/// ```
pub fn calculate_payroll(
    employee: &EmployeeSalaryInfo,
    summary: &MonthlyAttendanceSummary,
    settings: &PayrollSettings,
    pay_month: PayMonth,
) -> EngineResult<PayrollRecord> {
    let overflow = || EngineError::CalculationOverflow {
        employee_id: employee.employee_id,
    };
    let mul = |a: Decimal, b: Decimal| a.checked_mul(b).ok_or_else(overflow);
    let percent_of = |amount: Decimal, rate: Decimal| -> EngineResult<Decimal> {
        mul(amount, rate)?
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(overflow)
    };

    let working_days = Decimal::from(settings.working_days_per_month);

    let daily_salary = employee
        .base_salary
        .checked_div(working_days)
        .ok_or_else(overflow)?;
    let paid_days = Decimal::from(summary.work_days.min(settings.working_days_per_month));
    let base_salary_amount = round_currency(mul(daily_salary, paid_days)?);

    let hourly_rate = daily_salary
        .checked_div(STANDARD_HOURS_PER_DAY)
        .ok_or_else(overflow)?;
    let overtime_amount = round_currency(mul(
        mul(hourly_rate, summary.total_overtime_hours)?,
        settings.overtime_rate,
    )?);

    let late_penalty = mul(Decimal::from(summary.late_days), settings.late_penalty_per_day)?;
    let early_leave_penalty = mul(
        Decimal::from(summary.early_leave_days),
        settings.early_leave_penalty_per_day,
    )?;
    let deduction_amount = round_currency(
        late_penalty
            .checked_add(early_leave_penalty)
            .ok_or_else(overflow)?,
    );

    let gross_salary = base_salary_amount
        .checked_add(overtime_amount)
        .and_then(|amount| amount.checked_sub(deduction_amount))
        .ok_or_else(overflow)?;
    let tax_amount = round_currency(percent_of(gross_salary, settings.tax_rate_percent)?);
    let insurance_amount =
        round_currency(percent_of(gross_salary, settings.insurance_rate_percent)?);
    let net_salary = gross_salary
        .checked_sub(tax_amount)
        .and_then(|amount| amount.checked_sub(insurance_amount))
        .ok_or_else(overflow)?;

    Ok(PayrollRecord {
        employee_id: employee.employee_id,
        employee_code: employee.code.clone(),
        full_name: employee.full_name.clone(),
        position: employee.position.clone(),
        department_name: employee.department_name.clone(),
        month: pay_month.month,
        year: pay_month.year,
        base_salary: employee.base_salary,
        work_days: summary.work_days,
        late_days: summary.late_days,
        early_leave_days: summary.early_leave_days,
        absent_days: summary.absent_days,
        overtime_hours: summary.total_overtime_hours,
        base_salary_amount,
        overtime_amount,
        bonus_amount: Decimal::ZERO,
        deduction_amount,
        gross_salary,
        tax_amount,
        insurance_amount,
        net_salary,
    })
}
