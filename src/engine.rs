//! Payroll run orchestration.
//!
//! The [`PayrollEngine`] ties the collaborators to the calculation steps:
//! settings are resolved once, then each eligible employee's attendance is
//! aggregated and priced, and the records are summed into a summary.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::calculation::{aggregate_attendance, calculate_payroll, summarize_payroll};
use crate::config::{PAYROLL_SETTING_KEYS, PayrollSettings, resolve_settings};
use crate::error::EngineResult;
use crate::models::{PayMonth, PayrollRecord, PayrollRun};
use crate::store::{AttendanceLedger, EmployeeDirectory, InMemoryStore, SettingsStore};

/// Runs monthly payroll over a set of collaborators.
///
/// The engine holds no state between runs; it can be shared across
/// concurrent requests.
///
/// # Example
///
/// ```
/// use payroll_engine::engine::PayrollEngine;
/// use payroll_engine::models::PayMonth;
/// use payroll_engine::store::InMemoryStore;
///
/// let engine = PayrollEngine::from_store(InMemoryStore::new());
/// let run = engine.run(PayMonth::new(3, 2024).unwrap(), None).unwrap();
/// assert_eq!(run.total, 0);
/// ```
#[derive(Clone)]
pub struct PayrollEngine {
    settings: Arc<dyn SettingsStore>,
    directory: Arc<dyn EmployeeDirectory>,
    ledger: Arc<dyn AttendanceLedger>,
}

impl PayrollEngine {
    /// Creates an engine over separate collaborators.
    pub fn new(
        settings: Arc<dyn SettingsStore>,
        directory: Arc<dyn EmployeeDirectory>,
        ledger: Arc<dyn AttendanceLedger>,
    ) -> Self {
        Self {
            settings,
            directory,
            ledger,
        }
    }

    /// Creates an engine whose collaborators are all backed by one store.
    pub fn from_store(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(store.clone(), store.clone(), store)
    }

    /// Resolves the payroll settings for a run.
    pub fn settings(&self) -> EngineResult<PayrollSettings> {
        let raw = self.settings.get_all(&PAYROLL_SETTING_KEYS)?;
        Ok(resolve_settings(&raw))
    }

    /// Calculates payroll for every eligible employee in `pay_month`.
    ///
    /// When `employee_id` is given only that employee is considered; if they
    /// are not eligible the run is empty. Records follow roster order.
    ///
    /// # Errors
    ///
    /// Any collaborator failure aborts the whole run; no partial result is
    /// returned.
    pub fn run(&self, pay_month: PayMonth, employee_id: Option<i64>) -> EngineResult<PayrollRun> {
        let start_time = Instant::now();
        let settings = self.settings()?;
        let employees = self.directory.list_active_with_salary(employee_id)?;

        info!(
            pay_month = %pay_month,
            employee_id = ?employee_id,
            employees = employees.len(),
            "Starting payroll run"
        );

        let payroll_records = employees
            .iter()
            .map(|employee| {
                let days = self
                    .ledger
                    .get_for_employee_month(employee.employee_id, pay_month)?;
                let summary = aggregate_attendance(&days, pay_month, &settings);
                let record = calculate_payroll(employee, &summary, &settings, pay_month)?;

                debug!(
                    employee_id = record.employee_id,
                    work_days = record.work_days,
                    gross_salary = %record.gross_salary,
                    net_salary = %record.net_salary,
                    "Calculated payroll record"
                );
                Ok(record)
            })
            .collect::<EngineResult<Vec<PayrollRecord>>>()?;

        let summary = summarize_payroll(&payroll_records, pay_month);

        info!(
            pay_month = %pay_month,
            total_employees = summary.total_employees,
            total_gross_salary = %summary.total_gross_salary,
            total_net_salary = %summary.total_net_salary,
            duration_us = start_time.elapsed().as_micros() as u64,
            "Payroll run completed"
        );

        Ok(PayrollRun {
            total: payroll_records.len(),
            payroll_records,
            summary,
        })
    }
}
