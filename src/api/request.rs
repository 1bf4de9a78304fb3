//! Request types for the payroll API.

use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::PayMonth;

/// Request body for the `/payroll/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The month to calculate (1-12).
    pub month: u32,
    /// The year to calculate.
    pub year: i32,
    /// Restricts the run to a single employee.
    #[serde(default)]
    pub employee_id: Option<i64>,
}

impl PayrollRequest {
    /// Validates the requested month and year.
    pub fn pay_month(&self) -> EngineResult<PayMonth> {
        PayMonth::new(self.month, self.year)
    }
}
