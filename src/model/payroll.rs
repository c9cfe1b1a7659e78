use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize, Display, EnumString)]
pub enum PayrollStatus {
    Paid,
    Processing,
}

/// One month on the payroll summary page. `month` is the first of the
/// month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRecord {
    pub month: NaiveDate,
    pub status: PayrollStatus,
    pub remarks: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayslipRecord {
    pub month: NaiveDate,
    pub base: f64,
    pub allowances: f64,
    pub deductions: f64,
}

impl PayslipRecord {
    /// Net pay is always derived, never stored.
    pub fn net(&self) -> f64 {
        self.base + self.allowances - self.deductions
    }
}
