use chrono::NaiveDate;

use crate::model::payroll::{PayrollRecord, PayslipRecord};
use crate::seed;

/// Read-only payroll and payslip summaries. Nothing here mutates;
/// amounts come straight from the seed and net pay is derived.
pub struct PayrollBook {
    records: Vec<PayrollRecord>,
    payslips: Vec<PayslipRecord>,
}

impl PayrollBook {
    pub fn seeded() -> Self {
        Self {
            records: seed::PAYROLL.clone(),
            payslips: seed::PAYSLIPS.clone(),
        }
    }

    /// Newest month first, as the summary page renders them.
    pub fn records(&self) -> &[PayrollRecord] {
        &self.records
    }

    pub fn payslips(&self) -> &[PayslipRecord] {
        &self.payslips
    }

    pub fn payslip_for(&self, month: NaiveDate) -> Option<&PayslipRecord> {
        self.payslips.iter().find(|p| p.month == month)
    }
}
