//! Salary details lookup.

use crate::models::{Context, PayrollRecord};

use super::LookupError;
use super::monthly::resolve_for_month;

/// Returns an employee's payroll record for a month.
///
/// The exact (employee, month) record wins. If the employee has no record
/// for that month, their most recent payroll record is returned instead.
///
/// # Arguments
///
/// * `context` - The request's record snapshot
/// * `emp_id` - Employee identifier
/// * `month` - Month label (e.g., "January 2026")
///
/// # Returns
///
/// The resolved payroll record, or [`LookupError::PayrollNotFound`] if the
/// employee has no payroll records at all.
pub fn get_salary_details<'a>(
    context: &'a Context,
    emp_id: &str,
    month: &str,
) -> Result<&'a PayrollRecord, LookupError> {
    resolve_for_month(context.payroll(), emp_id, month).ok_or_else(|| {
        LookupError::PayrollNotFound {
            emp_id: emp_id.to_string(),
        }
    })
}
