//! Month-keyed record resolution shared by the salary and attendance lookups.

use crate::models::{AttendanceRecord, PayrollRecord};

/// A record that belongs to one employee and one month.
pub trait MonthlyRecord {
    /// Identifier of the employee the record belongs to.
    fn emp_id(&self) -> &str;
    /// Month label of the record.
    fn month(&self) -> &str;
}

impl MonthlyRecord for AttendanceRecord {
    fn emp_id(&self) -> &str {
        &self.emp_id
    }

    fn month(&self) -> &str {
        &self.month
    }
}

impl MonthlyRecord for PayrollRecord {
    fn emp_id(&self) -> &str {
        &self.emp_id
    }

    fn month(&self) -> &str {
        &self.month
    }
}

/// Resolves the record for an employee and month.
///
/// Returns the first record matching both the employee and the month. When
/// no record has that month, falls back to the employee's most recent
/// record, which is the last one in sequence order.
pub fn resolve_for_month<'a, R: MonthlyRecord>(
    records: &'a [R],
    emp_id: &str,
    month: &str,
) -> Option<&'a R> {
    records
        .iter()
        .find(|r| r.emp_id() == emp_id && r.month() == month)
        .or_else(|| latest_for(records, emp_id))
}

/// Returns the employee's most recent record (the last in sequence order).
pub fn latest_for<'a, R: MonthlyRecord>(records: &'a [R], emp_id: &str) -> Option<&'a R> {
    records.iter().rfind(|r| r.emp_id() == emp_id)
}
