//! Attendance record lookup.

use crate::models::{AttendanceRecord, Context};

use super::LookupError;
use super::monthly::resolve_for_month;

/// Returns an employee's attendance record for a month.
///
/// Uses the same resolution as [`get_salary_details`]: the exact month if
/// present, otherwise the employee's most recent record.
///
/// [`get_salary_details`]: super::get_salary_details
pub fn get_attendance_record<'a>(
    context: &'a Context,
    emp_id: &str,
    month: &str,
) -> Result<&'a AttendanceRecord, LookupError> {
    resolve_for_month(context.attendance(), emp_id, month).ok_or_else(|| {
        LookupError::AttendanceNotFound {
            emp_id: emp_id.to_string(),
        }
    })
}
