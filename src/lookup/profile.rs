//! Employee profile lookup.

use crate::models::{Context, Employee};

use super::LookupError;

/// Returns the profile of the employee with the given identifier.
///
/// # Arguments
///
/// * `context` - The request's record snapshot
/// * `emp_id` - Identifier to match exactly
///
/// # Returns
///
/// The first employee whose `empId` equals `emp_id`, or
/// [`LookupError::EmployeeNotFound`].
pub fn get_employee_profile<'a>(
    context: &'a Context,
    emp_id: &str,
) -> Result<&'a Employee, LookupError> {
    context
        .find_employee(emp_id)
        .ok_or_else(|| LookupError::EmployeeNotFound {
            emp_id: emp_id.to_string(),
        })
}
