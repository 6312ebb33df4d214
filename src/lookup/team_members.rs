//! Team members lookup.

use serde::Serialize;

use crate::config::LookupPolicy;
use crate::models::{Context, Employee};

use super::LookupError;
use super::profile::get_employee_profile;

/// An employee's department and some of their colleagues.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamMembers<'a> {
    /// The department shared by the employee and the members.
    pub department: &'a str,
    /// Colleagues in caller order, excluding the employee, truncated to the
    /// policy's team member limit.
    pub members: Vec<&'a Employee>,
}

/// Lists the employee's colleagues in the same department.
///
/// # Arguments
///
/// * `context` - The request's record snapshot
/// * `emp_id` - Employee identifier
/// * `policy` - Supplies the maximum number of members returned
///
/// # Returns
///
/// The department and up to `policy.team_member_limit` colleagues, or
/// [`LookupError::EmployeeNotFound`].
pub fn get_team_members<'a>(
    context: &'a Context,
    emp_id: &str,
    policy: &LookupPolicy,
) -> Result<TeamMembers<'a>, LookupError> {
    let employee = get_employee_profile(context, emp_id)?;

    let members = context
        .employees()
        .iter()
        .filter(|e| e.shares_department_with(employee) && e.emp_id != emp_id)
        .take(policy.team_member_limit)
        .collect();

    Ok(TeamMembers {
        department: &employee.department,
        members,
    })
}
