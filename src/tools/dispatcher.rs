//! Tool call execution.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::LookupPolicy;
use crate::lookup::{
    calculate_leave_balance, compare_salary_with_average, get_attendance_record,
    get_employee_profile, get_salary_details, get_team_members,
};
use crate::models::Context;

use super::{ToolError, ToolKind};

/// Arguments accepted by the tools. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct ToolArguments {
    #[serde(rename = "empId")]
    emp_id: Option<String>,
    month: Option<String>,
}

fn parse_arguments(kind: ToolKind, arguments: &str) -> Result<ToolArguments, ToolError> {
    if arguments.trim().is_empty() {
        return Ok(ToolArguments::default());
    }

    serde_json::from_str(arguments).map_err(|e| ToolError::InvalidArguments {
        tool: kind,
        message: e.to_string(),
    })
}

fn encode<T: Serialize>(result: T) -> Result<Value, ToolError> {
    serde_json::to_value(result).map_err(ToolError::Encoding)
}

/// Runs one tool call.
///
/// # Arguments
///
/// * `name` - Tool name as sent by the model
/// * `arguments` - JSON-encoded arguments object as sent by the model
/// * `context` - The request's record snapshot
/// * `policy` - Default month, leave quotas and team size
///
/// # Returns
///
/// The lookup result as JSON, or the reason there is none.
pub fn dispatch(
    name: &str,
    arguments: &str,
    context: &Context,
    policy: &LookupPolicy,
) -> Result<Value, ToolError> {
    let kind: ToolKind = name.parse()?;
    let arguments = parse_arguments(kind, arguments)?;
    let emp_id = arguments
        .emp_id
        .as_deref()
        .ok_or(ToolError::MissingArgument { name: "empId" })?;
    let month = arguments.month.as_deref().unwrap_or(&policy.default_month);

    match kind {
        ToolKind::EmployeeProfile => encode(get_employee_profile(context, emp_id)?),
        ToolKind::SalaryDetails => encode(get_salary_details(context, emp_id, month)?),
        ToolKind::AttendanceRecord => encode(get_attendance_record(context, emp_id, month)?),
        ToolKind::LeaveBalance => encode(calculate_leave_balance(context, emp_id, policy)?),
        ToolKind::TeamMembers => encode(get_team_members(context, emp_id, policy)?),
        ToolKind::SalaryComparison => encode(compare_salary_with_average(context, emp_id)?),
    }
}

/// Runs one tool call, turning any failure into an `{"error": ...}` payload.
///
/// This is what the relay feeds back to the model: a lookup miss or a
/// malformed call is information for the model, not a failed turn.
pub fn execute_tool(
    name: &str,
    arguments: &str,
    context: &Context,
    policy: &LookupPolicy,
) -> Value {
    match dispatch(name, arguments, context, policy) {
        Ok(result) => result,
        Err(ToolError::Lookup(miss)) => {
            debug!(tool = name, emp_id = miss.emp_id(), error = %miss, "Lookup found nothing");
            miss.to_payload()
        }
        Err(error) => {
            debug!(tool = name, error = %error, "Tool call returned an error payload");
            error.to_payload()
        }
    }
}
