//! Tool definitions offered to the model.

use serde_json::{Map, Value, json};

use crate::config::LookupPolicy;
use crate::llm::ToolDefinition;

use super::ToolKind;

fn description(kind: ToolKind) -> &'static str {
    match kind {
        ToolKind::EmployeeProfile => {
            "Get detailed employee profile including name, position, department, salary, join date"
        }
        ToolKind::SalaryDetails => {
            "Get salary breakdown including CTC, deductions, net pay for specific month"
        }
        ToolKind::AttendanceRecord => {
            "Get attendance details including working days, leaves, overtime for a month"
        }
        ToolKind::LeaveBalance => "Calculate remaining leave balance and leave quota",
        ToolKind::TeamMembers => "Get list of team members in same department",
        ToolKind::SalaryComparison => "Compare employee salary with department average",
    }
}

fn parameters(kind: ToolKind, policy: &LookupPolicy) -> Value {
    let mut properties = Map::new();
    properties.insert(
        "empId".to_string(),
        json!({ "type": "string", "description": "Employee ID" }),
    );
    if kind.takes_month() {
        properties.insert(
            "month".to_string(),
            json!({
                "type": "string",
                "description": format!("Month name like '{}'", policy.default_month)
            }),
        );
    }

    json!({
        "type": "object",
        "properties": properties,
        "required": ["empId"]
    })
}

/// Builds the six tool definitions in catalog order.
///
/// The `month` parameter descriptions quote `policy.default_month` so the
/// model sees the expected label format.
pub fn tool_catalog(policy: &LookupPolicy) -> Vec<ToolDefinition> {
    ToolKind::ALL
        .into_iter()
        .map(|kind| {
            ToolDefinition::function(kind.name(), description(kind), parameters(kind, policy))
        })
        .collect()
}
