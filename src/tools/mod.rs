//! The six record lookups, exposed to the model as callable tools.
//!
//! [`ToolKind`] is the closed set of tools. [`tool_catalog`] describes them
//! in the provider's function-calling schema and [`execute_tool`] runs one
//! call against a request [`Context`], always producing a JSON payload.
//!
//! [`Context`]: crate::models::Context

mod catalog;
mod dispatcher;

use std::fmt;
use std::str::FromStr;

use serde_json::{Value, json};
use thiserror::Error;

use crate::lookup::LookupError;

pub use catalog::tool_catalog;
pub use dispatcher::{dispatch, execute_tool};

/// The tools the model may call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// `get_employee_profile`
    EmployeeProfile,
    /// `get_salary_details`
    SalaryDetails,
    /// `get_attendance_record`
    AttendanceRecord,
    /// `calculate_leave_balance`
    LeaveBalance,
    /// `get_team_members`
    TeamMembers,
    /// `compare_salary_with_average`
    SalaryComparison,
}

impl ToolKind {
    /// Every tool, in catalog order.
    pub const ALL: [ToolKind; 6] = [
        ToolKind::EmployeeProfile,
        ToolKind::SalaryDetails,
        ToolKind::AttendanceRecord,
        ToolKind::LeaveBalance,
        ToolKind::TeamMembers,
        ToolKind::SalaryComparison,
    ];

    /// Returns the wire name the model calls the tool by.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::EmployeeProfile => "get_employee_profile",
            ToolKind::SalaryDetails => "get_salary_details",
            ToolKind::AttendanceRecord => "get_attendance_record",
            ToolKind::LeaveBalance => "calculate_leave_balance",
            ToolKind::TeamMembers => "get_team_members",
            ToolKind::SalaryComparison => "compare_salary_with_average",
        }
    }

    /// Looks a tool up by wire name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Returns true if the tool accepts a `month` argument.
    pub fn takes_month(self) -> bool {
        matches!(self, ToolKind::SalaryDetails | ToolKind::AttendanceRecord)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| ToolError::UnknownTool {
            name: name.to_string(),
        })
    }
}

/// A tool call that produced no lookup result.
///
/// None of these fail the chat turn; each becomes an `{"error": ...}`
/// payload the model reads.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The model named a tool outside the catalog.
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The name the model used.
        name: String,
    },

    /// The arguments were not a JSON object of the expected shape.
    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments {
        /// The tool that was called.
        tool: ToolKind,
        /// The parser's description of the problem.
        message: String,
    },

    /// A required argument was absent.
    #[error("Missing required argument: {name}")]
    MissingArgument {
        /// The argument's wire name.
        name: &'static str,
    },

    /// The lookup found nothing.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// The lookup result could not be encoded as JSON.
    #[error("Failed to encode result: {0}")]
    Encoding(serde_json::Error),
}

impl ToolError {
    /// Renders the error as the payload returned to the model.
    pub fn to_payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
