//! Record lookups the assistant exposes to the model as tools.
//!
//! This module contains six pure functions over a request [`Context`]:
//! employee profile, salary details, attendance record, leave balance,
//! team members and salary comparison. A missing record is an ordinary
//! [`LookupError`] value, not a failure: the dispatcher hands it back to the
//! model as a structured `{"error": ...}` payload.
//!
//! [`Context`]: crate::models::Context

mod attendance_record;
mod leave_balance;
mod monthly;
mod profile;
mod salary_comparison;
mod salary_details;
mod team_members;

use serde_json::{Value, json};
use thiserror::Error;

pub use attendance_record::get_attendance_record;
pub use leave_balance::{LeaveBalance, calculate_leave_balance};
pub use monthly::{MonthlyRecord, latest_for, resolve_for_month};
pub use profile::get_employee_profile;
pub use salary_comparison::{SalaryComparison, compare_salary_with_average};
pub use salary_details::get_salary_details;
pub use team_members::{TeamMembers, get_team_members};

/// A lookup that found nothing for the requested employee.
///
/// The display text is what the model receives, so it stays short and
/// free of identifiers the model already has.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No employee with the identifier exists.
    #[error("Employee not found")]
    EmployeeNotFound {
        /// The identifier that was searched for.
        emp_id: String,
    },

    /// The employee has no payroll records.
    #[error("Payroll not found")]
    PayrollNotFound {
        /// The identifier that was searched for.
        emp_id: String,
    },

    /// The employee has no attendance records.
    #[error("Attendance not found")]
    AttendanceNotFound {
        /// The identifier that was searched for.
        emp_id: String,
    },

    /// The employee has no attendance records to derive leave usage from.
    #[error("No attendance data")]
    NoAttendanceData {
        /// The identifier that was searched for.
        emp_id: String,
    },

    /// The department's salaries sum past the representable range.
    #[error("Department salary total out of range")]
    SalaryTotalOutOfRange {
        /// The identifier that was searched for.
        emp_id: String,
    },
}

impl LookupError {
    /// Returns the identifier of the employee the lookup was for.
    pub fn emp_id(&self) -> &str {
        match self {
            LookupError::EmployeeNotFound { emp_id }
            | LookupError::PayrollNotFound { emp_id }
            | LookupError::AttendanceNotFound { emp_id }
            | LookupError::NoAttendanceData { emp_id }
            | LookupError::SalaryTotalOutOfRange { emp_id } => emp_id,
        }
    }

    /// Renders the error as the payload returned to the model.
    pub fn to_payload(&self) -> Value {
        json!({ "error": self.to_string() })
    }
}
