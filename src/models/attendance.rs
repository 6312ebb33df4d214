//! Attendance record model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AssistantError, AssistantResult};

/// One employee's attendance for one month.
///
/// The month is a free-form label such as `"January 2026"`; it is compared
/// verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// Identifier of the employee this record belongs to.
    pub emp_id: String,
    /// Month label (e.g., "January 2026").
    pub month: String,
    /// Days actually worked in the month.
    #[serde(alias = "workingDays")]
    pub days_worked: u32,
    /// Sick leave days taken.
    #[serde(default)]
    pub sick_leave: u32,
    /// Paid leave days taken.
    #[serde(default)]
    pub paid_leave: u32,
    /// Unpaid leave days taken.
    #[serde(default)]
    pub unpaid_leave: u32,
    /// Overtime hours worked.
    #[serde(default)]
    pub overtime_hours: Decimal,
    /// Calendar days in the month, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_days: Option<u32>,
    /// Weekend days in the month, when supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekends: Option<u32>,
    /// Any additional fields supplied by the caller.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AttendanceRecord {
    /// Checks the record's invariants.
    pub fn validate(&self, index: usize) -> AssistantResult<()> {
        if self.emp_id.trim().is_empty() {
            return Err(AssistantError::InvalidRecord {
                collection: "attendance",
                index,
                field: "empId",
                message: "must not be empty".to_string(),
            });
        }
        if self.overtime_hours < Decimal::ZERO {
            return Err(AssistantError::InvalidRecord {
                collection: "attendance",
                index,
                field: "overtimeHours",
                message: format!("must not be negative, got {}", self.overtime_hours),
            });
        }
        Ok(())
    }
}
