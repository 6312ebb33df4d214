//! Request types for the HR assistant API.
//!
//! This module defines the JSON request structures for the `/api/chat`
//! endpoint.

use serde::{Deserialize, Serialize};

use crate::error::AssistantError;
use crate::models::{AttendanceRecord, Context, Employee, PayrollRecord};

/// Request body for the `/api/chat` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// The employee the user is chatting as.
    #[serde(rename = "empId")]
    pub emp_id: String,
    /// Records the tools may consult; absent means no records.
    #[serde(default)]
    pub context: Option<ContextPayload>,
}

/// The record snapshot supplied with a chat request.
///
/// Every collection is optional. Conversion into a [`Context`] validates
/// every record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContextPayload {
    /// Employee records.
    #[serde(default)]
    pub employees: Vec<Employee>,
    /// Monthly attendance records.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Monthly payroll records.
    #[serde(default)]
    pub payroll: Vec<PayrollRecord>,
}

impl TryFrom<ContextPayload> for Context {
    type Error = AssistantError;

    fn try_from(payload: ContextPayload) -> Result<Self, Self::Error> {
        Context::new(payload.employees, payload.attendance, payload.payroll)
    }
}
