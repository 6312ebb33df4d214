//! Leave balance calculation.
//!
//! Leave usage comes from the employee's most recent attendance record and
//! is compared against the fixed company quotas in [`LookupPolicy`].

use serde::Serialize;

use crate::config::LookupPolicy;
use crate::models::Context;

use super::LookupError;
use super::monthly::latest_for;

/// Leave used against quota, as of the most recent attendance month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    /// Sick leave days taken.
    pub sick_leave_used: u32,
    /// Sick leave allowance.
    pub sick_leave_quota: u32,
    /// Allowance minus usage; negative when over-drawn.
    pub sick_leave_remaining: i64,
    /// Paid leave days taken.
    pub paid_leave_used: u32,
    /// Paid leave allowance.
    pub paid_leave_quota: u32,
    /// Allowance minus usage; negative when over-drawn.
    pub paid_leave_remaining: i64,
    /// Month of the attendance record the usage came from.
    pub month: String,
}

/// Calculates an employee's leave balance.
///
/// # Arguments
///
/// * `context` - The request's record snapshot
/// * `emp_id` - Employee identifier
/// * `policy` - Supplies the sick and paid leave quotas
///
/// # Returns
///
/// The balance derived from the employee's last attendance record, or
/// [`LookupError::NoAttendanceData`].
///
/// # Example
///
/// ```
/// use hr_assistant::config::LookupPolicy;
/// use hr_assistant::lookup::calculate_leave_balance;
/// use hr_assistant::models::Context;
///
/// let attendance = serde_json::from_value(serde_json::json!([
///     { "empId": "EMP001", "month": "January 2026", "daysWorked": 21,
///       "sickLeave": 2, "paidLeave": 3 }
/// ]))
/// .unwrap();
/// let context = Context::new(vec![], attendance, vec![]).unwrap();
///
/// let balance = calculate_leave_balance(&context, "EMP001", &LookupPolicy::default()).unwrap();
/// assert_eq!(balance.sick_leave_remaining, 8);
/// assert_eq!(balance.paid_leave_remaining, 12);
/// ```
pub fn calculate_leave_balance(
    context: &Context,
    emp_id: &str,
    policy: &LookupPolicy,
) -> Result<LeaveBalance, LookupError> {
    let recent = latest_for(context.attendance(), emp_id).ok_or_else(|| {
        LookupError::NoAttendanceData {
            emp_id: emp_id.to_string(),
        }
    })?;

    Ok(LeaveBalance {
        sick_leave_used: recent.sick_leave,
        sick_leave_quota: policy.sick_leave_quota,
        sick_leave_remaining: i64::from(policy.sick_leave_quota) - i64::from(recent.sick_leave),
        paid_leave_used: recent.paid_leave,
        paid_leave_quota: policy.paid_leave_quota,
        paid_leave_remaining: i64::from(policy.paid_leave_quota) - i64::from(recent.paid_leave),
        month: recent.month.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_context;

    #[test]
    fn test_uses_most_recent_attendance() {
        let context = sample_context();
        let balance =
            calculate_leave_balance(&context, "EMP001", &LookupPolicy::default()).unwrap();

        assert_eq!(
            balance,
            LeaveBalance {
                sick_leave_used: 0,
                sick_leave_quota: 10,
                sick_leave_remaining: 10,
                paid_leave_used: 1,
                paid_leave_quota: 15,
                paid_leave_remaining: 14,
                month: "January 2026".to_string(),
            }
        );
    }

    #[test]
    fn test_quotas_come_from_policy() {
        let context = sample_context();
        let policy = LookupPolicy {
            sick_leave_quota: 2,
            paid_leave_quota: 3,
            ..LookupPolicy::default()
        };

        let balance = calculate_leave_balance(&context, "EMP002", &policy).unwrap();
        assert_eq!(balance.sick_leave_quota, 2);
        assert_eq!(balance.sick_leave_remaining, -1);
        assert_eq!(balance.paid_leave_remaining, -1);
    }

    #[test]
    fn test_no_attendance_data() {
        let context = sample_context();
        assert_eq!(
            calculate_leave_balance(&context, "EMP003", &LookupPolicy::default()),
            Err(LookupError::NoAttendanceData {
                emp_id: "EMP003".to_string()
            })
        );
    }

    #[test]
    fn test_serializes_camel_case() {
        let context = sample_context();
        let balance =
            calculate_leave_balance(&context, "EMP001", &LookupPolicy::default()).unwrap();
        let value = serde_json::to_value(&balance).unwrap();

        assert_eq!(value["sickLeaveQuota"], 10);
        assert_eq!(value["paidLeaveUsed"], 1);
        assert_eq!(value["month"], "January 2026");
    }
}
