//! Employee model.
//!
//! This module defines the [`Employee`] record as the caller supplies it in
//! the chat context.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AssistantError, AssistantResult};

/// Represents one employee in the request context.
///
/// Fields beyond the typed ones (for example `email` or `empType`) are kept
/// in [`Employee::extra`] and serialized back alongside the typed fields, so
/// the model sees the record exactly as the caller sent it.
///
/// # Example
///
/// ```
/// use hr_assistant::models::Employee;
///
/// let json = r#"{
///     "empId": "EMP001",
///     "name": "Raj Kumar",
///     "position": "Senior Software Engineer",
///     "department": "Engineering",
///     "salary": 95000,
///     "joinDate": "2022-01-15",
///     "email": "raj@company.com"
/// }"#;
///
/// let employee: Employee = serde_json::from_str(json).unwrap();
/// assert_eq!(employee.emp_id, "EMP001");
/// assert_eq!(employee.extra["email"], "raj@company.com");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "EMP001").
    pub emp_id: String,
    /// The employee's full name.
    pub name: String,
    /// Job title.
    pub position: String,
    /// Department the employee belongs to.
    pub department: String,
    /// Monthly cost-to-company salary.
    pub salary: Decimal,
    /// The date the employee joined.
    pub join_date: NaiveDate,
    /// Any additional fields supplied by the caller.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Employee {
    /// Checks the record's invariants.
    ///
    /// # Arguments
    ///
    /// * `index` - Position of the record in the employees sequence, used in
    ///   the error to point at the offending record.
    pub fn validate(&self, index: usize) -> AssistantResult<()> {
        if self.emp_id.trim().is_empty() {
            return Err(AssistantError::InvalidRecord {
                collection: "employees",
                index,
                field: "empId",
                message: "must not be empty".to_string(),
            });
        }
        if self.salary < Decimal::ZERO {
            return Err(AssistantError::InvalidRecord {
                collection: "employees",
                index,
                field: "salary",
                message: format!("must not be negative, got {}", self.salary),
            });
        }
        Ok(())
    }

    /// Returns true if both employees belong to the same department.
    pub fn shares_department_with(&self, other: &Employee) -> bool {
        self.department == other.department
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(salary: Decimal) -> Employee {
        Employee {
            emp_id: "EMP001".to_string(),
            name: "Raj Kumar".to_string(),
            position: "Senior Software Engineer".to_string(),
            department: "Engineering".to_string(),
            salary,
            join_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
            extra: Map::new(),
        }
    }

    #[test]
    fn test_deserialize_employee_with_numeric_salary() {
        let json = r#"{
            "empId": "EMP003",
            "name": "Amit Patel",
            "position": "Junior Developer",
            "department": "Engineering",
            "salary": 55000,
            "joinDate": "2023-03-20"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.emp_id, "EMP003");
        assert_eq!(employee.salary, Decimal::new(55000, 0));
        assert_eq!(
            employee.join_date,
            NaiveDate::from_ymd_opt(2023, 3, 20).unwrap()
        );
        assert!(employee.extra.is_empty());
    }

    #[test]
    fn test_deserialize_employee_keeps_extra_fields() {
        let json = r#"{
            "empId": "INT001",
            "name": "Aarav Gupta",
            "position": "Software Development Intern",
            "department": "Engineering",
            "salary": "15000",
            "joinDate": "2025-09-01",
            "email": "aarav@company.com",
            "empType": "Intern"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.salary, Decimal::new(15000, 0));
        assert_eq!(employee.extra["empType"], "Intern");

        let value = serde_json::to_value(&employee).unwrap();
        assert_eq!(value["empId"], "INT001");
        assert_eq!(value["email"], "aarav@company.com");
        assert_eq!(value["joinDate"], "2025-09-01");
    }

    #[test]
    fn test_deserialize_employee_rejects_bad_join_date() {
        let json = r#"{
            "empId": "EMP001",
            "name": "Raj Kumar",
            "position": "Engineer",
            "department": "Engineering",
            "salary": 95000,
            "joinDate": "15/01/2022"
        }"#;

        assert!(serde_json::from_str::<Employee>(json).is_err());
    }

    #[test]
    fn test_validate_accepts_zero_salary() {
        let employee = create_test_employee(Decimal::ZERO);
        assert!(employee.validate(0).is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_salary() {
        let employee = create_test_employee(Decimal::new(-1, 0));
        match employee.validate(4) {
            Err(AssistantError::InvalidRecord { index, field, .. }) => {
                assert_eq!(index, 4);
                assert_eq!(field, "salary");
            }
            other => panic!("Expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_blank_emp_id() {
        let mut employee = create_test_employee(Decimal::new(50000, 0));
        employee.emp_id = "  ".to_string();
        assert!(matches!(
            employee.validate(0),
            Err(AssistantError::InvalidRecord { field: "empId", .. })
        ));
    }

    #[test]
    fn test_shares_department_with() {
        let a = create_test_employee(Decimal::new(1, 0));
        let mut b = create_test_employee(Decimal::new(2, 0));
        assert!(a.shares_department_with(&b));
        b.department = "Design".to_string();
        assert!(!a.shares_department_with(&b));
    }
}
