//! Salary comparison against the department average.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Context;

use super::LookupError;
use super::profile::get_employee_profile;

/// Decimal places monetary results are rounded to.
const MONEY_DP: u32 = 2;

/// How an employee's salary compares with their department.
///
/// Amounts serialize as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryComparison {
    /// The employee's salary.
    #[serde(with = "rust_decimal::serde::float")]
    pub employee_salary: Decimal,
    /// Mean salary of the department, rounded to 2 places.
    #[serde(with = "rust_decimal::serde::float")]
    pub department_average: Decimal,
    /// Salary minus the unrounded mean, rounded to 2 places.
    #[serde(with = "rust_decimal::serde::float")]
    pub difference: Decimal,
    /// The department compared against.
    pub department: String,
    /// Number of employees the average was taken over, including the
    /// employee.
    pub department_headcount: usize,
}

/// Compares an employee's salary with their department's average.
///
/// The average is the arithmetic mean over every employee in the same
/// department, the queried employee included. Rounding is half-to-even.
///
/// # Arguments
///
/// * `context` - The request's record snapshot
/// * `emp_id` - Employee identifier
///
/// # Returns
///
/// The comparison, or [`LookupError::EmployeeNotFound`]. A department
/// whose salaries sum past `Decimal::MAX` yields
/// [`LookupError::SalaryTotalOutOfRange`].
///
/// # Example
///
/// ```
/// use hr_assistant::lookup::compare_salary_with_average;
/// use hr_assistant::models::Context;
/// use rust_decimal::Decimal;
///
/// let employees = serde_json::from_value(serde_json::json!([
///     { "empId": "A", "name": "A", "position": "Dev", "department": "Eng",
///       "salary": 90000, "joinDate": "2022-01-01" },
///     { "empId": "B", "name": "B", "position": "Dev", "department": "Eng",
///       "salary": 60000, "joinDate": "2022-01-01" }
/// ]))
/// .unwrap();
/// let context = Context::new(employees, vec![], vec![]).unwrap();
///
/// let comparison = compare_salary_with_average(&context, "A").unwrap();
/// assert_eq!(comparison.department_average, Decimal::new(75000, 0));
/// assert_eq!(comparison.difference, Decimal::new(15000, 0));
/// ```
pub fn compare_salary_with_average(
    context: &Context,
    emp_id: &str,
) -> Result<SalaryComparison, LookupError> {
    let employee = get_employee_profile(context, emp_id)?;

    let (total, headcount) = context
        .employees()
        .iter()
        .filter(|e| e.shares_department_with(employee))
        .try_fold((Decimal::ZERO, 0usize), |(total, count), e| {
            total
                .checked_add(e.salary)
                .map(|total| (total, count + 1))
        })
        .ok_or_else(|| LookupError::SalaryTotalOutOfRange {
            emp_id: emp_id.to_string(),
        })?;

    // Includes the employee, so never zero.
    let average = total / Decimal::from(headcount);

    Ok(SalaryComparison {
        employee_salary: employee.salary,
        department_average: average.round_dp(MONEY_DP),
        difference: (employee.salary - average).round_dp(MONEY_DP),
        department: employee.department.clone(),
        department_headcount: headcount,
    })
}
