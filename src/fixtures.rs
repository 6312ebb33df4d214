//! Sample records shared by unit tests.

use serde_json::json;

use crate::models::Context;

/// A small company: seven engineers, one designer, one HR manager, with
/// two months of attendance and payroll for EMP001 and one for EMP002.
///
/// Engineering salaries sum to 580000 over 7 people.
pub(crate) fn sample_context() -> Context {
    let employees = serde_json::from_value(json!([
        { "empId": "EMP001", "name": "Raj Kumar", "position": "Senior Software Engineer",
          "department": "Engineering", "salary": 95000, "joinDate": "2022-01-15",
          "email": "raj@company.com", "empType": "Full-time" },
        { "empId": "EMP002", "name": "Priya Sharma", "position": "HR Manager",
          "department": "Human Resources", "salary": 85000, "joinDate": "2021-06-10" },
        { "empId": "EMP003", "name": "Amit Patel", "position": "Junior Developer",
          "department": "Engineering", "salary": 55000, "joinDate": "2023-03-20" },
        { "empId": "EMP004", "name": "Sneha Reddy", "position": "UI/UX Designer",
          "department": "Design", "salary": 70000, "joinDate": "2022-08-12" },
        { "empId": "EMP005", "name": "Vikram Singh", "position": "DevOps Engineer",
          "department": "Engineering", "salary": 90000, "joinDate": "2021-11-05" },
        { "empId": "EMP007", "name": "Rohit Gupta", "position": "QA Engineer",
          "department": "Engineering", "salary": 60000, "joinDate": "2023-01-08" },
        { "empId": "EMP011", "name": "Karthik Iyer", "position": "Backend Developer",
          "department": "Engineering", "salary": 80000, "joinDate": "2022-02-20" },
        { "empId": "EMP013", "name": "Sanjay Pillai", "position": "Team Lead",
          "department": "Engineering", "salary": 125000, "joinDate": "2020-01-10" },
        { "empId": "EMP019", "name": "Rahul Saxena", "position": "Frontend Developer",
          "department": "Engineering", "salary": 75000, "joinDate": "2021-12-05" }
    ]))
    .unwrap();

    let attendance = serde_json::from_value(json!([
        { "empId": "EMP001", "month": "December 2025", "daysWorked": 20,
          "sickLeave": 1, "paidLeave": 2, "unpaidLeave": 0, "overtimeHours": 0 },
        { "empId": "EMP002", "month": "January 2026", "daysWorked": 16,
          "sickLeave": 3, "paidLeave": 4, "unpaidLeave": 0, "overtimeHours": 0 },
        { "empId": "EMP001", "month": "January 2026", "daysWorked": 22,
          "sickLeave": 0, "paidLeave": 1, "unpaidLeave": 0, "overtimeHours": 4 }
    ]))
    .unwrap();

    let payroll = serde_json::from_value(json!([
        { "empId": "EMP001", "month": "December 2025", "monthlyCTC": 95000,
          "totalDeductions": "2000.00", "netPay": "93000.00" },
        { "empId": "EMP002", "month": "January 2026", "monthlyCTC": 85000,
          "totalDeductions": "2000.00", "netPay": "83000.00" },
        { "empId": "EMP001", "month": "January 2026", "monthlyCTC": 95000,
          "totalDeductions": "2000.00", "netPay": "94447.58",
          "overtimePay": "2447.58" }
    ]))
    .unwrap();

    Context::new(employees, attendance, payroll).unwrap()
}
