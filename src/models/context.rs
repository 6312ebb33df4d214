//! The per-request record snapshot.
//!
//! This module contains the [`Context`] type: the three record sequences the
//! caller supplies with every chat request. A `Context` can only be built
//! through [`Context::new`], which validates every record, so lookups never
//! see a malformed record.

use crate::error::AssistantResult;

use super::{AttendanceRecord, Employee, PayrollRecord};

/// Employees, attendance and payroll records for one chat request.
///
/// Sequence order is significant: lookups that fall back to "the most
/// recent" record take the last matching element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    employees: Vec<Employee>,
    attendance: Vec<AttendanceRecord>,
    payroll: Vec<PayrollRecord>,
}

impl Context {
    /// Creates a validated context.
    ///
    /// # Returns
    ///
    /// Returns the context, or `InvalidRecord` naming the first record that
    /// breaks its invariants.
    pub fn new(
        employees: Vec<Employee>,
        attendance: Vec<AttendanceRecord>,
        payroll: Vec<PayrollRecord>,
    ) -> AssistantResult<Self> {
        for (index, employee) in employees.iter().enumerate() {
            employee.validate(index)?;
        }
        for (index, record) in attendance.iter().enumerate() {
            record.validate(index)?;
        }
        for (index, record) in payroll.iter().enumerate() {
            record.validate(index)?;
        }

        Ok(Self {
            employees,
            attendance,
            payroll,
        })
    }

    /// Returns the employees in caller order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Returns the attendance records in caller order.
    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.attendance
    }

    /// Returns the payroll records in caller order.
    pub fn payroll(&self) -> &[PayrollRecord] {
        &self.payroll
    }

    /// Finds the first employee with the given identifier.
    pub fn find_employee(&self, emp_id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.emp_id == emp_id)
    }

    /// Returns true if the context holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.attendance.is_empty() && self.payroll.is_empty()
    }
}
