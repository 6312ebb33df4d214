//! Core data models for the HR assistant.
//!
//! This module contains the record types callers supply with each chat
//! request and the validated [`Context`] that bundles them.

mod attendance;
mod context;
mod employee;
mod payroll;

pub use attendance::AttendanceRecord;
pub use context::Context;
pub use employee::Employee;
pub use payroll::PayrollRecord;
