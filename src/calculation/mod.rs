//! Calculation logic for the Punch Payroll Engine.
//!
//! This module contains the wage tier apportionment, the per-employee
//! chronological fold over punches, and the payroll run that ties them
//! together across every employee in an input.

mod employee_payroll;
mod payroll;
mod tiers;

pub use employee_payroll::{
    EmployeePayroll, PayrollTotals, PunchAllocation, calculate_employee_payroll,
};
pub use payroll::{calculate_payroll, calculate_payroll_breakdown};
pub use tiers::{
    DOUBLETIME_THRESHOLD, OVERTIME_THRESHOLD, TierSplit, WageTier, apportion_hours,
};
