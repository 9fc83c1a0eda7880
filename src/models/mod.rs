//! Core data models for the Punch Payroll Engine.
//!
//! This module contains the domain models used throughout the engine: job
//! rates, punches, employees and the payroll report.

mod employee;
mod job_rate;
mod payroll_result;
mod punch;

pub use employee::Employee;
pub use job_rate::{JobRate, JobRateTable};
pub use payroll_result::{OUTPUT_DECIMAL_PLACES, PayrollReport, PayrollResult, round_output};
pub use punch::{Punch, parse_timestamp};
