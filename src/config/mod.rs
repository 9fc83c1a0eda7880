//! Payroll input loading for the Punch Payroll Engine.
//!
//! This module provides functionality to load job rates and employee punches
//! from JSON-with-comments or YAML files into a [`PayrollInput`].
//!
//! # Example
//!
//! ```no_run
//! use punch_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./PunchLogicTest.jsonc").unwrap();
//! println!("Loaded {} employees", loader.input().employee_data.len());
//! ```

mod jsonc;
mod loader;
mod types;

pub use jsonc::strip_json_comments;
pub use loader::ConfigLoader;
pub use types::{EmployeeData, PayrollInput, TimePunch};
