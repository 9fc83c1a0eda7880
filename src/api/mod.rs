//! HTTP API module for the Punch Payroll Engine.
//!
//! This module provides REST endpoints for calculating payroll from a
//! posted payroll input.

mod handlers;
mod response;

pub use handlers::create_router;
pub use response::{ApiError, BreakdownResponse, EmployeeBreakdown};
