//! Punch Payroll Engine
//!
//! This crate computes payroll totals from employee time punches, applying
//! tiered overtime (regular, overtime, doubletime) by cumulative hours worked
//! and per-job pay and benefit rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
