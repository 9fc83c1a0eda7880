//! Payroll run over every employee in an input.

use std::collections::HashSet;
use std::time::Instant;

use tracing::info;

use crate::config::PayrollInput;
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, JobRateTable, PayrollReport};

use super::employee_payroll::{EmployeePayroll, calculate_employee_payroll};

/// Calculates payroll for every employee, keeping per-punch allocations.
///
/// The job-rate table is built once, then each employee is calculated
/// independently. The first error aborts the whole run.
///
/// # Errors
///
/// - [`EngineError::DuplicateJob`] if a job name repeats in `jobMeta`
/// - [`EngineError::DuplicateEmployee`] if an employee name repeats
/// - any punch parse, validation or job lookup error
pub fn calculate_payroll_breakdown(input: &PayrollInput) -> EngineResult<Vec<EmployeePayroll>> {
    let start_time = Instant::now();
    let rates = JobRateTable::from_jobs(&input.job_meta)?;

    let mut seen = HashSet::with_capacity(input.employee_data.len());
    let mut payrolls = Vec::with_capacity(input.employee_data.len());

    for record in &input.employee_data {
        if !seen.insert(record.employee.as_str()) {
            return Err(EngineError::DuplicateEmployee {
                employee: record.employee.clone(),
            });
        }

        let employee = Employee::from_record(record)?;
        payrolls.push(calculate_employee_payroll(&employee, &rates)?);
    }

    info!(
        jobs = rates.len(),
        employees = payrolls.len(),
        punches = input.punch_count(),
        duration_us = start_time.elapsed().as_micros(),
        "Payroll calculated"
    );

    Ok(payrolls)
}

/// Calculates the payroll report: rounded totals per employee, in input order.
///
/// # Examples
///
/// ```
/// use punch_payroll::calculation::calculate_payroll;
/// use punch_payroll::config::ConfigLoader;
///
/// let input = ConfigLoader::from_jsonc_str(r#"{
///     // one job, one employee
///     "jobMeta": [{"job": "Shop - Laborer", "rate": 20.0, "benefitsRate": 0.5}],
///     "employeeData": [{
///         "employee": "Alex",
///         "timePunch": [{"start": "2022-02-18 09:00", "end": "2022-02-18 17:00", "job": "Shop - Laborer"}]
///     }]
/// }"#)
/// .unwrap()
/// .into_input();
///
/// let report = calculate_payroll(&input).unwrap();
/// let alex = report.get("Alex").unwrap();
/// assert_eq!(alex.wage_total.to_string(), "160.0000");
/// assert_eq!(alex.benefit_total.to_string(), "4.0000");
/// ```
pub fn calculate_payroll(input: &PayrollInput) -> EngineResult<PayrollReport> {
    Ok(calculate_payroll_breakdown(input)?
        .iter()
        .map(EmployeePayroll::to_result)
        .collect())
}
