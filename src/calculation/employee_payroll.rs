//! Per-employee payroll calculation.
//!
//! Punches are replayed in chronological order against a running total of
//! hours worked. Each punch accrues benefits at its job's flat benefits rate
//! and has its hours apportioned across the wage tiers according to where
//! they fall in that running total.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, JobRate, JobRateTable, PayrollResult, Punch};

use super::tiers::{TierSplit, WageTier, apportion_hours};

/// How a single punch contributed to an employee's totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunchAllocation {
    /// Position of the punch in the employee's input list.
    pub punch_index: usize,
    /// When the punch started.
    pub start: NaiveDateTime,
    /// When the punch ended.
    pub end: NaiveDateTime,
    /// The job the punch was logged against.
    pub job: String,
    /// Cumulative hours worked before this punch.
    pub cumulative_hours_before: Decimal,
    /// Tier the first hour of the punch landed in.
    pub starting_tier: WageTier,
    /// The punch duration in hours.
    pub hours: Decimal,
    /// How the punch's hours split across tiers.
    pub split: TierSplit,
    /// Wages earned by the punch, multipliers applied.
    pub wages: Decimal,
    /// Benefits accrued by the punch.
    pub benefits: Decimal,
}

/// Unrounded running totals for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollTotals {
    /// Regular hours worked.
    pub regular: Decimal,
    /// Overtime hours worked.
    pub overtime: Decimal,
    /// Doubletime hours worked.
    pub doubletime: Decimal,
    /// Wages earned.
    pub wage_total: Decimal,
    /// Benefits accrued.
    pub benefit_total: Decimal,
}

impl PayrollTotals {
    /// Folds one punch allocation into the totals, or returns `None` if any
    /// total would overflow. `self` is left untouched on overflow.
    fn add(&mut self, allocation: &PunchAllocation) -> Option<()> {
        *self = Self {
            regular: self.regular.checked_add(allocation.split.regular)?,
            overtime: self.overtime.checked_add(allocation.split.overtime)?,
            doubletime: self.doubletime.checked_add(allocation.split.doubletime)?,
            wage_total: self.wage_total.checked_add(allocation.wages)?,
            benefit_total: self.benefit_total.checked_add(allocation.benefits)?,
        };
        Some(())
    }

    /// Returns the hours across all tiers.
    pub fn total_hours(&self) -> Decimal {
        self.regular + self.overtime + self.doubletime
    }
}

/// Full payroll outcome for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayroll {
    /// The employee's name.
    pub employee: String,
    /// Unrounded totals.
    pub totals: PayrollTotals,
    /// Per-punch allocations in chronological order.
    pub allocations: Vec<PunchAllocation>,
}

impl EmployeePayroll {
    /// Produces the rounded result reported for this employee.
    pub fn to_result(&self) -> PayrollResult {
        PayrollResult::new(
            self.employee.clone(),
            self.totals.regular,
            self.totals.overtime,
            self.totals.doubletime,
            self.totals.wage_total,
            self.totals.benefit_total,
        )
    }
}

/// Calculates payroll for one employee.
///
/// Every punch's job is resolved before anything is tiered, so a missing job
/// fails the calculation regardless of where the punch sits in time. Punches
/// are then processed in chronological order (stable on equal start times)
/// against a running hours total that starts at zero for each employee.
///
/// # Errors
///
/// - [`EngineError::JobNotFound`] if any punch references a job absent
///   from `rates`
/// - [`EngineError::AmountOverflow`] if a wage or benefit amount is too large
///   to represent
///
/// # Examples
///
/// ```
/// use punch_payroll::calculation::calculate_employee_payroll;
/// use punch_payroll::models::{Employee, JobRate, JobRateTable, Punch, parse_timestamp};
/// use rust_decimal::Decimal;
///
/// let rates = JobRateTable::from_jobs(&[JobRate {
///     job: "Shop - Laborer".to_string(),
///     rate: Decimal::from(10),
///     benefits_rate: Decimal::from(2),
/// }])
/// .unwrap();
/// let employee = Employee {
///     name: "Mike".to_string(),
///     punches: vec![Punch {
///         start: parse_timestamp("2022-02-01 00:00").unwrap(),
///         end: parse_timestamp("2022-02-03 02:00").unwrap(), // 50 hours
///         job: "Shop - Laborer".to_string(),
///     }],
/// };
///
/// let result = calculate_employee_payroll(&employee, &rates).unwrap().to_result();
/// assert_eq!(result.regular.to_string(), "40.0000");
/// assert_eq!(result.overtime.to_string(), "8.0000");
/// assert_eq!(result.doubletime.to_string(), "2.0000");
/// assert_eq!(result.wage_total.to_string(), "560.0000");
/// assert_eq!(result.benefit_total.to_string(), "100.0000");
/// ```
pub fn calculate_employee_payroll(
    employee: &Employee,
    rates: &JobRateTable,
) -> EngineResult<EmployeePayroll> {
    let job_rates = employee
        .punches
        .iter()
        .enumerate()
        .map(|(index, punch)| resolve_job(rates, employee, index, punch))
        .collect::<EngineResult<Vec<&JobRate>>>()?;

    let mut cumulative_hours = Decimal::ZERO;
    let mut totals = PayrollTotals::default();
    let mut allocations = Vec::with_capacity(employee.punches.len());

    for (index, punch) in employee.chronological_punches() {
        let job_rate = job_rates[index];
        let hours = punch.hours();
        let split = apportion_hours(cumulative_hours, hours);
        let overflow = || EngineError::AmountOverflow {
            employee: employee.name.clone(),
            punch_index: index,
        };

        let allocation = PunchAllocation {
            punch_index: index,
            start: punch.start,
            end: punch.end,
            job: punch.job.clone(),
            cumulative_hours_before: cumulative_hours,
            starting_tier: WageTier::for_cumulative_hours(cumulative_hours),
            hours,
            split,
            wages: split.wages(job_rate.rate).ok_or_else(overflow)?,
            benefits: hours
                .checked_mul(job_rate.benefits_rate)
                .ok_or_else(overflow)?,
        };

        debug!(
            employee = %employee.name,
            punch_index = index,
            job = %allocation.job,
            hours = %hours,
            cumulative_hours = %cumulative_hours,
            starting_tier = ?allocation.starting_tier,
            regular = %split.regular,
            overtime = %split.overtime,
            doubletime = %split.doubletime,
            "Punch apportioned"
        );

        totals.add(&allocation).ok_or_else(overflow)?;
        cumulative_hours = cumulative_hours.checked_add(hours).ok_or_else(overflow)?;
        allocations.push(allocation);
    }

    Ok(EmployeePayroll {
        employee: employee.name.clone(),
        totals,
        allocations,
    })
}

fn resolve_job<'a>(
    rates: &'a JobRateTable,
    employee: &Employee,
    punch_index: usize,
    punch: &Punch,
) -> EngineResult<&'a JobRate> {
    rates.get(&punch.job).ok_or_else(|| EngineError::JobNotFound {
        job: punch.job.clone(),
        employee: employee.name.clone(),
        punch_index,
    })
}
