//! Employee model.
//!
//! An employee is identified by name and owns the punches logged against
//! them, kept in the order they were supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::EmployeeData;
use crate::error::EngineResult;

use super::Punch;

/// An employee with validated punches in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// The employee's name, unique within one payroll input.
    pub name: String,
    /// Punches in the order they were supplied (not necessarily chronological).
    pub punches: Vec<Punch>,
}

impl Employee {
    /// Builds an employee from a raw record, parsing and validating every punch.
    ///
    /// # Errors
    ///
    /// Propagates the first punch error in input order.
    pub fn from_record(record: &EmployeeData) -> EngineResult<Self> {
        let punches = record
            .time_punch
            .iter()
            .enumerate()
            .map(|(index, punch)| Punch::from_record(punch, &record.employee, index))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            name: record.employee.clone(),
            punches,
        })
    }

    /// Returns the punches sorted by start time, each paired with its input index.
    ///
    /// The sort is stable: punches sharing a start time keep their input order.
    ///
    /// # Examples
    ///
    /// ```
    /// use punch_payroll::models::{parse_timestamp, Employee, Punch};
    ///
    /// let punch = |start: &str, end: &str| Punch {
    ///     start: parse_timestamp(start).unwrap(),
    ///     end: parse_timestamp(end).unwrap(),
    ///     job: "Shop - Laborer".to_string(),
    /// };
    /// let employee = Employee {
    ///     name: "Mike".to_string(),
    ///     punches: vec![
    ///         punch("2022-02-02 08:00", "2022-02-02 12:00"),
    ///         punch("2022-02-01 08:00", "2022-02-01 12:00"),
    ///     ],
    /// };
    ///
    /// let order: Vec<usize> = employee
    ///     .chronological_punches()
    ///     .iter()
    ///     .map(|(index, _)| *index)
    ///     .collect();
    /// assert_eq!(order, vec![1, 0]);
    /// ```
    pub fn chronological_punches(&self) -> Vec<(usize, &Punch)> {
        let mut ordered: Vec<(usize, &Punch)> = self.punches.iter().enumerate().collect();
        ordered.sort_by_key(|(_, punch)| punch.start);
        ordered
    }

    /// Returns the total hours across all punches.
    pub fn total_hours(&self) -> Decimal {
        self.punches.iter().map(Punch::hours).sum()
    }
}
