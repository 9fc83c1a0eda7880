//! Raw payroll input types.
//!
//! These structures mirror the payroll file layout (`jobMeta`,
//! `employeeData`, `timePunch`) and are deserialized from JSONC or YAML.
//! Timestamps stay as strings here; they are parsed when the input is
//! converted into domain models.

use serde::{Deserialize, Serialize};

use crate::models::JobRate;

/// A single punch as it appears in the payroll file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePunch {
    /// Start timestamp, e.g. `"2022-02-18 09:00:00"`.
    pub start: String,
    /// End timestamp in the same format as `start`.
    pub end: String,
    /// Name of the job this time is logged against.
    pub job: String,
}

/// An employee's punches as they appear in the payroll file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeData {
    /// The employee's name.
    pub employee: String,
    /// Punches in file order.
    #[serde(default)]
    pub time_punch: Vec<TimePunch>,
}

/// The complete payroll input: job rates plus every employee's punches.
///
/// # Example
///
/// ```
/// use punch_payroll::config::PayrollInput;
///
/// let json = r#"{
///     "jobMeta": [{"job": "Shop - Laborer", "rate": 20.0, "benefitsRate": 0.5}],
///     "employeeData": [{
///         "employee": "Alex",
///         "timePunch": [{"start": "2022-02-18 09:00", "end": "2022-02-18 17:00", "job": "Shop - Laborer"}]
///     }]
/// }"#;
/// let input: PayrollInput = serde_json::from_str(json).unwrap();
/// assert_eq!(input.job_meta.len(), 1);
/// assert_eq!(input.employee_data[0].time_punch.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollInput {
    /// Pay and benefit rates per job.
    pub job_meta: Vec<JobRate>,
    /// Employees and their punches.
    pub employee_data: Vec<EmployeeData>,
}

impl PayrollInput {
    /// Returns the total number of punches across all employees.
    pub fn punch_count(&self) -> usize {
        self.employee_data
            .iter()
            .map(|employee| employee.time_punch.len())
            .sum()
    }
}
