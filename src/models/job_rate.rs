//! Job rate model and the job-rate lookup table.
//!
//! Each job carries an hourly wage rate and a flat per-hour benefits rate.
//! The [`JobRateTable`] is built once per run and never mutated.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Pay and benefit rates for a single job.
///
/// # Example
///
/// ```
/// use punch_payroll::models::JobRate;
/// use rust_decimal::Decimal;
///
/// let json = r#"{"job": "Hospital - Painter", "rate": 31.25, "benefitsRate": 1.0}"#;
/// let job: JobRate = serde_json::from_str(json).unwrap();
/// assert_eq!(job.job, "Hospital - Painter");
/// assert_eq!(job.rate, Decimal::new(3125, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRate {
    /// The unique job name punches refer to.
    pub job: String,
    /// Hourly wage rate before any overtime multiplier.
    pub rate: Decimal,
    /// Benefits accrued per hour worked, never multiplied.
    pub benefits_rate: Decimal,
}

/// Immutable lookup table from job name to [`JobRate`].
#[derive(Debug, Clone, Default)]
pub struct JobRateTable {
    jobs: HashMap<String, JobRate>,
}

impl JobRateTable {
    /// Builds the table from job metadata records.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DuplicateJob`] if two records share a job name.
    pub fn from_jobs(jobs: &[JobRate]) -> EngineResult<Self> {
        let mut table = HashMap::with_capacity(jobs.len());

        for job in jobs {
            if table.insert(job.job.clone(), job.clone()).is_some() {
                return Err(EngineError::DuplicateJob {
                    job: job.job.clone(),
                });
            }
        }

        Ok(Self { jobs: table })
    }

    /// Looks up a job by name.
    pub fn get(&self, job: &str) -> Option<&JobRate> {
        self.jobs.get(job)
    }

    /// Returns the number of jobs in the table.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Returns true if the table holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
