//! Error types for the Punch Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading punch data and
//! calculating payroll.

use thiserror::Error;

/// The main error type for the Punch Payroll Engine.
///
/// Every failure is fatal for the run: the calculation fails closed and no
/// partial report is produced.
///
/// # Example
///
/// ```
/// use punch_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/PunchLogicTest.jsonc".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Configuration file not found: /missing/PunchLogicTest.jsonc"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A punch timestamp is not a recognised date-time.
    #[error("Invalid timestamp '{value}': {message}")]
    InvalidTimestamp {
        /// The raw timestamp string.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A punch references a job that is not in the job-rate table.
    #[error("Job '{job}' not found (employee '{employee}', punch #{punch_index})")]
    JobNotFound {
        /// The job name that could not be resolved.
        job: String,
        /// The employee owning the punch.
        employee: String,
        /// Zero-based position of the punch in the employee's input list.
        punch_index: usize,
    },

    /// A punch is structurally valid but not meaningful (e.g. ends before it starts).
    #[error("Invalid punch #{punch_index} for employee '{employee}': {message}")]
    InvalidPunch {
        /// The employee owning the punch.
        employee: String,
        /// Zero-based position of the punch in the employee's input list.
        punch_index: usize,
        /// A description of what made the punch invalid.
        message: String,
    },

    /// A wage or benefit amount is too large to represent.
    #[error("Amount overflow at punch #{punch_index} for employee '{employee}'")]
    AmountOverflow {
        /// The employee whose totals overflowed.
        employee: String,
        /// Zero-based position of the punch in the employee's input list.
        punch_index: usize,
    },

    /// The job-rate table defines the same job name twice.
    #[error("Duplicate job in rate table: {job}")]
    DuplicateJob {
        /// The repeated job name.
        job: String,
    },

    /// The input lists the same employee name twice.
    #[error("Duplicate employee: {employee}")]
    DuplicateEmployee {
        /// The repeated employee name.
        employee: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.jsonc".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.jsonc"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.jsonc".to_string(),
            message: "expected value at line 3 column 5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.jsonc': expected value at line 3 column 5"
        );
    }

    #[test]
    fn test_invalid_timestamp_displays_value_and_message() {
        let error = EngineError::InvalidTimestamp {
            value: "yesterday".to_string(),
            message: "unrecognised date-time format".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid timestamp 'yesterday': unrecognised date-time format"
        );
    }

    #[test]
    fn test_amount_overflow_identifies_employee_and_punch() {
        let error = EngineError::AmountOverflow {
            employee: "Mike".to_string(),
            punch_index: 4,
        };
        assert_eq!(
            error.to_string(),
            "Amount overflow at punch #4 for employee 'Mike'"
        );
    }

    #[test]
    fn test_job_not_found_identifies_job_and_punch() {
        let error = EngineError::JobNotFound {
            job: "Welder".to_string(),
            employee: "Mike".to_string(),
            punch_index: 3,
        };
        assert_eq!(
            error.to_string(),
            "Job 'Welder' not found (employee 'Mike', punch #3)"
        );
    }

    #[test]
    fn test_invalid_punch_displays_employee_and_message() {
        let error = EngineError::InvalidPunch {
            employee: "Alex".to_string(),
            punch_index: 0,
            message: "end must be after start".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid punch #0 for employee 'Alex': end must be after start"
        );
    }

    #[test]
    fn test_duplicate_errors_display_name() {
        let job = EngineError::DuplicateJob {
            job: "Hospital - Painter".to_string(),
        };
        assert_eq!(job.to_string(), "Duplicate job in rate table: Hospital - Painter");

        let employee = EngineError::DuplicateEmployee {
            employee: "Mike".to_string(),
        };
        assert_eq!(employee.to_string(), "Duplicate employee: Mike");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_job_not_found() -> EngineResult<()> {
            Err(EngineError::JobNotFound {
                job: "Unknown".to_string(),
                employee: "Mike".to_string(),
                punch_index: 0,
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_job_not_found()?;
            Ok(())
        }

        assert!(matches!(
            propagates_error(),
            Err(EngineError::JobNotFound { .. })
        ));
    }
}
