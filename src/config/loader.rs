//! Payroll file loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll input
//! from JSONC or YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::jsonc::strip_json_comments;
use super::types::PayrollInput;

/// Path label used in errors for input that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Loads and provides access to payroll input.
///
/// The file format is chosen by extension: `.yaml` and `.yml` are read as
/// YAML, everything else as JSON with `//` and `/* */` comments.
///
/// # Example
///
/// ```no_run
/// use punch_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./PunchLogicTest.jsonc")?;
/// println!("Loaded {} jobs", loader.input().job_meta.len());
/// # Ok::<(), punch_payroll::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    input: PayrollInput,
}

impl ConfigLoader {
    /// Loads payroll input from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file cannot be read ([`EngineError::ConfigNotFound`])
    /// - The file is not valid JSONC/YAML or lacks a required field
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let is_yaml = path
            .extension()
            .is_some_and(|ext| ext == "yaml" || ext == "yml");

        let input = if is_yaml {
            Self::parse_yaml(&content, &path_str)?
        } else {
            Self::parse_jsonc(&content, &path_str)?
        };

        debug!(
            path = %path_str,
            jobs = input.job_meta.len(),
            employees = input.employee_data.len(),
            punches = input.punch_count(),
            "Payroll input loaded"
        );

        Ok(Self { input })
    }

    /// Parses payroll input from JSONC text held in memory.
    pub fn from_jsonc_str(content: &str) -> EngineResult<Self> {
        Ok(Self {
            input: Self::parse_jsonc(content, INLINE_SOURCE)?,
        })
    }

    /// Parses payroll input from YAML text held in memory.
    pub fn from_yaml_str(content: &str) -> EngineResult<Self> {
        Ok(Self {
            input: Self::parse_yaml(content, INLINE_SOURCE)?,
        })
    }

    fn parse_jsonc(content: &str, path: &str) -> EngineResult<PayrollInput> {
        serde_json::from_str(&strip_json_comments(content)).map_err(|e| {
            EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            }
        })
    }

    fn parse_yaml(content: &str, path: &str) -> EngineResult<PayrollInput> {
        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the loaded payroll input.
    pub fn input(&self) -> &PayrollInput {
        &self.input
    }

    /// Consumes the loader, returning the payroll input.
    pub fn into_input(self) -> PayrollInput {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    const JSONC_INPUT: &str = r#"
    // Rates effective February 2022
    {
        "jobMeta": [
            /* painters get a higher benefits rate */
            { "job": "Hospital - Painter", "rate": 31.25, "benefitsRate": 1.0 },
            { "job": "Shop - Laborer", "rate": 20.0, "benefitsRate": 0.5 } // shop floor
        ],
        "employeeData": [
            {
                "employee": "Mike",
                "timePunch": [
                    { "job": "Shop - Laborer", "start": "2022-02-01 08:00:00", "end": "2022-02-01 16:00:00" }
                ]
            }
        ]
    }
    "#;

    const YAML_INPUT: &str = r#"
# Rates effective February 2022
jobMeta:
  - job: "Hospital - Painter"
    rate: 31.25
    benefitsRate: 1.0
employeeData:
  - employee: Mike
    timePunch:
      - job: "Hospital - Painter"
        start: "2022-02-01 08:00:00"
        end: "2022-02-01 16:00:00"
"#;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("punch-payroll-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_from_jsonc_str_strips_comments() {
        let loader = ConfigLoader::from_jsonc_str(JSONC_INPUT).unwrap();
        let input = loader.input();

        assert_eq!(input.job_meta.len(), 2);
        assert_eq!(input.job_meta[0].rate, Decimal::from_str("31.25").unwrap());
        assert_eq!(input.employee_data[0].employee, "Mike");
        assert_eq!(input.employee_data[0].time_punch[0].job, "Shop - Laborer");
    }

    #[test]
    fn test_from_yaml_str() {
        let input = ConfigLoader::from_yaml_str(YAML_INPUT).unwrap().into_input();

        assert_eq!(input.job_meta[0].job, "Hospital - Painter");
        assert_eq!(input.job_meta[0].benefits_rate, Decimal::ONE);
        assert_eq!(input.employee_data[0].time_punch[0].start, "2022-02-01 08:00:00");
    }

    #[test]
    fn test_load_dispatches_on_extension() {
        let jsonc = write_temp("punches.jsonc", JSONC_INPUT);
        let yaml = write_temp("punches.yaml", YAML_INPUT);

        assert_eq!(ConfigLoader::load(&jsonc).unwrap().input().job_meta.len(), 2);
        assert_eq!(ConfigLoader::load(&yaml).unwrap().input().job_meta.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConfigLoader::load("/nonexistent/PunchLogicTest.jsonc");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert_eq!(path, "/nonexistent/PunchLogicTest.jsonc")
            }
            other => panic!("expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_json_reports_path_and_line() {
        let path = write_temp("broken.jsonc", "{\n  // fine\n  \"jobMeta\": [,]\n}");
        let result = ConfigLoader::load(&path);

        match result {
            Err(EngineError::ConfigParseError { path: p, message }) => {
                assert_eq!(p, path.display().to_string());
                assert!(message.contains("line 3"), "got: {}", message);
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let result = ConfigLoader::from_jsonc_str(r#"{"jobMeta": []}"#);
        match result {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert_eq!(path, "<inline>");
                assert!(message.contains("employeeData"), "got: {}", message);
            }
            other => panic!("expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let result = ConfigLoader::from_yaml_str("jobMeta: [unterminated");
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }
}
