//! Payroll result models for the Punch Payroll Engine.
//!
//! This module contains the [`PayrollResult`] produced for each employee and
//! the [`PayrollReport`] that maps employee names to their results. Every
//! numeric field is rounded to [`OUTPUT_DECIMAL_PLACES`] fractional digits
//! and serialized as a fixed-width decimal string, e.g. `"560.0000"`.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of fractional digits carried by every reported figure.
pub const OUTPUT_DECIMAL_PLACES: u32 = 4;

/// Rounds a figure for output: half away from zero, then padded to exactly
/// [`OUTPUT_DECIMAL_PLACES`] digits.
///
/// # Example
///
/// ```
/// use punch_payroll::models::round_output;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_output(Decimal::from(560)).to_string(), "560.0000");
/// assert_eq!(round_output(Decimal::from_str("16.58333").unwrap()).to_string(), "16.5833");
/// assert_eq!(round_output(Decimal::from_str("0.00005").unwrap()).to_string(), "0.0001");
/// ```
pub fn round_output(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(OUTPUT_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(OUTPUT_DECIMAL_PLACES);
    rounded
}

/// Aggregated payroll figures for one employee.
///
/// Field names serialize in camelCase (`wageTotal`, `benefitTotal`) to match
/// the report format consumed downstream.
///
/// # Example
///
/// ```
/// use punch_payroll::models::PayrollResult;
/// use rust_decimal::Decimal;
///
/// let result = PayrollResult::new(
///     "Mike",
///     Decimal::from(40),
///     Decimal::from(8),
///     Decimal::from(2),
///     Decimal::from(560),
///     Decimal::from(100),
/// );
/// let json = serde_json::to_value(&result).unwrap();
/// assert_eq!(json["wageTotal"], "560.0000");
/// assert_eq!(json["doubletime"], "2.0000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollResult {
    /// The employee these figures belong to.
    pub employee: String,
    /// Hours worked below the overtime threshold.
    #[serde(with = "rust_decimal::serde::str")]
    pub regular: Decimal,
    /// Hours worked in the overtime band.
    #[serde(with = "rust_decimal::serde::str")]
    pub overtime: Decimal,
    /// Hours worked past the doubletime threshold.
    #[serde(with = "rust_decimal::serde::str")]
    pub doubletime: Decimal,
    /// Total wages including overtime multipliers.
    #[serde(with = "rust_decimal::serde::str")]
    pub wage_total: Decimal,
    /// Total benefits accrued.
    #[serde(with = "rust_decimal::serde::str")]
    pub benefit_total: Decimal,
}

impl PayrollResult {
    /// Creates a result, rounding every figure with [`round_output`].
    pub fn new(
        employee: impl Into<String>,
        regular: Decimal,
        overtime: Decimal,
        doubletime: Decimal,
        wage_total: Decimal,
        benefit_total: Decimal,
    ) -> Self {
        Self {
            employee: employee.into(),
            regular: round_output(regular),
            overtime: round_output(overtime),
            doubletime: round_output(doubletime),
            wage_total: round_output(wage_total),
            benefit_total: round_output(benefit_total),
        }
    }

    /// Returns the total hours across all three tiers.
    pub fn total_hours(&self) -> Decimal {
        self.regular + self.overtime + self.doubletime
    }
}

/// Payroll results for every employee in a run, keyed by employee name.
///
/// Results keep the order employees appeared in the input, and serialize as
/// a JSON object in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayrollReport {
    results: Vec<PayrollResult>,
}

impl PayrollReport {
    /// Creates a report from results in input order.
    pub fn new(results: Vec<PayrollResult>) -> Self {
        Self { results }
    }

    /// Looks up the result for an employee by name.
    pub fn get(&self, employee: &str) -> Option<&PayrollResult> {
        self.results.iter().find(|result| result.employee == employee)
    }

    /// Returns all results in input order.
    pub fn results(&self) -> &[PayrollResult] {
        &self.results
    }

    /// Returns an iterator over the results in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, PayrollResult> {
        self.results.iter()
    }

    /// Returns the number of employees in the report.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the report holds no employees.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Renders the report as two-space indented JSON.
    ///
    /// # Example
    ///
    /// ```
    /// use punch_payroll::models::{PayrollReport, PayrollResult};
    /// use rust_decimal::Decimal;
    ///
    /// let report = PayrollReport::new(vec![PayrollResult::new(
    ///     "Alex",
    ///     Decimal::from(8),
    ///     Decimal::ZERO,
    ///     Decimal::ZERO,
    ///     Decimal::from(160),
    ///     Decimal::from(4),
    /// )]);
    /// let text = report.to_pretty_json().unwrap();
    /// assert!(text.starts_with("{\n  \"Alex\": {\n    \"employee\": \"Alex\","));
    /// ```
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl FromIterator<PayrollResult> for PayrollReport {
    fn from_iter<I: IntoIterator<Item = PayrollResult>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PayrollReport {
    type Item = &'a PayrollResult;
    type IntoIter = std::slice::Iter<'a, PayrollResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl Serialize for PayrollReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.results.iter().map(|result| (&result.employee, result)))
    }
}

impl<'de> Deserialize<'de> for PayrollReport {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = PayrollReport;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of employee name to payroll result")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut results = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((_, result)) = map.next_entry::<String, PayrollResult>()? {
                    results.push(result);
                }
                Ok(PayrollReport::new(results))
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}
