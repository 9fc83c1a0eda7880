//! Wage tier apportionment.
//!
//! Hours are tiered by where they fall in an employee's cumulative hours for
//! the period:
//!
//! - **Regular:** below 40 cumulative hours, paid at 100%
//! - **Overtime:** from 40 up to 48 cumulative hours, paid at 150%
//! - **Doubletime:** from 48 cumulative hours on, paid at 200%

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Cumulative hours at which overtime starts.
pub const OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Cumulative hours at which doubletime starts.
pub const DOUBLETIME_THRESHOLD: Decimal = Decimal::from_parts(48, 0, 0, false, 0);

/// One of the three wage tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageTier {
    /// Paid at the job rate.
    Regular,
    /// Paid at 1.5 times the job rate.
    Overtime,
    /// Paid at twice the job rate.
    Doubletime,
}

impl WageTier {
    /// Returns the pay multiplier applied to the job rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use punch_payroll::calculation::WageTier;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(WageTier::Regular.multiplier(), Decimal::ONE);
    /// assert_eq!(WageTier::Overtime.multiplier(), Decimal::new(15, 1));
    /// assert_eq!(WageTier::Doubletime.multiplier(), Decimal::TWO);
    /// ```
    pub fn multiplier(self) -> Decimal {
        match self {
            WageTier::Regular => Decimal::ONE,
            WageTier::Overtime => Decimal::from_parts(15, 0, 0, false, 1),
            WageTier::Doubletime => Decimal::TWO,
        }
    }

    /// Returns the tier an hour falls into given the cumulative hours before it.
    pub fn for_cumulative_hours(cumulative_hours: Decimal) -> Self {
        if cumulative_hours < OVERTIME_THRESHOLD {
            WageTier::Regular
        } else if cumulative_hours < DOUBLETIME_THRESHOLD {
            WageTier::Overtime
        } else {
            WageTier::Doubletime
        }
    }
}

/// How one block of hours splits across the three tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierSplit {
    /// Hours paid at the regular rate.
    pub regular: Decimal,
    /// Hours paid at the overtime rate.
    pub overtime: Decimal,
    /// Hours paid at the doubletime rate.
    pub doubletime: Decimal,
}

impl TierSplit {
    /// Returns the hours in the given tier.
    pub fn hours(&self, tier: WageTier) -> Decimal {
        match tier {
            WageTier::Regular => self.regular,
            WageTier::Overtime => self.overtime,
            WageTier::Doubletime => self.doubletime,
        }
    }

    /// Returns the hours across all tiers.
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime + self.doubletime
    }

    /// Returns the wages for this split at the given hourly rate, or `None`
    /// if the amount does not fit in a `Decimal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use punch_payroll::calculation::apportion_hours;
    /// use rust_decimal::Decimal;
    ///
    /// // A single 50 hour punch at $10/h: 40×10 + 8×15 + 2×20
    /// let split = apportion_hours(Decimal::ZERO, Decimal::from(50));
    /// assert_eq!(split.wages(Decimal::from(10)), Some(Decimal::from(560)));
    /// assert_eq!(split.wages(Decimal::MAX), None);
    /// ```
    pub fn wages(&self, rate: Decimal) -> Option<Decimal> {
        [WageTier::Regular, WageTier::Overtime, WageTier::Doubletime]
            .into_iter()
            .try_fold(Decimal::ZERO, |total, tier| {
                let tier_wages = self
                    .hours(tier)
                    .checked_mul(rate)?
                    .checked_mul(tier.multiplier())?;
                total.checked_add(tier_wages)
            })
    }
}

/// Splits a block of `hours` that starts at `cumulative_hours` into tiers.
///
/// The block covers `[cumulative_hours, cumulative_hours + hours)`; each tier
/// receives exactly the part of that interval inside its band, so a block may
/// span several tiers and the parts always sum to `hours`.
///
/// # Examples
///
/// ```
/// use punch_payroll::calculation::apportion_hours;
/// use rust_decimal::Decimal;
///
/// // 38h already worked, a 12h punch crosses both thresholds.
/// let split = apportion_hours(Decimal::from(38), Decimal::from(12));
/// assert_eq!(split.regular, Decimal::from(2));
/// assert_eq!(split.overtime, Decimal::from(8));
/// assert_eq!(split.doubletime, Decimal::from(2));
/// ```
pub fn apportion_hours(cumulative_hours: Decimal, hours: Decimal) -> TierSplit {
    let start = cumulative_hours.max(Decimal::ZERO);
    let end = start + hours.max(Decimal::ZERO);

    TierSplit {
        regular: band_overlap(start, end, Decimal::ZERO, Some(OVERTIME_THRESHOLD)),
        overtime: band_overlap(start, end, OVERTIME_THRESHOLD, Some(DOUBLETIME_THRESHOLD)),
        doubletime: band_overlap(start, end, DOUBLETIME_THRESHOLD, None),
    }
}

/// Length of `[start, end)` inside `[lower, upper)`; an open upper bound is unbounded.
fn band_overlap(start: Decimal, end: Decimal, lower: Decimal, upper: Option<Decimal>) -> Decimal {
    let clipped_end = upper.map_or(end, |upper| end.min(upper));
    (clipped_end - start.max(lower)).max(Decimal::ZERO)
}
