//! Emission horizons the calibrator derives scale factors for.

use std::fmt;

use crate::constants::{FOUR_HOURS_SECS, THREE_YEARS_SECS};

/// A fixed time span over which [`TOTAL_REWARD`](crate::constants::TOTAL_REWARD)
/// should be paid out.
///
/// # Examples
///
/// ```
/// use emission_core::Horizon;
/// assert_eq!(Horizon::FourHours.seconds(), 14_400);
/// assert_eq!(Horizon::ThreeYears.label(), "3_years");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Horizon {
    /// Three 365-day years.
    ThreeYears,
    /// Four hours.
    FourHours,
}

impl Horizon {
    /// Every horizon, in the order the driver reports them.
    pub const ALL: [Horizon; 2] = [Horizon::ThreeYears, Horizon::FourHours];

    /// Length of the horizon in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::ThreeYears => THREE_YEARS_SECS,
            Self::FourHours => FOUR_HOURS_SECS,
        }
    }

    /// Suffix used in the `factor_<label>` output key.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeYears => "3_years",
            Self::FourHours => "4_hours",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
