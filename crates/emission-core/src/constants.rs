//! Calibration constants. All fixed-point values use [`SCALE`] (10^18) as the unit.

/// Fixed-point unit: 1.0 is represented as `10^18`.
pub const SCALE: u128 = 1_000_000_000_000_000_000;

/// Target total reward over a horizon, in fixed-point units (50M tokens).
pub const TOTAL_REWARD: u128 = 50_000_000 * SCALE;

/// Per-second decay constant λ, in fixed-point units.
///
/// `λ = 2×10^10 / 10^18 = 2×10^-8` per second, so one year of elapsed time
/// yields an exponent of roughly 0.63.
pub const LAMBDA_DECAY: u128 = 20_000_000_000;

/// Number of Taylor terms (indices `0..DEFAULT_TAYLOR_TERMS`) used by the contract.
pub const DEFAULT_TAYLOR_TERMS: u32 = 20;

pub const SECS_PER_HOUR: u64 = 3_600;
pub const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;
pub const SECS_PER_YEAR: u64 = 365 * SECS_PER_DAY;

/// Long emission horizon: three 365-day years.
pub const THREE_YEARS_SECS: u64 = 3 * SECS_PER_YEAR;

/// Short emission horizon: four hours.
pub const FOUR_HOURS_SECS: u64 = 4 * SECS_PER_HOUR;
