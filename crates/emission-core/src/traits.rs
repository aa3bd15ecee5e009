//! Trait interfaces for the emission calibrator.
//!
//! - [`RewardCurve`]: cumulative-reward curve evaluation (emission-decay implements)

use num_bigint::BigUint;

use crate::error::CurveError;
use crate::horizon::Horizon;

/// Pure computation of the cumulative reward fraction paid after some elapsed time.
///
/// Implementations must be deterministic: the same input always produces the
/// same fixed-point output, bit for bit.
pub trait RewardCurve {
    /// Fixed-point unit the curve's outputs are expressed in.
    fn scale(&self) -> BigUint;

    /// Fraction of the total reward released after `time_passed` seconds,
    /// as a fixed-point integer in `[0, scale)`.
    fn raw_reward(&self, time_passed: u64) -> Result<BigUint, CurveError>;

    /// Raw reward over a whole [`Horizon`].
    ///
    /// Default implementation delegates to [`raw_reward`](Self::raw_reward).
    fn horizon_reward(&self, horizon: Horizon) -> Result<BigUint, CurveError> {
        self.raw_reward(horizon.seconds())
    }
}
