//! Scale factor derivation.
//!
//! The only floating-point step in the calibrator: the exact rational
//! `TOTAL_REWARD / raw_reward` is converted to the nearest `f64`
//! (ties to even), the same result as true division of two unbounded
//! integers.

use std::fmt;

use emission_core::constants::TOTAL_REWARD;
use emission_core::error::CurveError;
use emission_core::horizon::Horizon;
use emission_core::traits::RewardCurve;
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use tracing::debug;

/// Convert `num / den` to the nearest `f64`, ties to even.
///
/// The quotient is rounded once from the exact rational, so subnormal results
/// keep every representable bit.
pub fn ratio_to_f64(num: &BigUint, den: &BigUint) -> Result<f64, CurveError> {
    if den.is_zero() {
        return Err(CurveError::ZeroDenominator);
    }

    let ratio = BigRational::new(BigInt::from(num.clone()), BigInt::from(den.clone()));
    match ratio.to_f64() {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(CurveError::NonFiniteRatio),
    }
}

/// The calibrated multiplier for one horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleFactor {
    pub horizon: Horizon,
    /// Fixed-point raw reward the curve pays over the horizon.
    pub raw_reward: BigUint,
    /// `TOTAL_REWARD / raw_reward`.
    pub factor: f64,
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "factor_{}: {:.9}", self.horizon.label(), self.factor)
    }
}

/// Derive the factor that scales `curve`'s raw reward over `horizon` up to
/// [`TOTAL_REWARD`].
pub fn scale_factor<C>(curve: &C, horizon: Horizon) -> Result<ScaleFactor, CurveError>
where
    C: RewardCurve + ?Sized,
{
    let raw_reward = curve.horizon_reward(horizon)?;
    if raw_reward.is_zero() {
        return Err(CurveError::ZeroRawReward {
            seconds: horizon.seconds(),
        });
    }

    let factor = ratio_to_f64(&BigUint::from(TOTAL_REWARD), &raw_reward)?;
    debug!(%horizon, raw_reward = %raw_reward, factor, "derived scale factor");

    Ok(ScaleFactor {
        horizon,
        raw_reward,
        factor,
    })
}

/// Scale factors for every [`Horizon`], in [`Horizon::ALL`] order.
pub fn calibrate<C>(curve: &C) -> Result<Vec<ScaleFactor>, CurveError>
where
    C: RewardCurve + ?Sized,
{
    Horizon::ALL
        .into_iter()
        .map(|horizon| scale_factor(curve, horizon))
        .collect()
}
