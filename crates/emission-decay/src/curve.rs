//! Reward curve implementing the [`RewardCurve`] trait.
//!
//! The cumulative reward fraction after `t` seconds is `1 - exp(-λt)`,
//! evaluated in fixed point as `SCALE - floor(SCALE² / exp_taylor(λt))`.
//! All arithmetic is integer-only with [`BigUint`] intermediates.

use emission_core::constants::{DEFAULT_TAYLOR_TERMS, LAMBDA_DECAY, SCALE};
use emission_core::error::CurveError;
use emission_core::traits::RewardCurve;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::debug;

use crate::taylor::exp_taylor_scaled;

/// Parameters of the fixed-point decay curve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveParams {
    /// Fixed-point unit.
    pub scale: BigUint,
    /// Per-second decay constant, in `scale` units.
    pub lambda: BigUint,
    /// Number of Taylor terms, including the constant term.
    pub terms: u32,
}

impl Default for CurveParams {
    fn default() -> Self {
        Self {
            scale: BigUint::from(SCALE),
            lambda: BigUint::from(LAMBDA_DECAY),
            terms: DEFAULT_TAYLOR_TERMS,
        }
    }
}

/// The production reward curve, backed by the truncated Taylor series.
#[derive(Debug, Clone, Default)]
pub struct TaylorCurve {
    params: CurveParams,
}

impl TaylorCurve {
    /// Create a curve with the contract's parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a curve with custom parameters.
    pub fn with_params(params: CurveParams) -> Self {
        Self { params }
    }

    /// Parameters the curve evaluates with.
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// The unscaled series argument `time_passed * λ`.
    pub fn exponent(&self, time_passed: u64) -> BigUint {
        BigUint::from(time_passed) * &self.params.lambda
    }

    /// Fixed-point `exp(λ * time_passed)`.
    pub fn exp_value(&self, time_passed: u64) -> BigUint {
        exp_taylor_scaled(
            &self.exponent(time_passed),
            self.params.terms,
            &self.params.scale,
        )
    }
}

impl RewardCurve for TaylorCurve {
    fn scale(&self) -> BigUint {
        self.params.scale.clone()
    }

    fn raw_reward(&self, time_passed: u64) -> Result<BigUint, CurveError> {
        let scale = &self.params.scale;
        let exp_val = self.exp_value(time_passed);
        if exp_val.is_zero() {
            return Err(CurveError::ZeroExponential);
        }

        // exp(-x) in fixed point. exp_val >= scale, so this never exceeds scale.
        let scaled_exp_val = scale * scale / &exp_val;
        let raw = scale - &scaled_exp_val;

        debug!(
            time_passed,
            exp_val = %exp_val,
            raw_reward = %raw,
            "evaluated reward curve"
        );
        Ok(raw)
    }
}

/// Fixed-point `1 - exp(-λ * time_passed)` with the contract's parameters.
///
/// # Examples
///
/// ```
/// use emission_decay::calc_raw_reward;
/// use num_bigint::BigUint;
///
/// assert_eq!(calc_raw_reward(0).unwrap(), BigUint::from(0u8));
/// assert_eq!(
///     calc_raw_reward(14_400).unwrap(),
///     BigUint::from(287_958_531_981_025u64)
/// );
/// ```
pub fn calc_raw_reward(time_passed: u64) -> Result<BigUint, CurveError> {
    TaylorCurve::new().raw_reward(time_passed)
}
