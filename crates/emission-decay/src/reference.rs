//! Floating-point reference for the fixed-point curve.
//!
//! Used only to measure how far the truncated integer series drifts from
//! the true exponential; never feeds back into the calibrated values.

use emission_core::constants::{LAMBDA_DECAY, SCALE};
use emission_core::error::CurveError;
use num_bigint::BigUint;

use crate::ratio::ratio_to_f64;

/// `1 - exp(-λ * time_passed)` evaluated in `f64`.
pub fn reference_raw_reward(time_passed: u64) -> f64 {
    let z = time_passed as f64 * (LAMBDA_DECAY as f64 / SCALE as f64);
    -(-z).exp_m1()
}

/// Relative difference between a raw reward in `scale` fixed-point units and
/// the reference value for the same elapsed time.
///
/// Returns the absolute difference when the reference is zero.
pub fn relative_drift(
    raw_reward: &BigUint,
    scale: &BigUint,
    time_passed: u64,
) -> Result<f64, CurveError> {
    let observed = ratio_to_f64(raw_reward, scale)?;
    let expected = reference_raw_reward(time_passed);
    let diff = (observed - expected).abs();
    if expected == 0.0 {
        return Ok(diff);
    }
    Ok(diff / expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::calc_raw_reward;
    use emission_core::constants::{FOUR_HOURS_SECS, THREE_YEARS_SECS};
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-6;

    fn drift(t: u64) -> f64 {
        relative_drift(&calc_raw_reward(t).unwrap(), &BigUint::from(SCALE), t).unwrap()
    }

    #[test]
    fn reference_at_zero() {
        assert_eq!(reference_raw_reward(0), 0.0);
        assert_eq!(drift(0), 0.0);
    }

    #[test]
    fn reference_one_year() {
        // 1 - e^-0.63072
        let r = reference_raw_reward(31_536_000);
        assert!((r - 0.467_791_527_075_158_5).abs() < 1e-12);
    }

    #[test]
    fn horizons_track_reference() {
        assert!(drift(FOUR_HOURS_SECS) < TOLERANCE);
        assert!(drift(THREE_YEARS_SECS) < TOLERANCE);
    }

    #[test]
    fn zero_scale_is_an_error() {
        assert_eq!(
            relative_drift(&BigUint::from(1u8), &BigUint::from(0u8), 1),
            Err(CurveError::ZeroDenominator)
        );
    }

    #[test]
    fn single_second_tracks_reference() {
        assert!(drift(1) < TOLERANCE);
    }

    proptest! {
        #[test]
        fn moderate_exponents_track_reference(t in 1u64..(2 * THREE_YEARS_SECS)) {
            let d = drift(t);
            prop_assert!(d < TOLERANCE, "drift {} at t={}", d, t);
        }
    }
}
