//! Fixed-point Taylor expansion of `exp(x)`.
//!
//! Mirrors the integer-only evaluation performed on-chain: every product is
//! divided back down to the fixed-point unit and every step truncates
//! (floor division), with no remainder carried between terms. Intermediates
//! are unbounded [`BigUint`]s, so long horizons cannot overflow.

use emission_core::constants::SCALE;
use num_bigint::BigUint;
use num_traits::Zero;
use tracing::trace;

/// Compute `exp(x / SCALE) * SCALE` with a `terms`-term Taylor series
/// (indices `0..terms`), using [`SCALE`] as the fixed-point unit.
///
/// Returns at least `SCALE` for every `x`, and exactly `SCALE` for `x = 0`
/// or `terms <= 1`.
///
/// # Examples
///
/// ```
/// use emission_decay::taylor::exp_taylor;
/// use num_bigint::BigUint;
///
/// // e ≈ 2.718281828459045235; truncation loses the last few units.
/// let e = exp_taylor(&BigUint::from(1_000_000_000_000_000_000u64), 20);
/// assert_eq!(e, BigUint::from(2_718_281_828_459_045_226u64));
/// ```
pub fn exp_taylor(x: &BigUint, terms: u32) -> BigUint {
    exp_taylor_scaled(x, terms, &BigUint::from(SCALE))
}

/// [`exp_taylor`] with an explicit fixed-point unit.
///
/// Each iteration `i` applies `term = floor(floor(term * x / scale) / i)`
/// and adds the result to the running sum, which starts at `scale`.
pub fn exp_taylor_scaled(x: &BigUint, terms: u32, scale: &BigUint) -> BigUint {
    let mut sum = scale.clone();
    if scale.is_zero() {
        return sum;
    }

    let mut term = scale.clone();
    let mut nonzero_terms = 1u32;
    for i in 1..terms {
        term = &term * x / scale;
        term /= i;
        if term.is_zero() {
            // Every later term is zero as well.
            break;
        }
        sum += &term;
        nonzero_terms += 1;
    }

    trace!(terms, nonzero_terms, "evaluated exp series");
    sum
}
