//! # emission-decay — Fixed-point reward decay curve.
//!
//! All curve calculations use integer arithmetic only, mirroring the
//! contract that pays out the reward.
//!
//! - **Taylor series**: `exp(x)` as a truncated 20-term expansion with floor
//!   division at every step, over unbounded [`num_bigint::BigUint`] values.
//! - **Reward curve**: the released fraction `1 - exp(-λt)` in fixed point.
//! - **Scale factors**: `TOTAL_REWARD / raw_reward` per horizon, rounded once
//!   to the nearest `f64`.
//! - **Reference**: an `f64` evaluation of the true curve for drift checks.

pub mod curve;
pub mod ratio;
pub mod reference;
pub mod taylor;

pub use curve::{calc_raw_reward, CurveParams, TaylorCurve};
pub use ratio::{calibrate, ratio_to_f64, scale_factor, ScaleFactor};
pub use reference::{reference_raw_reward, relative_drift};
pub use taylor::{exp_taylor, exp_taylor_scaled};
