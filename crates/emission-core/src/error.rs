//! Error types for the emission calibrator.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("exponential series evaluated to zero")] ZeroExponential,
    #[error("division by zero")] ZeroDenominator,
    #[error("raw reward is zero after {seconds}s; no scale factor exists")] ZeroRawReward { seconds: u64 },
    #[error("ratio is not representable as a finite f64")] NonFiniteRatio,
}
