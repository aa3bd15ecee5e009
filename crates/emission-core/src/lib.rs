//! # emission-core
//! Foundation constants, types and traits for the emission calibrator.

pub mod constants;
pub mod error;
pub mod horizon;
pub mod traits;

pub use error::CurveError;
pub use horizon::Horizon;
pub use traits::RewardCurve;
