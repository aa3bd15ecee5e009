//! emission-calibrate — Derive the reward scale factors for the contract horizons.
//!
//! Evaluates the fixed-point decay curve over three years and four hours and
//! prints `TOTAL_REWARD / raw_reward` for each, to be hard-coded in the
//! contract. Logs go to stderr; stdout carries only the factors.

use anyhow::{Context, Result};
use clap::Parser;
use emission_core::constants::{LAMBDA_DECAY, SCALE, TOTAL_REWARD};
use emission_core::RewardCurve;
use emission_decay::{calibrate, relative_drift, TaylorCurve};
use tracing::{debug, info};

/// Fixed-point reward decay calibrator.
#[derive(Parser, Debug)]
#[command(
    name = "emission-calibrate",
    version,
    about = "Print reward scale factors for the 3-year and 4-hour horizons"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Log output format ("text" or "json")
    #[arg(long, default_value = "text")]
    log_format: String,
}

fn init_logging(level_str: &str, format: &str) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_str));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

/// Compute the output lines, one per horizon.
fn run() -> Result<Vec<String>> {
    let curve = TaylorCurve::new();
    let factors = calibrate(&curve).context("failed to calibrate scale factors")?;

    debug!(terms = curve.params().terms, "series length");
    let scale = curve.scale();
    let mut lines = Vec::with_capacity(factors.len());
    for sf in &factors {
        let drift = relative_drift(&sf.raw_reward, &scale, sf.horizon.seconds())
            .with_context(|| format!("failed to measure drift for {}", sf.horizon))?;
        debug!(horizon = %sf.horizon, drift, "drift from true exponential");
        lines.push(sf.to_string());
    }
    Ok(lines)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level, &args.log_format);

    info!(
        scale = %SCALE,
        lambda = %LAMBDA_DECAY,
        total_reward = %TOTAL_REWARD,
        "calibrating decay curve"
    );

    for line in run()? {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_both_horizons() {
        assert_eq!(
            run().unwrap(),
            vec![
                "factor_3_years: 58875190.375432476".to_string(),
                "factor_4_hours: 173636112311.111328125".to_string(),
            ]
        );
    }

    #[test]
    fn default_args() {
        let args = Args::try_parse_from(["emission-calibrate"]).unwrap();
        assert_eq!(args.log_level, "warn");
        assert_eq!(args.log_format, "text");
    }

    #[test]
    fn logging_flags() {
        let args = Args::try_parse_from([
            "emission-calibrate",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.log_level, "debug");
        assert_eq!(args.log_format, "json");
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Args::try_parse_from(["emission-calibrate", "94608000"]).is_err());
    }
}
