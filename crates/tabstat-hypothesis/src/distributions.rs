//! Reference-distribution tail probabilities
//!
//! Each helper takes an already-computed statistic and returns a p-value
//! clamped to `[0, 1]`. A NaN statistic or an invalid parameter becomes a
//! [`SkipReason`] rather than a bogus probability.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, Normal, StudentsT};
use tabstat_core::SkipReason;

fn clamp_probability(p: f64) -> f64 {
    p.clamp(0.0, 1.0)
}

/// Two-sided p-value of `t` under Student's t with `df` degrees of freedom
///
/// An infinite `t` maps to zero.
pub fn students_t_two_sided(t: f64, df: f64) -> Result<f64, SkipReason> {
    if t.is_nan() {
        return Err(SkipReason::NonFiniteStatistic("t statistic"));
    }
    let dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        SkipReason::Distribution(format!("Failed to create t-distribution (df = {df}): {e}"))
    })?;
    if t.is_infinite() {
        return Ok(0.0);
    }
    Ok(clamp_probability(2.0 * dist.cdf(-t.abs())))
}

/// Two-sided p-value of `z` under the standard normal
pub fn normal_two_sided(z: f64) -> Result<f64, SkipReason> {
    if !z.is_finite() {
        return Err(SkipReason::NonFiniteStatistic("z statistic"));
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        SkipReason::Distribution(format!("Failed to create normal distribution: {e}"))
    })?;
    Ok(clamp_probability(2.0 * normal.cdf(-z.abs())))
}

/// Upper-tail probability of `f` under F(`df1`, `df2`)
pub fn f_upper_tail(f: f64, df1: f64, df2: f64) -> Result<f64, SkipReason> {
    if !f.is_finite() {
        return Err(SkipReason::NonFiniteStatistic("F statistic"));
    }
    let dist = FisherSnedecor::new(df1, df2).map_err(|e| {
        SkipReason::Distribution(format!(
            "Failed to create F-distribution (df = {df1}, {df2}): {e}"
        ))
    })?;
    Ok(clamp_probability(1.0 - dist.cdf(f)))
}
