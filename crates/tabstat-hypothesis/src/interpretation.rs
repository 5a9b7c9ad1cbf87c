//! Plain-language verdicts attached to every test result

use serde::{Deserialize, Serialize};
use std::fmt;

/// Magnitude band of a correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    /// |r| >= 0.7
    VeryStrong,
    /// |r| >= 0.5
    Strong,
    /// |r| >= 0.3
    Moderate,
    /// |r| >= 0.1
    Weak,
    /// Anything smaller
    VeryWeak,
}

impl CorrelationStrength {
    pub fn from_coefficient(r: f64) -> Self {
        let magnitude = r.abs();
        if magnitude >= 0.7 {
            Self::VeryStrong
        } else if magnitude >= 0.5 {
            Self::Strong
        } else if magnitude >= 0.3 {
            Self::Moderate
        } else if magnitude >= 0.1 {
            Self::Weak
        } else {
            Self::VeryWeak
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::VeryStrong => "Very strong",
            Self::Strong => "Strong",
            Self::Moderate => "Moderate",
            Self::Weak => "Weak",
            Self::VeryWeak => "Very weak or no",
        }
    }
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict comparison; `p == alpha` is not significant
fn is_significant(p_value: f64, alpha: f64) -> bool {
    p_value < alpha
}

fn p_comparison(p_value: f64, alpha: f64) -> String {
    if is_significant(p_value, alpha) {
        format!("p = {p_value:.4} < {alpha}")
    } else {
        format!("p = {p_value:.4} >= {alpha}")
    }
}

/// "statistically significant (p = 0.0120 < 0.05)" or the negated form
pub fn significance_clause(p_value: f64, alpha: f64) -> String {
    let verdict = if is_significant(p_value, alpha) {
        "statistically significant"
    } else {
        "not statistically significant"
    };
    format!("{verdict} ({})", p_comparison(p_value, alpha))
}

pub(crate) fn describe_correlation(r: f64, p_value: f64, alpha: f64) -> String {
    let strength = CorrelationStrength::from_coefficient(r);
    let direction = if r > 0.0 {
        " positive"
    } else if r < 0.0 {
        " negative"
    } else {
        ""
    };
    format!(
        "{strength}{direction} correlation, {}",
        significance_clause(p_value, alpha)
    )
}

pub(crate) fn undefined_correlation(constant_column: &str) -> String {
    format!("Correlation undefined: '{constant_column}' has zero variance")
}

fn difference_verdict(p_value: f64, alpha: f64) -> &'static str {
    if is_significant(p_value, alpha) {
        "Significant difference"
    } else {
        "No significant difference"
    }
}

pub(crate) fn describe_two_sample(
    numeric: &str,
    group1: &str,
    group2: &str,
    p_value: f64,
    alpha: f64,
) -> String {
    format!(
        "{} in mean '{numeric}' between groups '{group1}' and '{group2}' ({})",
        difference_verdict(p_value, alpha),
        p_comparison(p_value, alpha)
    )
}

pub(crate) fn describe_multi_sample(
    numeric: &str,
    categorical: &str,
    groups: usize,
    p_value: f64,
    alpha: f64,
) -> String {
    format!(
        "{} in mean '{numeric}' across the {groups} groups of '{categorical}' ({})",
        difference_verdict(p_value, alpha),
        p_comparison(p_value, alpha)
    )
}

pub(crate) fn describe_mean_test(numeric: &str, hypothesized: f64, p_value: f64, alpha: f64) -> String {
    let verdict = if is_significant(p_value, alpha) {
        "is significantly different from"
    } else {
        "is not significantly different from"
    };
    format!(
        "Mean of '{numeric}' {verdict} {hypothesized} ({})",
        p_comparison(p_value, alpha)
    )
}
