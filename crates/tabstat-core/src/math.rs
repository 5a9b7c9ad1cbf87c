//! Mathematical utilities shared by the profiler and the hypothesis tests
//!
//! All functions operate on already-filtered samples (missing values removed)
//! and sum in slice order, so repeated calls on identical input are bit-for-bit
//! identical.

/// Sample moments
pub mod moments {
    /// Arithmetic mean, `None` for an empty sample
    pub fn mean(sample: &[f64]) -> Option<f64> {
        if sample.is_empty() {
            return None;
        }
        Some(sample.iter().sum::<f64>() / sample.len() as f64)
    }

    /// Sum of squared deviations from the mean
    pub fn sum_of_squares(sample: &[f64]) -> f64 {
        match mean(sample) {
            Some(m) => sample.iter().map(|&x| (x - m).powi(2)).sum(),
            None => 0.0,
        }
    }

    /// Sample variance (divides by n - 1), `None` when n < 2
    pub fn sample_variance(sample: &[f64]) -> Option<f64> {
        if sample.len() < 2 {
            return None;
        }
        Some(sum_of_squares(sample) / (sample.len() - 1) as f64)
    }

    /// Sample standard deviation (divides by n - 1), `None` when n < 2
    pub fn sample_std(sample: &[f64]) -> Option<f64> {
        sample_variance(sample).map(f64::sqrt)
    }

    /// True when every value equals the first (empty samples included)
    ///
    /// Exact comparison. A computed variance can come out a few ulps above
    /// zero for identical values, so zero-variance checks go through here.
    pub fn is_constant(sample: &[f64]) -> bool {
        sample.windows(2).all(|w| w[0] == w[1])
    }
}

/// Order statistics
pub mod quantiles {
    /// Sort a copy of the sample ascending
    pub fn sorted(sample: &[f64]) -> Vec<f64> {
        let mut sorted = sample.to_vec();
        sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }

    /// Quantile of pre-sorted data by linear interpolation between closest ranks
    ///
    /// Position is `p * (n - 1)`. Returns `None` for empty data or `p`
    /// outside `[0, 1]`.
    pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
        if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
            return None;
        }
        let position = p * (sorted.len() - 1) as f64;
        let lower = position.floor() as usize;
        let upper = position.ceil() as usize;
        let fraction = position - lower as f64;
        Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::moments::*;
    use super::quantiles::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_abs_diff_eq!(mean(&[10.0, 12.0, 20.0, 22.0]).unwrap(), 16.0);
    }

    #[test]
    fn test_sample_variance() {
        // numpy: np.var([2, 4, 4, 4, 5, 5, 7, 9], ddof=1) = 4.571428...
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(sample_variance(&data).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(sample_std(&data).unwrap(), (32.0f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_variance_needs_two_values() {
        assert_eq!(sample_variance(&[3.0]), None);
        assert_eq!(sample_std(&[]), None);
    }

    #[test]
    fn test_zero_variance() {
        assert_eq!(sample_std(&[5.0, 5.0, 5.0]), Some(0.0));
        assert_eq!(sum_of_squares(&[5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[]));
        assert!(is_constant(&[0.1]));
        assert!(is_constant(&[0.1, 0.1, 0.1]));
        assert!(!is_constant(&[0.1, 0.1, 0.2]));
    }

    #[test]
    fn test_quantiles_linear_interpolation() {
        // pandas: Series([10, 12, 20, 22]).quantile([.25, .5, .75]) = 11.5, 16, 20.5
        let sorted = sorted(&[22.0, 10.0, 20.0, 12.0]);
        assert_eq!(sorted, vec![10.0, 12.0, 20.0, 22.0]);
        assert_abs_diff_eq!(quantile_sorted(&sorted, 0.25).unwrap(), 11.5);
        assert_abs_diff_eq!(quantile_sorted(&sorted, 0.5).unwrap(), 16.0);
        assert_abs_diff_eq!(quantile_sorted(&sorted, 0.75).unwrap(), 20.5);
        assert_abs_diff_eq!(quantile_sorted(&sorted, 0.0).unwrap(), 10.0);
        assert_abs_diff_eq!(quantile_sorted(&sorted, 1.0).unwrap(), 22.0);
    }

    #[test]
    fn test_quantile_edge_cases() {
        assert_eq!(quantile_sorted(&[], 0.5), None);
        assert_eq!(quantile_sorted(&[1.0], 1.5), None);
        assert_eq!(quantile_sorted(&[7.0], 0.25), Some(7.0));
    }
}
