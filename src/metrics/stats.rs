// src/metrics/stats.rs
// Scalar statistics shared by the metric calculators.
//
// All functions assume non-empty input; callers validate series shape
// before reaching this module.

pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance (divide by n).
pub(crate) fn variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|&v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation (divide by n).
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Sample covariance (divide by n - 1). Requires at least 2 observations.
pub(crate) fn sample_covariance(xs: &[f64], ys: &[f64]) -> f64 {
    let mx = mean(xs);
    let my = mean(ys);
    let n = xs.len();
    xs.iter()
        .zip(ys.iter())
        .map(|(&x, &y)| (x - mx) * (y - my))
        .sum::<f64>()
        / (n - 1) as f64
}

/// Percentile with linear interpolation between the two nearest ranks.
///
/// `pct` is in [0, 100]. For a sorted sample of n values the target rank is
/// pct/100 * (n - 1); fractional ranks interpolate between neighbours.
pub(crate) fn percentile(values: &[f64], pct: f64) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&values) - 2.5).abs() < 1e-12);

        // Population variance: mean of squared deviations = 1.25
        assert!((variance(&values) - 1.25).abs() < 1e-12);
        assert!((std_dev(&values) - 1.25f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_covariance() {
        // Perfectly correlated pairs: cov equals var of x scaled by slope
        let xs = [1.0, 2.0, 3.0];
        let ys = [2.0, 4.0, 6.0];
        // sample cov = sum((x-2)(y-4)) / 2 = (2 + 0 + 2) / 2 = 2
        assert!((sample_covariance(&xs, &ys) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_percentile_interpolates() {
        let values = [3.0, 1.0, 2.0, 4.0, 5.0];
        // rank = 0.05 * 4 = 0.2 -> between 1.0 and 2.0
        assert!((percentile(&values, 5.0) - 1.2).abs() < 1e-12);
        // endpoints are exact
        assert!((percentile(&values, 0.0) - 1.0).abs() < 1e-12);
        assert!((percentile(&values, 100.0) - 5.0).abs() < 1e-12);
        // median
        assert!((percentile(&values, 50.0) - 3.0).abs() < 1e-12);
    }
}
