use std::f64::consts::PI;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdeError {
    #[error("cannot estimate a density from an empty sample")]
    EmptySample,

    #[error("sample contains non-finite values")]
    NonFinite,

    #[error("bandwidth must be positive and finite")]
    InvalidBandwidth,
}

/// Gaussian kernel density estimator with a fixed, absolute bandwidth.
#[derive(Debug, Clone)]
pub struct GaussianKde {
    samples: Vec<f64>,
    bandwidth: f64,
}

impl GaussianKde {
    pub fn new(samples: &[f64], bandwidth: f64) -> Result<Self, KdeError> {
        if !(bandwidth.is_finite() && bandwidth > 0.0) {
            return Err(KdeError::InvalidBandwidth);
        }
        if samples.is_empty() {
            return Err(KdeError::EmptySample);
        }
        if samples.iter().any(|s| !s.is_finite()) {
            return Err(KdeError::NonFinite);
        }
        Ok(Self {
            samples: samples.to_vec(),
            bandwidth,
        })
    }

    /// Density at `t`: `1 / (n h sqrt(2 pi)) * sum exp(-((t - s) / h)^2 / 2)`.
    pub fn density(&self, t: f64) -> f64 {
        let h = self.bandwidth;
        let norm = 1.0 / (self.samples.len() as f64 * h * (2.0 * PI).sqrt());
        let sum: f64 = self
            .samples
            .iter()
            .map(|&s| {
                let z = (t - s) / h;
                (-0.5 * z * z).exp()
            })
            .sum();
        norm * sum
    }

    /// Evaluate on `grid_size` evenly spaced points spanning the sample range
    /// widened by `cut` bandwidths on each side.
    pub fn curve(&self, cut: f64, grid_size: usize) -> Vec<[f64; 2]> {
        let min = self.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let lo = min - cut * self.bandwidth;
        let hi = max + cut * self.bandwidth;

        match grid_size {
            0 => Vec::new(),
            1 => vec![[lo, self.density(lo)]],
            n => {
                let step = (hi - lo) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let t = lo + step * i as f64;
                        [t, self.density(t)]
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point_is_a_gaussian_bump() {
        let kde = GaussianKde::new(&[0.5], 0.25).unwrap();
        let peak = 1.0 / (0.25 * (2.0 * PI).sqrt());
        assert!((kde.density(0.5) - peak).abs() < 1e-12);
        assert!((kde.density(0.25) - kde.density(0.75)).abs() < 1e-12);
        assert!(kde.density(0.25) < peak);
    }

    #[test]
    fn curve_spans_cut_bandwidths() {
        let kde = GaussianKde::new(&[0.0, 1.0], 0.25).unwrap();
        let curve = kde.curve(3.0, 100);
        assert_eq!(curve.len(), 100);
        assert!((curve[0][0] + 0.75).abs() < 1e-12);
        assert!((curve[99][0] - 1.75).abs() < 1e-12);
    }

    #[test]
    fn curve_integrates_to_about_one() {
        let kde = GaussianKde::new(&[0.2, 0.4, 0.45, 0.9], 0.25).unwrap();
        let curve = kde.curve(5.0, 2000);
        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1][0] - w[0][0]) * (w[0][1] + w[1][1]) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 1e-3, "area = {area}");
    }

    #[test]
    fn identical_samples_are_allowed() {
        let kde = GaussianKde::new(&[0.7071, 0.7071], 0.25).unwrap();
        assert!(kde.density(0.7071) > 0.0);
    }

    #[test]
    fn rejects_degenerate_input() {
        assert_eq!(GaussianKde::new(&[], 0.25).unwrap_err(), KdeError::EmptySample);
        assert_eq!(GaussianKde::new(&[f64::NAN], 0.25).unwrap_err(), KdeError::NonFinite);
        assert_eq!(GaussianKde::new(&[1.0], 0.0).unwrap_err(), KdeError::InvalidBandwidth);
        assert_eq!(
            GaussianKde::new(&[1.0], f64::INFINITY).unwrap_err(),
            KdeError::InvalidBandwidth
        );
    }
}
