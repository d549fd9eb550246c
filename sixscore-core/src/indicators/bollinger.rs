//! Bollinger bands on closes.
//!
//! The middle band is the SMA over the same window; the outer bands sit
//! `multiplier` population standard deviations away. `bands_from_middle`
//! lets a caller that already holds that SMA skip recomputing it.

use crate::components::indicator::Indicator;
use crate::domain::BollingerSeries;
use crate::indicators::sma::rolling_mean;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BollingerBand {
    Upper,
    Middle,
    Lower,
}

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    multiplier: f64,
    band: BollingerBand,
    name: String,
}

impl Bollinger {
    fn with_band(period: usize, multiplier: f64, band: BollingerBand) -> Self {
        assert!(period >= 1, "Bollinger period must be >= 1");
        let line = match band {
            BollingerBand::Upper => "upper",
            BollingerBand::Middle => "middle",
            BollingerBand::Lower => "lower",
        };
        Self {
            period,
            multiplier,
            band,
            name: format!("boll.{line}"),
        }
    }

    pub fn upper(period: usize, multiplier: f64) -> Self {
        Self::with_band(period, multiplier, BollingerBand::Upper)
    }

    pub fn middle(period: usize, multiplier: f64) -> Self {
        Self::with_band(period, multiplier, BollingerBand::Middle)
    }

    pub fn lower(period: usize, multiplier: f64) -> Self {
        Self::with_band(period, multiplier, BollingerBand::Lower)
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// All three bands in one pass over `closes`.
    pub fn bands(&self, closes: &[f64]) -> BollingerSeries {
        self.bands_from_middle(closes, rolling_mean(closes, self.period))
    }

    /// All three bands, given the `period`-SMA of `closes` as the middle.
    ///
    /// Variance is `mean(d^2) - mean(d)^2` with `d` the closes shifted by
    /// the first finite close, which keeps the subtraction well conditioned.
    pub fn bands_from_middle(&self, closes: &[f64], middle: Vec<f64>) -> BollingerSeries {
        let shift = closes.iter().copied().find(|c| c.is_finite()).unwrap_or(0.0);
        let squares: Vec<f64> = closes.iter().map(|c| (c - shift) * (c - shift)).collect();
        let mean_square = rolling_mean(&squares, self.period);

        let mut upper = vec![f64::NAN; closes.len()];
        let mut lower = vec![f64::NAN; closes.len()];
        for (i, (&mid, &sq)) in middle.iter().zip(&mean_square).enumerate() {
            if mid.is_nan() || sq.is_nan() {
                continue;
            }
            let offset = mid - shift;
            let width = self.multiplier * (sq - offset * offset).max(0.0).sqrt();
            upper[i] = mid + width;
            lower[i] = mid - width;
        }

        BollingerSeries {
            upper,
            middle,
            lower,
        }
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, closes: &[f64]) -> Vec<f64> {
        let bands = self.bands(closes);
        match self.band {
            BollingerBand::Upper => bands.upper,
            BollingerBand::Middle => bands.middle,
            BollingerBand::Lower => bands.lower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, Sma};

    fn closes() -> Vec<f64> {
        (0..40)
            .map(|i| 25.0 + (i as f64 * 0.45).sin() * 1.8 + i as f64 * 0.03)
            .collect()
    }

    /// Direct two-pass population stddev of one window.
    fn window_stddev(window: &[f64]) -> f64 {
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let var = window.iter().map(|c| (c - mean).powi(2)).sum::<f64>() / window.len() as f64;
        var.sqrt()
    }

    #[test]
    fn width_matches_two_pass_stddev() {
        let closes = closes();
        let bands = Bollinger::middle(20, 2.0).bands(&closes);
        for i in 19..closes.len() {
            let sd = window_stddev(&closes[i - 19..=i]);
            assert_approx(bands.upper[i] - bands.middle[i], 2.0 * sd, 1e-9);
            assert_approx(bands.middle[i] - bands.lower[i], 2.0 * sd, 1e-9);
        }
    }

    #[test]
    fn middle_is_the_shared_sma() {
        let closes = closes();
        let ma = Sma::new(20).compute(&closes);
        let bands = Bollinger::middle(20, 2.0).bands(&closes);
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&bands.middle), bits(&ma));
    }

    #[test]
    fn reusing_the_middle_gives_identical_bands() {
        let closes = closes();
        let boll = Bollinger::upper(20, 2.0);
        let fresh = boll.bands(&closes);
        let reused = boll.bands_from_middle(&closes, Sma::new(20).compute(&closes));
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&fresh.upper), bits(&reused.upper));
        assert_eq!(bits(&fresh.lower), bits(&reused.lower));
    }

    #[test]
    fn flat_closes_collapse_onto_the_middle() {
        let bands = Bollinger::middle(20, 2.0).bands(&[250.0; 25]);
        assert_eq!(bands.upper[24], 250.0);
        assert_eq!(bands.lower[24], 250.0);
    }

    #[test]
    fn band_tail_is_finite_from_the_first_full_window() {
        // Support/resistance reads the last two values of each outer band
        let closes = &closes()[..21];
        let bands = Bollinger::middle(20, 2.0).bands(closes);
        assert!(bands.upper[18].is_nan());
        assert!(bands.upper[19..].iter().all(|v| v.is_finite()));
        assert!(bands.lower[19..].iter().all(|v| v.is_finite()));
    }

    #[test]
    fn single_line_compute_selects_its_band() {
        let closes = closes();
        let bands = Bollinger::middle(20, 2.0).bands(&closes);
        assert_eq!(Bollinger::upper(20, 2.0).compute(&closes)[30], bands.upper[30]);
        assert_eq!(Bollinger::lower(20, 2.0).compute(&closes)[30], bands.lower[30]);
        assert_eq!(Bollinger::lower(20, 2.0).name(), "boll.lower");
    }
}
