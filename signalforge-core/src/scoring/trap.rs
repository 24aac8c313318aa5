//! Trap detector (ZS-10+) — volume/price divergence scoring.
//!
//! A price move unsupported by volume is a trap for momentum-followers.
//! Volume-aware mode compares recent to baseline average volume against the
//! concurrent price change; rules are evaluated in declaration order, first
//! match wins. Without volume data the detector falls back to realized
//! volatility over the recent window.

use crate::config::TrapThresholds;
use crate::domain::{PriceBar, TrapMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapScore {
    /// Clamped [0, 10]; higher = more trap risk.
    pub score: f64,
    pub mode: TrapMode,
    /// Set when the series was too short for either analysis window.
    pub degraded: bool,
}

pub struct TrapDetector<'a> {
    thresholds: &'a TrapThresholds,
}

impl<'a> TrapDetector<'a> {
    pub fn new(thresholds: &'a TrapThresholds) -> Self {
        Self { thresholds }
    }

    pub fn score(&self, bars: &[PriceBar]) -> TrapScore {
        let t = self.thresholds;
        let n = bars.len();

        // Need at least the baseline window to say anything about volume and
        // at least recent_window + 1 closes for a price change.
        if n <= t.recent_window {
            return TrapScore {
                score: 5.0,
                mode: TrapMode::PriceOnly,
                degraded: true,
            };
        }

        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let price_change = closes[n - 1] / closes[n - t.recent_window] - 1.0;

        if let Some(volume_ratio) = self.volume_ratio(bars) {
            return TrapScore {
                score: self.volume_rules(volume_ratio, price_change),
                mode: TrapMode::VolumeAware,
                degraded: false,
            };
        }

        self.price_only(&closes)
    }

    /// mean(volume, recent window) / mean(volume, baseline window), if every
    /// bar in the baseline window reports volume and the baseline mean is
    /// positive.
    fn volume_ratio(&self, bars: &[PriceBar]) -> Option<f64> {
        let t = self.thresholds;
        let n = bars.len();
        if n < t.baseline_window {
            return None;
        }

        let baseline_bars = &bars[n - t.baseline_window..];
        let mut baseline_sum = 0.0;
        for bar in baseline_bars {
            baseline_sum += bar.volume?;
        }
        let baseline_mean = baseline_sum / t.baseline_window as f64;
        if baseline_mean <= 0.0 {
            return None;
        }

        let recent_sum: f64 = bars[n - t.recent_window..]
            .iter()
            .map(|b| b.volume.unwrap_or(0.0))
            .sum();
        Some(recent_sum / t.recent_window as f64 / baseline_mean)
    }

    /// Ordered volume/price divergence rules; first match wins.
    fn volume_rules(&self, volume_ratio: f64, price_change: f64) -> f64 {
        let t = self.thresholds;
        if volume_ratio <= t.collapse_ratio && price_change >= t.strong_move {
            8.0 // price up hard on collapsing volume
        } else if volume_ratio <= t.soft_ratio && price_change >= t.moderate_move {
            6.0
        } else if volume_ratio >= t.surge_ratio && price_change >= t.mild_move {
            2.0 // move confirmed by volume
        } else {
            4.0
        }
    }

    fn price_only(&self, closes: &[f64]) -> TrapScore {
        let t = self.thresholds;
        let n = closes.len();
        if n < t.volatility_window {
            return TrapScore {
                score: 5.0,
                mode: TrapMode::PriceOnly,
                degraded: true,
            };
        }

        let window = &closes[n - t.volatility_window..];
        let mean = window.iter().sum::<f64>() / window.len() as f64;
        let variance = window
            .iter()
            .map(|c| (c - mean).powi(2))
            .sum::<f64>()
            / (window.len() - 1) as f64;
        let volatility = variance.sqrt() / mean;

        let max_bar_move = window
            .windows(2)
            .map(|pair| (pair[1] / pair[0] - 1.0).abs())
            .fold(0.0, f64::max);

        let score = if volatility > t.high_volatility && max_bar_move > t.max_bar_move {
            7.0
        } else if volatility < t.low_volatility {
            3.0
        } else {
            5.0
        };

        TrapScore {
            score,
            mode: TrapMode::PriceOnly,
            degraded: false,
        }
    }
}
