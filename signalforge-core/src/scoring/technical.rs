//! Technical scorer — 0–10 score from price history.
//!
//! Starts from a base of 5.0 and applies weighted adjustments from RSI,
//! MACD-vs-signal, the 50/200 moving-average trend (plus a recent golden
//! cross), and price position relative to both averages. Indicators whose
//! lookback window exceeds the available history contribute nothing; the
//! omission is recorded on the result so callers can see a degraded score.

use crate::config::TechnicalThresholds;
use crate::domain::{clamp_score, PriceBar};
use crate::indicators::{last_finite, macd, rsi, sma};

const BASE_SCORE: f64 = 5.0;

/// Technical score plus the evidence behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TechnicalScore {
    /// Clamped [0, 10].
    pub score: f64,
    /// Sum of all applied adjustments before clamping. Sign feeds the
    /// directional bias.
    pub net_adjustment: f64,
    pub rsi_applied: bool,
    pub macd_applied: bool,
    pub trend_applied: bool,
    pub golden_cross: bool,
}

impl TechnicalScore {
    /// True when at least one indicator window was too short for the series.
    pub fn degraded(&self) -> bool {
        !(self.rsi_applied && self.macd_applied && self.trend_applied)
    }
}

pub struct TechnicalScorer<'a> {
    thresholds: &'a TechnicalThresholds,
}

impl<'a> TechnicalScorer<'a> {
    pub fn new(thresholds: &'a TechnicalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn score(&self, bars: &[PriceBar]) -> TechnicalScore {
        let t = self.thresholds;
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let mut net = 0.0;

        // RSI band adjustment.
        let rsi_last = last_finite(&rsi(&closes, t.rsi_period));
        if let Some(value) = rsi_last {
            if value > t.rsi_overbought {
                net -= t.rsi_extreme_weight;
            } else if value < t.rsi_oversold {
                net += t.rsi_extreme_weight;
            } else if value >= t.rsi_neutral_low && value <= t.rsi_neutral_high {
                net += t.rsi_neutral_weight;
            }
        }

        // MACD line vs its signal line.
        let macd_pair = macd(&closes, t.macd_fast, t.macd_slow, t.macd_signal).last_pair();
        if let Some((macd_value, signal_value)) = macd_pair {
            if macd_value > signal_value {
                net += t.macd_weight;
            } else {
                net -= t.macd_weight;
            }
        }

        // Trend: short MA over long MA, with a bonus for a recent crossover.
        // Both averages must have filled for the comparison to mean anything.
        let short_ma = sma(&closes, t.ma_short);
        let long_ma = sma(&closes, t.ma_long);
        let short_last = last_finite(&short_ma);
        let long_last = last_finite(&long_ma);
        let mut golden_cross = false;
        if let (Some(s), Some(l)) = (short_last, long_last) {
            if s > l {
                net += t.trend_weight;
            }
            golden_cross = recent_cross_up(&short_ma, &long_ma, t.golden_cross_lookback);
            if golden_cross {
                net += t.golden_cross_weight;
            }
        }

        // Price position is checked against each average independently, so a
        // series long enough for the 50MA but not the 200MA still earns the
        // short-side credit.
        if let Some(&last_close) = closes.last() {
            if short_last.is_some_and(|s| last_close > s) {
                net += t.price_above_ma_weight;
            }
            if long_last.is_some_and(|l| last_close > l) {
                net += t.price_above_ma_weight;
            }
        }

        TechnicalScore {
            score: clamp_score(BASE_SCORE + net),
            net_adjustment: net,
            rsi_applied: rsi_last.is_some(),
            macd_applied: macd_pair.is_some(),
            trend_applied: short_last.is_some() && long_last.is_some(),
            golden_cross,
        }
    }
}

/// Whether the short MA crossed above the long MA within the last `lookback`
/// bars: some bar in that window has short <= long on the previous bar and
/// short > long on the bar itself.
fn recent_cross_up(short_ma: &[f64], long_ma: &[f64], lookback: usize) -> bool {
    let n = short_ma.len();
    if n < 2 {
        return false;
    }
    let start = n.saturating_sub(lookback).max(1);
    for i in start..n {
        let (s_prev, l_prev) = (short_ma[i - 1], long_ma[i - 1]);
        let (s, l) = (short_ma[i], long_ma[i]);
        if s_prev.is_finite() && l_prev.is_finite() && s.is_finite() && l.is_finite() {
            if s_prev <= l_prev && s > l {
                return true;
            }
        }
    }
    false
}
