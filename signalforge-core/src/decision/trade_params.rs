//! Trade parameter calculation — ATR-based stops, targets, and sizing.
//!
//! Classic risk management: entry at the last close, stop at a multiple of
//! ATR, targets at fixed reward/risk multiples of the stop distance, size
//! from the fraction of equity risked per trade.
//!
//! # Formula
//! ```text
//! risk_distance = atr_multiplier * ATR(period)
//! stop          = entry -/+ risk_distance        (sign per direction)
//! tp1           = entry +/- risk_distance * tp1_rr
//! tp2           = entry +/- risk_distance * tp2_rr
//! position_size = (account_equity * risk_per_trade) / risk_distance
//! ```
//!
//! A series that cannot produce a finite positive ATR (flat closes, too few
//! bars) yields `None`: the signal is still emitted, reference-only, with no
//! invented fallback distance.

use crate::config::RiskConfig;
use crate::domain::{Direction, PriceBar, TradeParameters};
use crate::indicators::{atr, last_finite};

pub struct TradeParameterCalculator<'a> {
    risk: &'a RiskConfig,
    /// Risk/reward floor below which parameters are marked reference-only.
    min_risk_reward: f64,
}

impl<'a> TradeParameterCalculator<'a> {
    pub fn new(risk: &'a RiskConfig, min_risk_reward: f64) -> Self {
        Self {
            risk,
            min_risk_reward,
        }
    }

    pub fn calculate(&self, bars: &[PriceBar], direction: Direction) -> Option<TradeParameters> {
        let r = self.risk;
        let entry = bars.last().map(|b| b.close).filter(|c| *c > 0.0)?;

        let atr_value = last_finite(&atr(bars, r.atr_period)).filter(|a| *a > 0.0)?;
        let risk_distance = atr_value * r.atr_multiplier;

        // Neutral directions get long-side reference levels.
        let sign = match direction {
            Direction::Long | Direction::Neutral => 1.0,
            Direction::Short => -1.0,
        };

        let stop_loss = entry - sign * risk_distance;
        let take_profit_1 = entry + sign * risk_distance * r.tp1_risk_reward;
        let take_profit_2 = entry + sign * risk_distance * r.tp2_risk_reward;
        let position_size = r.account_equity * r.risk_per_trade / risk_distance;

        let reference_only =
            !direction.is_actionable() || r.tp1_risk_reward < self.min_risk_reward;

        Some(TradeParameters {
            entry,
            stop_loss,
            take_profit_1,
            take_profit_2,
            position_size,
            reference_only,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Bars with constant true range 4.0 (high-low), flat closes at 100.
    fn steady_bars(n: usize) -> Vec<PriceBar> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open: 100.0,
                high: 102.0,
                low: 98.0,
                close: 100.0,
                volume: Some(1000.0),
            })
            .collect()
    }

    fn calc(risk: &RiskConfig) -> TradeParameterCalculator<'_> {
        TradeParameterCalculator::new(risk, 2.0)
    }

    #[test]
    fn long_levels_and_size() {
        // ATR = 4.0, multiplier 2.0 → risk distance 8.0.
        // Equity 10_000 at 1.5% → risk 150 → size 18.75.
        let risk = RiskConfig::default();
        let p = calc(&risk)
            .calculate(&steady_bars(30), Direction::Long)
            .unwrap();
        assert_eq!(p.entry, 100.0);
        assert_eq!(p.stop_loss, 92.0);
        assert_eq!(p.take_profit_1, 116.0);
        assert_eq!(p.take_profit_2, 124.0);
        assert_eq!(p.position_size, 18.75);
        assert!(!p.reference_only);
        assert!(p.levels_ordered(Direction::Long));
        assert_eq!(p.risk_reward(), 2.0);
    }

    #[test]
    fn short_levels_are_mirrored() {
        let risk = RiskConfig::default();
        let p = calc(&risk)
            .calculate(&steady_bars(30), Direction::Short)
            .unwrap();
        assert_eq!(p.stop_loss, 108.0);
        assert_eq!(p.take_profit_1, 84.0);
        assert_eq!(p.take_profit_2, 76.0);
        assert!(p.levels_ordered(Direction::Short));
    }

    #[test]
    fn neutral_direction_is_reference_only() {
        let risk = RiskConfig::default();
        let p = calc(&risk)
            .calculate(&steady_bars(30), Direction::Neutral)
            .unwrap();
        assert!(p.reference_only);
        // Long-side orientation for reference levels.
        assert!(p.stop_loss < p.entry && p.entry < p.take_profit_1);
    }

    #[test]
    fn degenerate_series_yields_none() {
        // Zero-range bars: true range 0 everywhere → ATR 0.
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars: Vec<PriceBar> = (0..30)
            .map(|i| PriceBar {
                date: base_date + chrono::Duration::days(i as i64),
                open: 100.0,
                high: 100.0,
                low: 100.0,
                close: 100.0,
                volume: Some(1000.0),
            })
            .collect();
        let risk = RiskConfig::default();
        assert!(calc(&risk).calculate(&bars, Direction::Long).is_none());
    }

    #[test]
    fn too_few_bars_yields_none() {
        let risk = RiskConfig::default();
        assert!(calc(&risk)
            .calculate(&steady_bars(5), Direction::Long)
            .is_none());
    }

    #[test]
    fn sub_minimum_rr_config_marks_reference_only() {
        let risk = RiskConfig {
            tp1_risk_reward: 1.5,
            ..Default::default()
        };
        let p = TradeParameterCalculator::new(&risk, 2.0)
            .calculate(&steady_bars(30), Direction::Long)
            .unwrap();
        assert!(p.reference_only);
    }
}
