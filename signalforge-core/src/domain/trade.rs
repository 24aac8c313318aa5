//! Trade parameters and profit-taking strategy labels.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::signal::Direction;

/// Concrete trade levels plus a risk-based position size.
///
/// Ordering invariant: for Long, stop_loss < entry < take_profit_1 <=
/// take_profit_2; reversed for Short. `reference_only` levels are computed
/// for context (Neutral direction, or risk/reward below the configured
/// minimum) and are not actionable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeParameters {
    pub entry: f64,
    pub stop_loss: f64,
    pub take_profit_1: f64,
    pub take_profit_2: f64,
    /// Units (shares/contracts), fractional for forex and crypto.
    pub position_size: f64,
    pub reference_only: bool,
}

impl TradeParameters {
    /// Distance between entry and stop, always positive.
    pub fn risk_distance(&self) -> f64 {
        (self.entry - self.stop_loss).abs()
    }

    /// Reward at the first target relative to the risk distance.
    pub fn risk_reward(&self) -> f64 {
        let risk = self.risk_distance();
        if risk == 0.0 {
            return 0.0;
        }
        (self.take_profit_1 - self.entry).abs() / risk
    }

    /// Check the level ordering invariant for the given direction. Neutral
    /// reference levels use the long-side orientation.
    pub fn levels_ordered(&self, direction: Direction) -> bool {
        match direction {
            Direction::Long | Direction::Neutral => {
                self.stop_loss < self.entry
                    && self.entry < self.take_profit_1
                    && self.take_profit_1 <= self.take_profit_2
            }
            Direction::Short => {
                self.stop_loss > self.entry
                    && self.entry > self.take_profit_1
                    && self.take_profit_1 >= self.take_profit_2
            }
        }
    }
}

/// Confidence-dependent split between the two take-profit targets.
///
/// Labels follow the notifier wording so downstream consumers render them
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TpStrategy {
    /// High conviction: let most of the position run to TP2.
    Split30_70,
    Split50_50,
    Split70_30,
    /// Low conviction: take most profit at TP1.
    Split80_20,
    /// Neutral/reference setup with enough confidence to watch for a breakout.
    BreakoutWatch,
    /// Neutral/reference setup, no actionable plan.
    Monitor,
}

impl fmt::Display for TpStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Split30_70 => "TP1 30% / TP2 70%",
            Self::Split50_50 => "TP1 50% / TP2 50%",
            Self::Split70_30 => "TP1 70% / TP2 30%",
            Self::Split80_20 => "TP1 80% / TP2 20%",
            Self::BreakoutWatch => "If breakout: TP1 70% / TP2 30%",
            Self::Monitor => "Monitor for signals",
        };
        write!(f, "{label}")
    }
}
