//! Profit-taking strategy selection.
//!
//! Pure function of confidence and whether the signal is actionable. Higher
//! confidence shifts allocation toward the farther target; neutral or
//! reference-only signals get a watch/monitor label instead of a split.

use crate::domain::{Confidence, TpStrategy};

pub fn select_tp_strategy(confidence: Confidence, actionable: bool) -> TpStrategy {
    if !actionable {
        return if confidence.value >= 6.0 {
            TpStrategy::BreakoutWatch
        } else {
            TpStrategy::Monitor
        };
    }

    if confidence.value >= 8.5 {
        TpStrategy::Split30_70
    } else if confidence.value >= 7.5 {
        TpStrategy::Split50_50
    } else if confidence.value >= 6.0 {
        TpStrategy::Split70_30
    } else {
        TpStrategy::Split80_20
    }
}
